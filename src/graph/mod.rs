//! Attributed graphs used as the diffusion substrate.
//!
//! Nodes and edges carry string-keyed attribute maps, the way network
//! biology graphs are usually exchanged: a `name` on every node and an
//! optional `weight` on every edge. Validators consume graphs only through
//! the [`AttributedGraph`] trait, so callers may plug in their own store.
//!
//! # Examples
//!
//! ```
//! use diffusion_gate::graph::{AttributedGraph, Graph};
//!
//! let mut g = Graph::from_weighted_edges(&[(0, 1, 1.0), (1, 2, 0.5)], false);
//! g.set_node_names(["A", "B", "C"]);
//!
//! assert_eq!(g.num_nodes(), 3);
//! assert_eq!(g.edge_attr(1, "weight").and_then(|w| w.as_f64()), Some(0.5));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

mod labels;

pub use labels::{edge_attribute_list, node_label_list};

/// Graph node identifier (contiguous integers).
pub type NodeId = usize;

/// Graph edge identifier (insertion order).
pub type EdgeId = usize;

/// Attribute key holding node names.
pub const NAME_ATTRIBUTE: &str = "name";

/// Attribute key holding edge weights.
pub const WEIGHT_ATTRIBUTE: &str = "weight";

/// Value of a node or edge attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Text value
    Str(String),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Boolean flag
    Bool(bool),
}

impl AttrValue {
    /// Numeric view of the value (integers and floats only).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Str(_) | Self::Bool(_) => None,
        }
    }

    /// Text view of the value (strings only).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => write!(f, "{s}"),
            AttrValue::Int(v) => write!(f, "{v}"),
            AttrValue::Float(v) => write!(f, "{v}"),
            AttrValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Attribute map of a node or edge.
pub type Attributes = BTreeMap<String, AttrValue>;

/// Graph edge with its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub attrs: Attributes,
}

/// Read-only view of a node/edge structure with attribute lookup.
///
/// This is the capability set the graph validator requires. Node ids run
/// from `0` to `num_nodes() - 1` and edge ids from `0` to `num_edges() - 1`.
pub trait AttributedGraph {
    /// Whether edges are directed.
    fn is_directed(&self) -> bool;

    /// Number of nodes.
    fn num_nodes(&self) -> usize;

    /// Number of edges.
    fn num_edges(&self) -> usize;

    /// Attribute `key` of `node`, if set.
    fn node_attr(&self, node: NodeId, key: &str) -> Option<&AttrValue>;

    /// Endpoints of `edge` as (source, target).
    fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)>;

    /// Attribute `key` of `edge`, if set.
    fn edge_attr(&self, edge: EdgeId, key: &str) -> Option<&AttrValue>;
}

/// Edge-list graph with per-node and per-edge attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<Attributes>,
    edges: Vec<Edge>,
    is_directed: bool,
}

impl Graph {
    /// Create empty graph.
    ///
    /// # Arguments
    /// * `is_directed` - Whether the graph is directed
    ///
    /// # Examples
    /// ```
    /// use diffusion_gate::graph::{AttributedGraph, Graph};
    ///
    /// let g = Graph::new(false); // undirected
    /// assert_eq!(g.num_nodes(), 0);
    /// ```
    #[must_use]
    pub fn new(is_directed: bool) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            is_directed,
        }
    }

    /// Build graph from edge list.
    ///
    /// The number of nodes is the largest node id in the list plus one.
    ///
    /// # Examples
    /// ```
    /// use diffusion_gate::graph::{AttributedGraph, Graph};
    ///
    /// let g = Graph::from_edges(&[(0, 1), (1, 2), (2, 0)], true);
    /// assert_eq!(g.num_nodes(), 3);
    /// assert_eq!(g.num_edges(), 3);
    /// ```
    #[must_use]
    pub fn from_edges(edges: &[(NodeId, NodeId)], is_directed: bool) -> Self {
        let mut g = Self::new(is_directed);
        for &(source, target) in edges {
            g.add_edge(source, target);
        }
        g
    }

    /// Build weighted graph from edge list with weights.
    ///
    /// # Examples
    /// ```
    /// use diffusion_gate::graph::{AttributedGraph, Graph};
    ///
    /// let g = Graph::from_weighted_edges(&[(0, 1, 1.0), (1, 2, 2.5)], false);
    /// assert_eq!(g.num_nodes(), 3);
    /// assert_eq!(g.num_edges(), 2);
    /// ```
    #[must_use]
    pub fn from_weighted_edges(edges: &[(NodeId, NodeId, f64)], is_directed: bool) -> Self {
        let mut g = Self::new(is_directed);
        for &(source, target, weight) in edges {
            g.add_weighted_edge(source, target, weight);
        }
        g
    }

    /// Add a node without attributes and return its id.
    pub fn add_node(&mut self) -> NodeId {
        self.nodes.push(Attributes::new());
        self.nodes.len() - 1
    }

    /// Add a node carrying a `name` attribute and return its id.
    pub fn add_named_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = self.add_node();
        self.set_node_attr(id, NAME_ATTRIBUTE, AttrValue::Str(name.into()));
        id
    }

    /// Set an attribute on `node`, growing the node set if needed.
    pub fn set_node_attr(
        &mut self,
        node: NodeId,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) {
        self.ensure_node(node);
        self.nodes[node].insert(key.into(), value.into());
    }

    /// Assign `name` attributes to nodes `0..names.len()` in order.
    pub fn set_node_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (node, name) in names.into_iter().enumerate() {
            self.set_node_attr(node, NAME_ATTRIBUTE, AttrValue::Str(name.into()));
        }
    }

    /// Add an edge without attributes and return its id.
    ///
    /// Endpoints that do not exist yet are created.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        self.ensure_node(source.max(target));
        self.edges.push(Edge {
            source,
            target,
            attrs: Attributes::new(),
        });
        self.edges.len() - 1
    }

    /// Add an edge carrying a `weight` attribute and return its id.
    pub fn add_weighted_edge(&mut self, source: NodeId, target: NodeId, weight: f64) -> EdgeId {
        let id = self.add_edge(source, target);
        self.edges[id]
            .attrs
            .insert(WEIGHT_ATTRIBUTE.to_string(), AttrValue::Float(weight));
        id
    }

    /// Set an attribute on an existing edge.
    ///
    /// Returns false if the edge does not exist.
    pub fn set_edge_attr(
        &mut self,
        edge: EdgeId,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> bool {
        match self.edges.get_mut(edge) {
            Some(e) => {
                e.attrs.insert(key.into(), value.into());
                true
            }
            None => false,
        }
    }

    /// Edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Attribute map of `node`.
    #[must_use]
    pub fn node_attrs(&self, node: NodeId) -> Option<&Attributes> {
        self.nodes.get(node)
    }

    fn ensure_node(&mut self, node: NodeId) {
        if node >= self.nodes.len() {
            self.nodes.resize_with(node + 1, Attributes::new);
        }
    }
}

impl AttributedGraph for Graph {
    fn is_directed(&self) -> bool {
        self.is_directed
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn node_attr(&self, node: NodeId, key: &str) -> Option<&AttrValue> {
        self.nodes.get(node)?.get(key)
    }

    fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(edge).map(|e| (e.source, e.target))
    }

    fn edge_attr(&self, edge: EdgeId, key: &str) -> Option<&AttrValue> {
        self.edges.get(edge)?.attrs.get(key)
    }
}
