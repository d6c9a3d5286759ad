//! Attribute extraction across all nodes or edges of a graph.

use super::{AttrValue, AttributedGraph};

/// Collect attribute `attribute` of every node, in node-id order, as text.
///
/// Returns `None` when the graph has nodes but none of them carries the
/// attribute. Nodes lacking it yield `None` entries. Non-text values are
/// rendered with their `Display` form, so an integer name `7` becomes `"7"`.
///
/// # Examples
///
/// ```
/// use diffusion_gate::graph::{node_label_list, Graph};
///
/// let mut g = Graph::from_edges(&[(0, 1), (1, 2)], false);
/// g.set_node_names(["A", "B"]);
///
/// let names = node_label_list(&g, "name").expect("some nodes are named");
/// assert_eq!(names, vec![Some("A".to_string()), Some("B".to_string()), None]);
/// assert!(node_label_list(&g, "symbol").is_none());
/// ```
#[must_use]
pub fn node_label_list<G>(graph: &G, attribute: &str) -> Option<Vec<Option<String>>>
where
    G: AttributedGraph + ?Sized,
{
    let labels: Vec<Option<String>> = (0..graph.num_nodes())
        .map(|node| graph.node_attr(node, attribute).map(ToString::to_string))
        .collect();

    if !labels.is_empty() && labels.iter().all(Option::is_none) {
        return None;
    }
    Some(labels)
}

/// Collect attribute `attribute` of every edge, in edge-id order.
#[must_use]
pub fn edge_attribute_list<'g, G>(graph: &'g G, attribute: &str) -> Vec<Option<&'g AttrValue>>
where
    G: AttributedGraph + ?Sized,
{
    (0..graph.num_edges())
        .map(|edge| graph.edge_attr(edge, attribute))
        .collect()
}
