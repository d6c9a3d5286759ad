pub(crate) use super::*;
use crate::graph::{EdgeId, Graph};

fn named(edges: &[(NodeId, NodeId)], names: &[&str], directed: bool) -> Graph {
    let mut g = Graph::from_edges(edges, directed);
    g.set_node_names(names.iter().copied());
    g
}

fn weighted(edges: &[(NodeId, NodeId, f64)], names: &[&str]) -> Graph {
    let mut g = Graph::from_weighted_edges(edges, false);
    g.set_node_names(names.iter().copied());
    g
}

#[test]
fn test_missing_graph() {
    assert_eq!(
        validate_graph::<Graph>(None),
        Err(ValidationError::MissingGraph)
    );
}

#[test]
fn test_valid_undirected_graph_is_clean() {
    let g = named(&[(0, 1), (1, 2)], &["A", "B", "C"], false);
    let report = validate_graph(Some(&g)).expect("valid graph");
    assert!(report.is_clean());
}

#[test]
fn test_empty_graph_is_valid() {
    let g = Graph::new(false);
    assert_eq!(validate_graph(Some(&g)), Ok(GraphReport::default()));
}

#[test]
fn test_nodes_without_names() {
    let g = Graph::from_edges(&[(0, 1)], false);
    assert_eq!(
        validate_graph(Some(&g)),
        Err(ValidationError::MissingNodeNames {
            attribute: "name".into()
        })
    );
}

#[test]
fn test_one_node_without_name() {
    let g = named(&[(0, 1), (1, 2)], &["A", "B"], false);
    assert_eq!(
        validate_graph(Some(&g)),
        Err(ValidationError::MissingNodeName { node: 2 })
    );
}

#[test]
fn test_na_token_name_is_missing() {
    let g = named(&[(0, 1)], &["NA", "B"], false);
    assert_eq!(
        validate_graph(Some(&g)),
        Err(ValidationError::MissingNodeName { node: 0 })
    );
}

#[test]
fn test_duplicate_names() {
    let mut g = Graph::new(false);
    let x1 = g.add_named_node("X");
    let y = g.add_named_node("Y");
    let x2 = g.add_named_node("X");
    g.add_edge(x1, y);
    g.add_edge(y, x2);
    assert_eq!(
        validate_graph(Some(&g)),
        Err(ValidationError::DuplicateNodeName { name: "X".into() })
    );
}

#[test]
fn test_directed_graph_is_advisory() {
    let g = named(&[(0, 1)], &["A", "B"], true);
    let report = validate_graph(Some(&g)).expect("directed graphs are tolerated");
    assert!(!report.is_clean());
    assert!(report.is_directed());
    assert_eq!(report.advisories, vec![Advisory::DirectedGraph]);
}

#[test]
fn test_positive_weights_are_clean() {
    let g = weighted(&[(0, 1, 1.0), (1, 2, 0.0)], &["A", "B", "C"]);
    assert!(validate_graph(Some(&g)).expect("valid graph").is_clean());
}

#[test]
fn test_integer_weights_accepted() {
    let mut g = named(&[(0, 1)], &["A", "B"], false);
    g.set_edge_attr(0, "weight", 2_i64);
    assert!(validate_graph(Some(&g)).is_ok());
}

#[test]
fn test_partial_weights_are_fatal() {
    let mut g = weighted(&[(0, 1, 1.0)], &["A", "B", "C"]);
    g.add_edge(1, 2);
    assert_eq!(
        validate_graph(Some(&g)),
        Err(ValidationError::MissingEdgeWeight {
            source: "B".into(),
            target: "C".into(),
        })
    );
}

#[test]
fn test_nan_weight_is_missing() {
    let g = weighted(&[(0, 1, f64::NAN)], &["A", "B"]);
    assert!(matches!(
        validate_graph(Some(&g)),
        Err(ValidationError::MissingEdgeWeight { .. })
    ));
}

#[test]
fn test_text_weights() {
    let mut g = named(&[(0, 1), (1, 2)], &["A", "B", "C"], false);
    g.set_edge_attr(0, "weight", 1.0);
    g.set_edge_attr(1, "weight", "high");
    assert_eq!(
        validate_graph(Some(&g)),
        Err(ValidationError::NonNumericEdgeWeight {
            source: "B".into(),
            target: "C".into(),
            value: "high".into(),
        })
    );

    g.set_edge_attr(1, "weight", "NA");
    assert!(matches!(
        validate_graph(Some(&g)),
        Err(ValidationError::MissingEdgeWeight { .. })
    ));
}

#[test]
fn test_negative_weights_are_advisories() {
    let mut g = Graph::from_weighted_edges(&[(0, 1, -1.0), (1, 2, 2.0), (2, 0, -0.5)], true);
    g.set_node_names(["A", "B", "C"]);
    let report = validate_graph(Some(&g)).expect("negative weights are tolerated");
    assert_eq!(
        report.advisories,
        vec![
            Advisory::DirectedGraph,
            Advisory::NegativeEdgeWeight {
                source: "A".into(),
                target: "B".into(),
                weight: -1.0,
            },
            Advisory::NegativeEdgeWeight {
                source: "C".into(),
                target: "A".into(),
                weight: -0.5,
            },
        ]
    );
    assert_eq!(report.negative_weights().count(), 2);
}

#[test]
fn test_custom_attribute_names() {
    let mut g = Graph::from_edges(&[(0, 1)], false);
    g.set_node_attr(0, "symbol", "TP53");
    g.set_node_attr(1, "symbol", "MDM2");
    g.set_edge_attr(0, "confidence", -0.2);

    let config = ValidationConfig::new()
        .with_name_attribute("symbol")
        .with_weight_attribute("confidence")
        .with_advisory_logging(false);
    let report = validate_graph_with(Some(&g), &config).expect("valid with custom attributes");
    assert_eq!(report.negative_weights().count(), 1);

    assert!(validate_graph(Some(&g)).is_err());
}

#[test]
fn test_numeric_names_are_stringified() {
    let mut g = Graph::from_edges(&[(0, 1)], false);
    g.set_node_attr(0, "name", 1_i64);
    g.set_node_attr(1, "name", "1");
    assert_eq!(
        validate_graph(Some(&g)),
        Err(ValidationError::DuplicateNodeName { name: "1".into() })
    );
}

/// Two-node graph backed by fixed arrays.
struct Pair {
    names: [AttrValue; 2],
    weight: Option<AttrValue>,
}

impl AttributedGraph for Pair {
    fn is_directed(&self) -> bool {
        false
    }

    fn num_nodes(&self) -> usize {
        2
    }

    fn num_edges(&self) -> usize {
        1
    }

    fn node_attr(&self, node: NodeId, key: &str) -> Option<&AttrValue> {
        (key == "name").then(|| self.names.get(node)).flatten()
    }

    fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        (edge == 0).then_some((0, 1))
    }

    fn edge_attr(&self, edge: EdgeId, key: &str) -> Option<&AttrValue> {
        if edge == 0 && key == "weight" {
            self.weight.as_ref()
        } else {
            None
        }
    }
}

#[test]
fn test_custom_graph_implementation() {
    let pair = Pair {
        names: ["A".into(), "B".into()],
        weight: Some(AttrValue::Float(-3.0)),
    };
    let report = validate_graph(Some(&pair)).expect("valid pair");
    assert_eq!(report.negative_weights().count(), 1);

    let view: &dyn AttributedGraph = &pair;
    assert!(validate_graph(Some(view)).is_ok());
}
