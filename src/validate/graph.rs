//! Graph validation.

use super::{Advisory, GraphReport};
use crate::config::ValidationConfig;
use crate::error::{Result, ValidationError};
use crate::graph::{edge_attribute_list, node_label_list, AttrValue, AttributedGraph, NodeId};
use crate::primitives::{is_missing_label, is_missing_token};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Check that `graph` is a usable diffusion substrate, with default settings.
///
/// See [`validate_graph_with`].
///
/// # Errors
///
/// Returns the first fatal violation.
///
/// # Examples
///
/// ```
/// use diffusion_gate::prelude::*;
///
/// let mut g = Graph::new(false);
/// g.add_named_node("X");
/// g.add_named_node("X");
/// assert!(validate_graph(Some(&g)).is_err());
///
/// assert!(validate_graph::<Graph>(None).is_err());
/// ```
pub fn validate_graph<G>(graph: Option<&G>) -> Result<GraphReport>
where
    G: AttributedGraph + ?Sized,
{
    validate_graph_with(graph, &ValidationConfig::default())
}

/// Check that `graph` is a usable diffusion substrate.
///
/// Fatal checks, in order:
/// 1. a graph is supplied
/// 2. nodes carry the name attribute, and no name is missing
/// 3. names are unique
/// 4. if any edge carries the weight attribute, every edge carries a
///    numeric, non-missing one
///
/// Non-fatal findings are collected in the returned [`GraphReport`]: a
/// directed graph, and every negative edge weight. They are also logged at
/// `warn` level when [`ValidationConfig::log_advisories`] is set.
///
/// # Errors
///
/// Returns the first fatal violation.
pub fn validate_graph_with<G>(graph: Option<&G>, config: &ValidationConfig) -> Result<GraphReport>
where
    G: AttributedGraph + ?Sized,
{
    let graph = graph.ok_or(ValidationError::MissingGraph)?;
    debug!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        directed = graph.is_directed(),
        "validating graph"
    );

    let names = node_label_list(graph, &config.name_attribute).ok_or_else(|| {
        ValidationError::MissingNodeNames {
            attribute: config.name_attribute.clone(),
        }
    })?;

    if let Some(node) = names.iter().position(|n| is_missing_label(n.as_deref())) {
        return Err(ValidationError::MissingNodeName { node });
    }

    let mut seen = HashSet::with_capacity(names.len());
    for name in names.iter().flatten() {
        if !seen.insert(name.as_str()) {
            return Err(ValidationError::DuplicateNodeName { name: name.clone() });
        }
    }

    let mut report = GraphReport::default();

    if graph.is_directed() {
        record(&mut report, Advisory::DirectedGraph, config);
    }

    let weights = edge_attribute_list(graph, &config.weight_attribute);
    if weights.iter().any(Option::is_some) {
        for (edge, weight) in weights.into_iter().enumerate() {
            let Some((source, target)) = graph.edge_endpoints(edge) else {
                continue;
            };
            let source = node_name(&names, source);
            let target = node_name(&names, target);

            match weight.map(AttrValue::as_f64) {
                None => return Err(ValidationError::MissingEdgeWeight { source, target }),
                Some(Some(w)) if w.is_nan() => {
                    return Err(ValidationError::MissingEdgeWeight { source, target })
                }
                Some(Some(w)) if w < 0.0 => record(
                    &mut report,
                    Advisory::NegativeEdgeWeight {
                        source,
                        target,
                        weight: w,
                    },
                    config,
                ),
                Some(Some(_)) => {}
                Some(None) => {
                    let value = weight.map(ToString::to_string).unwrap_or_default();
                    if is_missing_token(&value) {
                        return Err(ValidationError::MissingEdgeWeight { source, target });
                    }
                    return Err(ValidationError::NonNumericEdgeWeight {
                        source,
                        target,
                        value,
                    });
                }
            }
        }
    }

    Ok(report)
}

fn record(report: &mut GraphReport, advisory: Advisory, config: &ValidationConfig) {
    if config.log_advisories {
        warn!("graph advisory: {advisory}");
    }
    report.advisories.push(advisory);
}

fn node_name(names: &[Option<String>], node: NodeId) -> String {
    names
        .get(node)
        .cloned()
        .flatten()
        .unwrap_or_else(|| node.to_string())
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
