//! Year/relation views over a built network, for downstream timeline and
//! relation-type controls.

use std::collections::HashSet;

use super::{Network, Node, NodeKind};

/// View criteria for a built network: an upper year bound and an optional
/// relation whitelist. The center node survives every filter.
#[derive(Debug, Clone, Default)]
pub struct NetworkFilter {
    /// Keep person nodes and links whose minYear is at or below this year.
    pub year: Option<i32>,
    /// Keep only person nodes whose relation label is in this set.
    pub relations: Option<HashSet<String>>,
}

impl NetworkFilter {
    fn keeps_node(&self, node: &Node) -> bool {
        if node.kind == NodeKind::Center {
            return true;
        }
        if let Some(year) = self.year {
            if node.min_year > year {
                return false;
            }
        }
        if let Some(relations) = &self.relations {
            if !relations.contains(&node.relation) {
                return false;
            }
        }
        true
    }
}

/// Apply `filter` to `network`, producing a reduced copy.
///
/// A link survives only when both of its endpoints survive and the link
/// itself passes the year bound. An empty filter returns the network
/// unchanged.
pub fn filter_network(network: &Network, filter: &NetworkFilter) -> Network {
    let nodes: Vec<Node> = network
        .nodes
        .iter()
        .filter(|node| filter.keeps_node(node))
        .cloned()
        .collect();

    let kept_ids: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();

    let links = network
        .links
        .iter()
        .filter(|link| {
            kept_ids.contains(link.source.as_str())
                && kept_ids.contains(link.target.as_str())
                && filter.year.map_or(true, |year| link.min_year <= year)
        })
        .cloned()
        .collect();

    Network { nodes, links }
}

/// Distinct relation labels among person nodes, in first-seen order.
pub fn relation_labels(network: &Network) -> Vec<String> {
    let mut seen = HashSet::new();
    network
        .nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Person)
        .filter(|node| seen.insert(node.relation.clone()))
        .map(|node| node.relation.clone())
        .collect()
}
