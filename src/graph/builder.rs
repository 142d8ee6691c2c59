use crate::ingest::{extract_events, Row};

use super::{is_broken, min_year, Link, Network, Node, NodeKind, CENTER_ID, DEFAULT_RELATION};

/// Column holding the person name.
const NAME_COLUMN: usize = 1;
/// Column holding the relation label.
const RELATION_COLUMN: usize = 2;

/// Build the graph document from the loaded data rows.
///
/// The center node is created first and every row then yields one person
/// node plus one link from the center to that person. Row order is
/// preserved and node ids are derived from the row position, so the output
/// is deterministic for a given table.
pub fn build_network(rows: &[Row]) -> Network {
    let mut network = Network {
        nodes: vec![Node::center()],
        links: Vec::new(),
    };

    for (index, row) in rows.iter().enumerate() {
        let (node, link) = build_entry(index, row);
        network.nodes.push(node);
        network.links.push(link);
    }

    log::debug!(
        "Built network: {} nodes, {} links",
        network.nodes.len(),
        network.links.len()
    );
    network
}

/// Build the person node and its link for one row.
fn build_entry(index: usize, row: &Row) -> (Node, Link) {
    let name = row.field(NAME_COLUMN);
    let relation = row.field(RELATION_COLUMN);
    let relation = if relation.is_empty() {
        DEFAULT_RELATION
    } else {
        relation
    };

    let events = extract_events(row);
    let earliest = min_year(&events);
    let broken = is_broken(&events);

    let node = Node {
        id: format!("person_{}", index),
        name: if name.is_empty() {
            format!("未知{}", index)
        } else {
            name.to_string()
        },
        kind: NodeKind::Person,
        relation: relation.to_string(),
        events: events.clone(),
        min_year: earliest,
    };

    let link = Link {
        source: CENTER_ID.to_string(),
        target: node.id.clone(),
        relation: relation.to_string(),
        events,
        is_broken: broken,
        min_year: earliest,
    };

    (node, link)
}
