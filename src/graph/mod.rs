//! Graph document model: nodes, links, and the builder that turns table
//! rows into them.
//!
//! The document mirrors the JSON consumed downstream: one fixed center
//! node, one person node per data row, and one link per person node
//! directed from the center.

mod builder;
mod classify;
mod filter;
mod year;

pub use builder::build_network;
pub use classify::is_broken;
pub use filter::{filter_network, relation_labels, NetworkFilter};
pub use year::min_year;

use serde::{Deserialize, Serialize};

/// Node id of the central subject.
pub const CENTER_ID: &str = "lu_xun";
/// Display name of the central subject.
pub const CENTER_NAME: &str = "鲁迅";
/// Relation label carried by the center node.
pub const CENTER_RELATION: &str = "中心";
/// Year attached to the center node.
pub const CENTER_YEAR: i32 = 1912;
/// Year used when no event time yields a parseable year.
pub const FALLBACK_YEAR: i32 = 1926;
/// Relation label substituted for blank relation fields.
pub const DEFAULT_RELATION: &str = "其他";

/// A single time-stamped occurrence attached to a node and its link.
/// Either field may be empty, but never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub time: String,
    pub description: String,
}

/// Node role in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Center,
    Person,
}

/// A graph vertex: the central subject or one related person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub relation: String,
    pub events: Vec<Event>,
    #[serde(rename = "minYear")]
    pub min_year: i32,
}

/// A graph edge from the center to one person node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub relation: String,
    pub events: Vec<Event>,
    #[serde(rename = "isBroken")]
    pub is_broken: bool,
    #[serde(rename = "minYear")]
    pub min_year: i32,
}

/// The full graph document: every node plus one link per person node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl Node {
    /// The fixed center node, always first in the node list.
    pub fn center() -> Self {
        Self {
            id: CENTER_ID.to_string(),
            name: CENTER_NAME.to_string(),
            kind: NodeKind::Center,
            relation: CENTER_RELATION.to_string(),
            events: Vec::new(),
            min_year: CENTER_YEAR,
        }
    }
}
