use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::graph::Network;

/// Serialize `network` and write it to `path` as one JSON document.
///
/// Output uses 2-space indentation and keeps non-ASCII text literal, so the
/// document stays readable next to the source table. Returns the absolute
/// path of the written file.
pub fn write_network(network: &Network, path: &Path) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(network)?;
    std::fs::write(path, json)?;

    let absolute = path.canonicalize()?;
    log::info!(
        "Wrote {} nodes and {} links to {}",
        network.nodes.len(),
        network.links.len(),
        absolute.display()
    );
    Ok(absolute)
}

/// Read a previously written graph document back into memory.
pub fn read_network(path: &Path) -> Result<Network> {
    let json = std::fs::read_to_string(path)?;
    let network = serde_json::from_str(&json)?;
    Ok(network)
}
