use std::path::Path;

use anyhow::{Context, Result};
use luwang::graph::build_network;
use luwang::ingest::load_rows;
use luwang::output::write_network;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    log::info!("Starting network build");

    let source = Path::new(luwang::SOURCE_CSV);
    let rows = load_rows(source)
        .with_context(|| format!("Failed to read source table: {}", source.display()))?;

    if rows.is_empty() {
        log::warn!("No data rows found in {}", source.display());
    }

    let network = build_network(&rows);

    let out_path = Path::new(luwang::OUTPUT_JSON);
    let absolute = write_network(&network, out_path)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    println!(
        "Wrote {} nodes={} links={}",
        absolute.display(),
        network.nodes.len(),
        network.links.len()
    );

    Ok(())
}
