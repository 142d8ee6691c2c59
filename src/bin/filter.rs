use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use luwang::graph::{filter_network, relation_labels, NetworkFilter};
use luwang::output::{read_network, write_network};

#[derive(Parser, Debug)]
#[command(name = "filter")]
#[command(about = "Reduce a built graph document to a year/relation view")]
struct Args {
    /// Graph document to read
    #[arg(short, long, default_value = luwang::OUTPUT_JSON)]
    input: PathBuf,

    /// Keep nodes and links active at or before this year
    #[arg(short, long)]
    year: Option<i32>,

    /// Keep only these relation labels (repeatable)
    #[arg(short, long)]
    relation: Vec<String>,

    /// Where to write the reduced document (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the distinct relation labels and exit
    #[arg(long)]
    list_relations: bool,
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let args = Args::parse();

    let network = read_network(&args.input)
        .with_context(|| format!("Failed to read graph document: {}", args.input.display()))?;
    log::info!(
        "Loaded {} nodes and {} links from {}",
        network.nodes.len(),
        network.links.len(),
        args.input.display()
    );

    if args.list_relations {
        for label in relation_labels(&network) {
            println!("{}", label);
        }
        return Ok(());
    }

    let filter = NetworkFilter {
        year: args.year,
        relations: if args.relation.is_empty() {
            None
        } else {
            Some(args.relation.iter().cloned().collect::<HashSet<_>>())
        },
    };

    let reduced = filter_network(&network, &filter);
    log::info!(
        "Filter kept {}/{} nodes and {}/{} links",
        reduced.nodes.len(),
        network.nodes.len(),
        reduced.links.len(),
        network.links.len()
    );

    match args.output {
        Some(path) => {
            let absolute = write_network(&reduced, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "Wrote {} nodes={} links={}",
                absolute.display(),
                reduced.nodes.len(),
                reduced.links.len()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&reduced)?),
    }

    Ok(())
}
