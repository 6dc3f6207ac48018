//! Prints catalog entries matching a name query.
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use item_content::{CatalogConfig, ContentFactory, ContentItem, FailurePolicy, ItemCatalog};
use item_core::SearchableItem;

#[derive(Debug, Parser)]
#[command(name = "item-lookup", about = "Look up items in a data-driven item catalog")]
struct Args {
    /// Name or part of a name; all entries are listed when omitted.
    query: Vec<String>,

    /// Only list entries whose name matches the query in full.
    #[arg(long)]
    exact: bool,

    /// Directory containing items.ron (overrides ITEM_DATA_DIR).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Failure policy for records that cannot be built (overrides ITEM_FAILURE_POLICY).
    #[arg(long)]
    policy: Option<FailurePolicy>,

    /// Maximum number of entries to print (overrides ITEM_SEARCH_LIMIT).
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = CatalogConfig::resolve(args.data_dir).context("failed to resolve config")?;
    if let Some(policy) = args.policy {
        config.failure_policy = policy;
    }
    if let Some(limit) = args.limit {
        config.search_limit = limit.max(1);
    }

    let catalog = ContentFactory::new(&config.data_dir)
        .load_catalog(config.failure_policy)
        .with_context(|| format!("failed to load catalog from {}", config.data_dir.display()))?;

    let query = args.query.join(" ");
    let matches = find(&catalog, &query, args.exact);
    if matches.is_empty() {
        tracing::info!(%query, "no matching items");
        return Ok(());
    }

    for entry in matches.iter().take(config.search_limit) {
        println!("{}", describe(entry));
    }
    if matches.len() > config.search_limit {
        println!("... {} more", matches.len() - config.search_limit);
    }
    Ok(())
}

fn find<'a>(
    catalog: &'a ItemCatalog<ContentItem>,
    query: &'a str,
    exact: bool,
) -> Vec<&'a SearchableItem<ContentItem>> {
    if exact {
        catalog
            .iter()
            .filter(|entry| entry.name_equivalent_to(query))
            .collect()
    } else {
        catalog.search(query).collect()
    }
}

fn describe(entry: &SearchableItem<ContentItem>) -> String {
    if entry.name() == entry.display_name() {
        format!("{:<12} {}", entry.qualified_id(), entry.name())
    } else {
        format!(
            "{:<12} {} ({})",
            entry.qualified_id(),
            entry.display_name(),
            entry.name()
        )
    }
}
