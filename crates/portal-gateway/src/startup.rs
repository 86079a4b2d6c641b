use std::sync::Arc;

use anyhow::Context;
use portal_core::{Format, Namespace};
use portal_loader::{load_all, Source};
use portal_redirector::FallbackChain;
use portal_storage::{InMemoryRepository, RedbRepository, Repository};
use tracing::info;

use crate::cli::{Cli, StorageBackendArg};
use crate::handlers::home_page;
use crate::seed;
use crate::state::AppState;

/// Sources in load order. Later sources override earlier ones.
///
/// The order is demo map, demo YAML, YAML file, demo JSON, JSON file, with
/// the demo layers present only when `--seed-demo` is set.
pub fn sources(cli: &Cli) -> Vec<Source> {
    let mut sources = Vec::new();

    if cli.seed_demo {
        sources.push(seed::demo_mappings());
        sources.push(seed::demo_yaml());
    }
    if let Some(path) = &cli.yaml {
        sources.push(Source::file_with_format(path, Format::Yaml));
    }
    if cli.seed_demo {
        sources.push(seed::demo_json());
    }
    if let Some(path) = &cli.json {
        sources.push(Source::file_with_format(path, Format::Json));
    }

    sources
}

/// Opens the configured store, loads every source and builds the chain.
///
/// Any failure here is fatal: the service cannot answer without its store.
pub async fn build_state(cli: &Cli) -> anyhow::Result<AppState> {
    match cli.storage {
        StorageBackendArg::Redb => {
            let store = RedbRepository::open(&cli.db_path)
                .with_context(|| format!("failed to open store at {}", cli.db_path.display()))?;
            let namespaces = store.namespaces()?;
            info!(location = %cli.db_path.display(), ?namespaces, "store opened");
            bootstrap(store, cli).await
        }
        StorageBackendArg::InMemory => bootstrap(InMemoryRepository::new(), cli).await,
    }
}

async fn bootstrap<R: Repository>(store: R, cli: &Cli) -> anyhow::Result<AppState> {
    let namespace: Namespace = cli.namespace.clone();

    store
        .ensure_namespace(&namespace)
        .await
        .with_context(|| format!("failed to create namespace {namespace}"))?;
    info!(namespace = %namespace, "namespace ready");

    let report = load_all(&store, &namespace, sources(cli))
        .await
        .context("failed to load mappings")?;
    info!(
        sources = report.sources.len(),
        inserted = report.inserted(),
        skipped = report.skipped(),
        "mappings loaded"
    );

    let chain = FallbackChain::terminal(home_page).with_mapping(Arc::new(store), namespace);
    info!(links = ?chain.links(), "fallback chain built");

    Ok(AppState::new(chain))
}
