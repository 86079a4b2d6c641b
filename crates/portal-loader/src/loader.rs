use crate::error::{LoadError, Result};
use crate::source::Source;
use portal_core::{Namespace, PathMapping, Repository};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Outcome of loading one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub name: String,
    /// Records the source decoded to, before validation.
    pub decoded: usize,
    /// Distinct paths written to the store.
    pub inserted: usize,
    /// Records dropped for an empty path or destination.
    pub skipped: usize,
}

/// Outcome of [`load_all`], one entry per source in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub sources: Vec<SourceReport>,
}

impl LoadReport {
    /// Total distinct paths written across all sources.
    pub fn inserted(&self) -> usize {
        self.sources.iter().map(|s| s.inserted).sum()
    }

    pub fn skipped(&self) -> usize {
        self.sources.iter().map(|s| s.skipped).sum()
    }
}

/// Loads every source into `namespace`, in order, one atomic batch each.
///
/// A later source overwrites an earlier one for colliding paths. The first
/// source that fails to read, decode or persist stops the load; batches
/// already committed stay committed, the failing one leaves no trace.
pub async fn load_all<R, I>(repository: &R, namespace: &Namespace, sources: I) -> Result<LoadReport>
where
    R: Repository + ?Sized,
    I: IntoIterator<Item = Source>,
{
    let mut report = LoadReport::default();

    for source in sources {
        let name = source.name();
        let entries = read_source(source, &name).await?;
        let decoded = entries.len();
        let (batch, skipped) = prepare(&name, entries);

        repository
            .bulk_put(namespace, &batch)
            .await
            .map_err(|error| LoadError::Storage {
                source_name: name.clone(),
                error,
            })?;

        info!(
            source = %name,
            namespace = %namespace,
            inserted = batch.len(),
            skipped,
            "loaded source"
        );
        report.sources.push(SourceReport {
            name,
            decoded,
            inserted: batch.len(),
            skipped,
        });
    }

    Ok(report)
}

async fn read_source(source: Source, name: &str) -> Result<Vec<PathMapping>> {
    if !matches!(source, Source::File { .. }) {
        return source.read();
    }

    let path = PathBuf::from(name);
    tokio::task::spawn_blocking(move || source.read())
        .await
        .map_err(|e| LoadError::Io {
            path,
            error: std::io::Error::other(e),
        })?
}

/// Drops unusable records and collapses duplicate paths.
///
/// A duplicated path keeps the position of its first occurrence and the
/// destination of its last.
fn prepare(name: &str, entries: Vec<PathMapping>) -> (Vec<PathMapping>, usize) {
    let mut skipped = 0;
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(entries.len());
    let mut batch: Vec<PathMapping> = Vec::with_capacity(entries.len());

    for entry in entries {
        if !entry.is_usable() {
            warn!(
                source = %name,
                path = %entry.path,
                url = %entry.destination,
                "skipping mapping with empty path or url"
            );
            skipped += 1;
            continue;
        }

        match positions.get(&entry.path) {
            Some(&position) => {
                debug!(source = %name, path = %entry.path, "duplicate path, keeping later entry");
                batch[position] = entry;
            }
            None => {
                positions.insert(entry.path.clone(), batch.len());
                batch.push(entry);
            }
        }
    }

    (batch, skipped)
}
