//! Layered loading of path mappings into a mapping store.
//!
//! Sources are applied strictly in order, each in its own atomic batch, so a
//! later source overrides an earlier one wherever both define the same path.
//! The usual layering is literal defaults, then inline text, then files.
//!
//! ```rust,no_run
//! use portal_core::{Format, Namespace};
//! use portal_loader::{load_all, Source};
//! use portal_storage::{RedbRepository, Repository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = RedbRepository::open("urlshort.db")?;
//! let namespace = Namespace::default();
//! store.ensure_namespace(&namespace).await?;
//!
//! let sources = vec![
//!     Source::mappings("defaults", [("/golang", "https://go.dev")]),
//!     Source::inline("inline", Format::Yaml, "- path: /yaml\n  url: https://yaml.org\n"),
//!     Source::file("urls.json")?,
//! ];
//! let report = load_all(&store, &namespace, sources).await?;
//! println!("loaded {} mappings", report.inserted());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod source;

pub use error::{LoadError, Result};
pub use loader::{load_all, LoadReport, SourceReport};
pub use source::Source;
