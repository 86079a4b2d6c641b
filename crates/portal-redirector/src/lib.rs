//! Redirect resolution over a chain of fallbacks.
//!
//! A [`FallbackChain`] is tried link by link: mapping-backed links look the
//! request path up in a mapping store, and the first hit becomes a redirect.
//! A terminal link always answers, typically with a default page.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use portal_core::{Namespace, PathMapping};
//! use portal_redirector::{FallbackChain, Resolution};
//! use portal_storage::{InMemoryRepository, Repository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let namespace = Namespace::default();
//! let store = InMemoryRepository::new();
//! store.ensure_namespace(&namespace).await?;
//! store
//!     .bulk_put(&namespace, &[PathMapping::new("/golang", "https://go.dev")])
//!     .await?;
//!
//! // Built tail first: the terminal link exists before anything points at it.
//! let chain = FallbackChain::terminal(|_path: &str| "home page".to_string())
//!     .with_mapping(Arc::new(store), namespace);
//!
//! match chain.resolve("/golang").await? {
//!     Resolution::Redirect(url) => println!("Redirect to: {url}"),
//!     Resolution::Handled(page) => println!("{page}"),
//!     Resolution::Unhandled => unreachable!("chain ends in a terminal link"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod error;

pub use chain::{FallbackChain, LinkKind, Resolution, Responder};
pub use error::{RedirectorError, Result};
