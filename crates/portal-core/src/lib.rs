//! Core types and traits for the Portal redirect service.
//!
//! This crate provides the shared vocabulary used by the storage backends,
//! the mapping loader and the redirector: the [`PathMapping`] record, the
//! [`Namespace`] it lives in, the repository traits, and the textual
//! [`Format`]s mappings are decoded from.

pub mod error;
pub mod mapping;
pub mod namespace;
pub mod repository;
pub mod source;

pub use error::{CoreError, FormatError, StorageError};
pub use mapping::PathMapping;
pub use namespace::Namespace;
pub use repository::{ReadRepository, Repository};
pub use source::Format;
