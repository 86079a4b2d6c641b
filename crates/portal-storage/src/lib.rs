//! Mapping store backends.
//!
//! [`RedbRepository`] keeps mappings in a single durable file and is what the
//! service runs on. [`InMemoryRepository`] honours the same contract without
//! touching disk.

pub mod embedded;
pub mod error;
pub mod memory;

pub use embedded::{RedbRepository, Snapshot};
pub use error::{Result, StorageError};
pub use memory::InMemoryRepository;
pub use portal_core::{ReadRepository, Repository};
