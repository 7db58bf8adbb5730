//! # Storage Layer
//!
//! This module defines the storage abstraction for the phonebook. The
//! [`ContactStore`] trait allows the directory to work with different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole directory lives in a single JSON array, one object per
//!     contact, pretty-printed for human readers
//!   - The file handle is scoped per call: opened, read or rewritten, closed
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! phonebook.json      # JSON array of contact objects
//! config.json         # Page size and data-file override (see config.rs)
//! ```
//!
//! Every save rewrites the whole array. There is no incremental update and no
//! partial-write protection; the directory assumes a single local writer.

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;

/// Abstract interface for directory persistence.
///
/// Implementations hand back the full contact sequence on `load` and replace
/// it wholesale on `save`.
pub trait ContactStore {
    /// Load the full contact sequence. An absent backing file is an empty
    /// directory, not an error.
    fn load(&self) -> Result<Vec<Contact>>;

    /// Persist the full contact sequence, replacing whatever was stored.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;
}
