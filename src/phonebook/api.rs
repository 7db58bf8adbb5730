//! # The Directory Facade
//!
//! [`Directory`] is the single entry point for all phonebook operations,
//! regardless of the UI driving it. It owns the in-memory contact sequence and
//! the store it came from, and it keeps the two synchronized: every mutating
//! operation rewrites the store before returning.
//!
//! ## What the facade does NOT do
//!
//! - **I/O to the terminal**: it returns data structures, never prints
//! - **Prompting or retry loops**: inputs arrive already validated
//!   ([`ContactFields`] cannot hold a malformed phone)
//!
//! ## Generic over ContactStore
//!
//! `Directory<S: ContactStore>` works with any backend:
//! - Production: `Directory<FileStore>`
//! - Testing: `Directory<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Contact, ContactFields};
use crate::store::ContactStore;

/// The ordered directory of contacts plus its persistence handle.
///
/// Loaded once at [`open`](Directory::open); after that the in-memory sequence
/// is authoritative and the backing store is rewritten after every mutation.
pub struct Directory<S: ContactStore> {
    store: S,
    contacts: Vec<Contact>,
}

impl<S: ContactStore> Directory<S> {
    /// Load the directory from the store. An absent backing file yields an
    /// empty directory; malformed content propagates as a fatal error.
    pub fn open(store: S) -> Result<Self> {
        let contacts = store.load()?;
        Ok(Self { store, contacts })
    }

    /// Append a new contact and persist.
    pub fn add(&mut self, fields: ContactFields) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.contacts, fields)?;
        self.store.save(&self.contacts)?;
        Ok(result)
    }

    /// Replace the fields of the contact at the 1-based `index` and persist.
    /// Out-of-range indexes error without touching the sequence or the store.
    pub fn edit(&mut self, index: usize, fields: ContactFields) -> Result<commands::CmdResult> {
        let result = commands::edit::run(&mut self.contacts, index, fields)?;
        self.store.save(&self.contacts)?;
        Ok(result)
    }

    /// One page of the directory, 1-based. Out-of-range pages are empty.
    pub fn list(&self, page: usize, per_page: usize) -> Result<commands::CmdResult> {
        commands::list::run(&self.contacts, page, per_page)
    }

    /// Case-insensitive substring search across every contact field.
    pub fn search(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.contacts, term)
    }

    /// The contact at the 1-based `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Contact> {
        index.checked_sub(1).and_then(|i| self.contacts.get(i))
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
