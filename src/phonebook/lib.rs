//! # Phonebook Architecture
//!
//! Phonebook is a **UI-agnostic contact-directory library**. The binary that ships
//! with it is a thin console client; nothing below the CLI layer knows about a
//! terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, prompt.rs)                    │
//! │  - Parses arguments, runs the menu loop, prompts on stdin   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The Directory facade: owns the in-memory sequence        │
//! │  - Persists after every mutation                            │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over the contact sequence                     │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ContactStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core could serve a TUI, a REST API, or any other front end.
//!
//! ## Persistence Model
//!
//! The directory is a single ordered sequence of contacts, loaded from one JSON
//! file at startup and rewritten in full after each add or edit. Identity is
//! positional: a contact is addressed by its 1-based place in the sequence.
//! There is no write-ahead log and no concurrent-writer story; last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The `Directory` facade—entry point for all operations
//! - [`commands`]: Logic for add, edit, list, and search
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Contact`, `ContactFields`, `Phone`)
//! - [`index`]: 1-based display indexing for listings
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
