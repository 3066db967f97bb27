//! # Meditate Architecture
//!
//! Meditate is a **library of guided meditation scripts**: a fixed corpus of narration
//! templates in thirteen languages, and the logic that turns one of them into a session
//! of a requested length. The command-line client is one consumer of that library; a
//! TTS player or a web service would be others.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - generate, list, show, coverage, check, config            │
//! │  - Language fallback, category resolution, selection        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Assembly (assembly.rs) + Picker (picker.rs)                │
//! │  - Duration bands and section concatenation                 │
//! │  - Template choice behind an injectable trait               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TemplateStore trait                                      │
//! │  - EmbeddedStore (shipped corpus), InMemoryStore (testing)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Generating a Session
//!
//! ```rust
//! use meditate::api::MeditateApi;
//! use meditate::picker::FixedPicker;
//! use meditate::store::embedded::EmbeddedStore;
//!
//! let store = EmbeddedStore::load().unwrap();
//! let mut api = MeditateApi::new(store, FixedPicker(0), std::env::temp_dir());
//! let result = api.generate("sleep", 2.0, Some("en")).unwrap();
//! let meditation = result.meditation.unwrap();
//! assert!(!meditation.text.is_empty());
//! ```
//!
//! ## The Corpus
//!
//! Templates are plain data: a name and an ordered list of named sections. Section
//! names vary by category, so nothing but `intro` and `closing` is assumed. Runs of
//! periods in the text (`......`) are pause cues for whoever reads the script aloud.
//! The corpus is compiled in and validated once at load; it never changes at runtime.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`assembly`]: Duration bands and script assembly
//! - [`picker`]: Template selection (random or pinned)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Language`, `Category`, `Template`)
//! - [`config`]: User defaults
//! - [`init`]: Wiring for clients (config dir, store, API)
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod assembly;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod picker;
pub mod store;
