//! # CLI Behavior
//!
//! The command-line client for the meditate library. For the overall architecture,
//! see the crate-level documentation of the `meditate` library.
//!
//! ## Defaults
//!
//! `meditate generate <category>` needs nothing else: the language and length come
//! from `config.json` (`meditate config language fr`, `meditate config minutes 10`)
//! and fall back to English and five minutes.
//!
//! Running `meditate` with no command prints the grouped help.
//!
//! ## Pinning a Template
//!
//! `--template <INDEX>` reads the template at that position (as shown by `list`)
//! instead of a random one, and `--seed <N>` makes the random choice repeatable.
//! Both exist so that a session can be reproduced.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Output formatting (wrapping, tables, messages)
//! - `setup`: Argument parsing via clap, grouped help
//! - `styles`: Named terminal styles
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
