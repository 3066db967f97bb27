//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in `templates/*.tmp`, so
//! layout can be edited and diffed apart from the code. They are compiled in as plain
//! string constants.
//!
//! Templates are rendered by `outstanding` with minijinja's default whitespace rules,
//! so line breaks are explicit: block tags use `-` to swallow the newline they sit on,
//! and the final newline of a file is dropped. A loop body that should print a line
//! ends with that line's own newline.
//!
//! Width math (padding, wrapping) happens in Rust before rendering. Templates only
//! choose styles and arrange lines.

pub const MEDITATION_TEMPLATE: &str = include_str!("templates/meditation.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const TEMPLATE_DETAIL_TEMPLATE: &str = include_str!("templates/template.tmp");
pub const COVERAGE_TEMPLATE: &str = include_str!("templates/coverage.tmp");
pub const ISSUES_TEMPLATE: &str = include_str!("templates/issues.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
