//! Styles for the meditate CLI.
//!
//! Templates refer to styles by semantic name only (`title`, `pause`, `count`...). The
//! names resolve to `console::Style` values in an `outstanding` theme, so the look can
//! change without touching templates or renderers.
//!
//! A name a template uses but the theme lacks is rendered by `outstanding` with a `(!?)`
//! prefix, which makes typos visible in tests.
use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    pub const PAUSE: &str = "pause";
    pub const SECTION_KEY: &str = "section-key";
    pub const LIST_INDEX: &str = "list-index";
    pub const CATEGORY: &str = "category";
    pub const COUNT: &str = "count";
    pub const MISSING: &str = "missing";
}

pub static MEDITATE_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let regular = Style::new();
    let muted = Style::new().color256(rgb_to_ansi256((138, 138, 138)));
    let faint = Style::new().color256(rgb_to_ansi256((88, 88, 88)));
    let accent = Style::new().color256(rgb_to_ansi256((135, 175, 175)));

    Theme::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint.clone())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
        .add(names::TITLE, regular.bold())
        .add(names::PAUSE, faint.clone())
        .add(names::SECTION_KEY, accent.clone().italic())
        .add(names::LIST_INDEX, accent.clone())
        .add(names::CATEGORY, accent.bold())
        .add(names::COUNT, Style::new().green())
        .add(names::MISSING, faint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use outstanding::{render_with_color, ThemeChoice};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Styled {
        text: &'static str,
        style: &'static str,
    }

    fn plain(style: &'static str) -> String {
        render_with_color(
            r#"{{ text | style(style) }}"#,
            &Styled { text: "Calm", style },
            ThemeChoice::from(&*MEDITATE_THEME),
            false,
        )
        .unwrap()
    }

    #[test]
    fn every_name_is_registered() {
        for name in [
            names::REGULAR,
            names::MUTED,
            names::FAINT,
            names::ERROR,
            names::WARNING,
            names::SUCCESS,
            names::INFO,
            names::TITLE,
            names::PAUSE,
            names::SECTION_KEY,
            names::LIST_INDEX,
            names::CATEGORY,
            names::COUNT,
            names::MISSING,
        ] {
            assert_eq!(plain(name), "Calm", "missing style {}", name);
        }
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(plain("titel"), "(!?) Calm");
    }
}
