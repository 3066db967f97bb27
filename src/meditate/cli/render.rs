//! # Rendering
//!
//! Styled terminal output using the `outstanding` crate: the templates in
//! `templates.rs` are rendered against `MEDITATE_THEME`, with colors dropped
//! automatically when stdout is not a terminal.
//!
//! Layout calculations (wrapping, padding, truncation) stay in Rust because they need
//! Unicode-aware widths: a line of Japanese narration is twice as wide as its char
//! count. Templates only arrange lines and pick styles.

use super::styles::{names, MEDITATE_THEME};
use super::templates::{
    CONFIG_TEMPLATE, COVERAGE_TEMPLATE, ISSUES_TEMPLATE, LIST_TEMPLATE, MEDITATION_TEMPLATE,
    MESSAGES_TEMPLATE, TEMPLATE_DETAIL_TEMPLATE,
};
use console::Term;
use meditate::assembly::{BLOCK_SEPARATOR, PAUSE_MARKER};
use meditate::commands::{
    CmdMessage, CorpusIssue, LanguageCoverage, Meditation, MessageLevel, Severity,
    TemplateDetail, TemplateSummary,
};
use meditate::config::{MeditateConfig, KEYS};
use meditate::model::{Category, CLOSING, INTRO};
use outstanding::{render, render_with_color, truncate_to_width, ThemeChoice};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Narration never wraps wider than this, even on wide terminals.
pub const MAX_LINE_WIDTH: usize = 88;
const MIN_LINE_WIDTH: usize = 20;
const NAME_COLUMN_MAX: usize = 40;
const COVERAGE_CELL_WIDTH: usize = 7;

#[derive(Serialize)]
struct BlockData {
    text: String,
    pause: bool,
}

#[derive(Serialize)]
struct MeditationData {
    title: String,
    meta: String,
    blocks: Vec<BlockData>,
}

#[derive(Serialize)]
struct ListLineData {
    index: String,
    name: String,
    padding: String,
    sections: String,
}

#[derive(Serialize)]
struct ListGroupData {
    heading: String,
    templates: Vec<ListLineData>,
}

#[derive(Serialize)]
struct ListData {
    groups: Vec<ListGroupData>,
}

#[derive(Serialize)]
struct SectionData {
    key: String,
    text: String,
}

#[derive(Serialize)]
struct DetailData {
    title: String,
    meta: String,
    sections: Vec<SectionData>,
}

#[derive(Serialize)]
struct CellData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct CoverageRowData {
    label: String,
    cells: Vec<CellData>,
    total: usize,
}

#[derive(Serialize)]
struct CoverageData {
    header: String,
    rows: Vec<CoverageRowData>,
}

#[derive(Serialize)]
struct IssueData {
    severity: &'static str,
    style: &'static str,
    location: String,
    message: String,
}

#[derive(Serialize)]
struct IssuesData {
    issues: Vec<IssueData>,
}

#[derive(Serialize)]
struct ConfigEntryData {
    key: String,
    padding: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntryData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_themed<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, impl std::fmt::Display> {
    match use_color {
        Some(c) => render_with_color(template, data, ThemeChoice::from(&*MEDITATE_THEME), c),
        None => render(template, data, ThemeChoice::from(&*MEDITATE_THEME)),
    }
}

/// Terminal width, clamped to a comfortable reading measure.
pub fn line_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(MAX_LINE_WIDTH)
        .clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH)
}

/// Renders a generated session: a header, then the script block by block.
pub fn render_meditation(meditation: &Meditation) -> String {
    render_meditation_internal(meditation, None, line_width())
}

fn render_meditation_internal(
    meditation: &Meditation,
    use_color: Option<bool>,
    width: usize,
) -> String {
    let blocks = meditation
        .text
        .split(BLOCK_SEPARATOR)
        .map(|block| BlockData {
            text: wrap(block, width),
            pause: block == PAUSE_MARKER,
        })
        .collect();

    let data = MeditationData {
        title: meditation.template_name.clone(),
        meta: format!(
            "{}/{} · {} · {} min · {}",
            meditation.category,
            meditation.template_index,
            meditation.language,
            format_minutes(meditation.minutes),
            meditation.band
        ),
        blocks,
    };

    render_themed(MEDITATION_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", meditation.text))
}

/// Renders template summaries grouped by category.
pub fn render_template_list(templates: &[TemplateSummary]) -> String {
    render_template_list_internal(templates, None)
}

fn render_template_list_internal(templates: &[TemplateSummary], use_color: Option<bool>) -> String {
    let name_width = templates
        .iter()
        .map(|t| t.name.width())
        .max()
        .unwrap_or(0)
        .min(NAME_COLUMN_MAX);
    let index_width = templates
        .iter()
        .map(|t| t.index.to_string().len())
        .max()
        .unwrap_or(1);

    let mut groups: Vec<(Category, Vec<ListLineData>)> = Vec::new();
    for summary in templates {
        let name = truncate_to_width(&summary.name, name_width);
        let line = ListLineData {
            index: format!("{:>width$}", summary.index, width = index_width),
            padding: " ".repeat(name_width.saturating_sub(name.width())),
            name,
            sections: body_keys(&summary.section_keys).join(", "),
        };
        match groups.last_mut() {
            Some((category, lines)) if *category == summary.category => lines.push(line),
            _ => groups.push((summary.category, vec![line])),
        }
    }

    let data = ListData {
        groups: groups
            .into_iter()
            .map(|(category, templates)| ListGroupData {
                heading: format!("{} ({})", category, templates.len()),
                templates,
            })
            .collect(),
    };

    render_themed(LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders every section of one template, in authoring order.
pub fn render_template_detail(detail: &TemplateDetail) -> String {
    render_template_detail_internal(detail, None, line_width())
}

fn render_template_detail_internal(
    detail: &TemplateDetail,
    use_color: Option<bool>,
    width: usize,
) -> String {
    let summary = &detail.summary;
    let data = DetailData {
        title: summary.name.clone(),
        meta: format!(
            "{}/{} · {}",
            summary.category, summary.index, summary.language
        ),
        sections: detail
            .sections
            .iter()
            .map(|s| SectionData {
                key: s.key.clone(),
                text: wrap(&s.text, width),
            })
            .collect(),
    };

    render_themed(TEMPLATE_DETAIL_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the language × category matrix of template counts.
pub fn render_coverage(coverage: &[LanguageCoverage]) -> String {
    render_coverage_internal(coverage, None)
}

fn render_coverage_internal(coverage: &[LanguageCoverage], use_color: Option<bool>) -> String {
    let labels: Vec<String> = coverage
        .iter()
        .map(|c| format!("{}  {}", c.language, c.language.native_name()))
        .collect();
    let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0) + 2;

    let mut header = " ".repeat(label_width);
    for category in Category::ALL {
        let short: String = category.as_str().chars().take(COVERAGE_CELL_WIDTH - 2).collect();
        header.push_str(&format!("{:>width$}", short, width = COVERAGE_CELL_WIDTH));
    }
    header.push_str("  total");

    let rows = coverage
        .iter()
        .zip(labels)
        .map(|(language, label)| CoverageRowData {
            cells: Category::ALL
                .iter()
                .map(|category| match language.count_for(*category) {
                    0 => CellData {
                        text: format!("{:>width$}", "·", width = COVERAGE_CELL_WIDTH),
                        style: names::MISSING,
                    },
                    n => CellData {
                        text: format!("{:>width$}", n, width = COVERAGE_CELL_WIDTH),
                        style: names::COUNT,
                    },
                })
                .collect(),
            total: language.template_count(),
            label: format!(
                "{}{}",
                label,
                " ".repeat(label_width.saturating_sub(label.width()))
            ),
        })
        .collect();

    render_themed(COVERAGE_TEMPLATE, &CoverageData { header, rows }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders corpus issues, one per line.
pub fn render_issues(issues: &[CorpusIssue]) -> String {
    render_issues_internal(issues, None)
}

fn render_issues_internal(issues: &[CorpusIssue], use_color: Option<bool>) -> String {
    let data = IssuesData {
        issues: issues
            .iter()
            .map(|issue| {
                let (severity, style) = match issue.severity {
                    Severity::Error => ("error", names::ERROR),
                    Severity::Warning => ("warning", names::WARNING),
                };
                let location = match issue.index {
                    Some(i) => format!("{}.{}[{}]", issue.language, issue.category, i),
                    None => format!("{}.{}", issue.language, issue.category),
                };
                IssueData {
                    severity,
                    style,
                    location,
                    message: issue.message.clone(),
                }
            })
            .collect(),
    };

    render_themed(ISSUES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        issues.iter().map(|i| format!("{}\n", i)).collect()
    })
}

/// Renders every config key with its current value.
pub fn render_config(config: &MeditateConfig) -> String {
    render_config_internal(config, None)
}

fn render_config_internal(config: &MeditateConfig, use_color: Option<bool>) -> String {
    let key_width = KEYS.iter().map(|k| k.len()).max().unwrap_or(0);
    let entries = KEYS
        .iter()
        .filter_map(|key| {
            config.get(key).ok().map(|value| ConfigEntryData {
                key: key.to_string(),
                padding: " ".repeat(key_width - key.len()),
                value,
            })
        })
        .collect();

    render_themed(CONFIG_TEMPLATE, &ConfigData { entries }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render_themed(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout using the template system.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Prints command messages to stderr, keeping stdout for the script itself.
pub fn eprint_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        eprint!("{}", output);
    }
}

fn body_keys(keys: &[String]) -> Vec<&str> {
    keys.iter()
        .map(String::as_str)
        .filter(|k| *k != INTRO && *k != CLOSING)
        .collect()
}

fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{:.0}", minutes)
    } else {
        format!("{}", minutes)
    }
}

/// Greedy word wrap by display width. Words wider than a line (unspaced CJK text)
/// are broken between characters.
fn wrap(text: &str, width: usize) -> String {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            for piece in split_to_width(word, width) {
                let piece_width = piece.width();
                if line_width > 0 && line_width + 1 + piece_width > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                if line_width > 0 {
                    line.push(' ');
                    line_width += 1;
                }
                line.push_str(&piece);
                line_width += piece_width;
            }
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn split_to_width(word: &str, width: usize) -> Vec<String> {
    if word.width() <= width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for c in word.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += char_width;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
