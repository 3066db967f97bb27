//! # Script Assembly
//!
//! Turns one [`Template`] into the text of a session. The requested length only picks
//! a [`DurationBand`]; the band decides which sections are read and how often.
//!
//! | Band     | Minutes   | Body                                                        |
//! |----------|-----------|-------------------------------------------------------------|
//! | Short    | ≤ 3       | `breathing`, then the second body section                   |
//! | Medium   | ≤ 5       | every body section                                          |
//! | Long     | ≤ 10      | every body section, a pause after each but the second-to-last |
//! | Extended | > 10      | `breathing` + pause, then the other sections `repeats + 1` times |
//!
//! Every block is followed by a blank line. `intro` always opens the script and
//! `closing` always ends it. Sections a template does not have are skipped.

use crate::error::{MeditateError, Result};
use crate::model::{Section, Template, BREATHING, CLOSING, INTRO};
use serde::Serialize;
use std::fmt;

/// Inserted between sections to ask the narrator for a longer pause.
pub const PAUSE_MARKER: &str = "......";

/// Separates the blocks of an assembled script.
pub const BLOCK_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "band", rename_all = "lowercase")]
pub enum DurationBand {
    Short,
    Medium,
    Long,
    Extended { repeats: usize },
}

impl DurationBand {
    pub fn for_minutes(minutes: f64) -> Result<Self> {
        if !minutes.is_finite() {
            return Err(MeditateError::InvalidDuration(format!(
                "{} is not a number of minutes",
                minutes
            )));
        }

        let band = if minutes <= 3.0 {
            DurationBand::Short
        } else if minutes <= 5.0 {
            DurationBand::Medium
        } else if minutes <= 10.0 {
            DurationBand::Long
        } else {
            DurationBand::Extended {
                repeats: ((minutes - 5.0) / 5.0).floor() as usize,
            }
        };
        Ok(band)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationBand::Short => "short",
            DurationBand::Medium => "medium",
            DurationBand::Long => "long",
            DurationBand::Extended { .. } => "extended",
        }
    }
}

impl fmt::Display for DurationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationBand::Extended { repeats } => write!(f, "extended (x{})", repeats + 1),
            other => f.write_str(other.label()),
        }
    }
}

/// Builds the session text for `template` at the requested length.
pub fn assemble(template: &Template, minutes: f64) -> Result<String> {
    let band = DurationBand::for_minutes(minutes)?;
    assemble_band(template, band)
}

pub fn assemble_band(template: &Template, band: DurationBand) -> Result<String> {
    let intro = required(template, INTRO)?;
    let closing = required(template, CLOSING)?;
    let body = template.body();
    let breathing = template.section(BREATHING);

    let mut script = Script::default();
    script.push(intro);

    match band {
        DurationBand::Short => {
            if let Some(text) = breathing {
                script.push(text);
            }
            // The second body section, whatever its key. With `breathing` listed
            // second this reads breathing twice; `check` warns about such templates.
            if let Some(section) = body.get(1) {
                script.push(&section.text);
            }
        }
        DurationBand::Medium => {
            for section in &body {
                script.push(&section.text);
            }
        }
        DurationBand::Long => {
            for (i, section) in body.iter().enumerate() {
                script.push(&section.text);
                if i + 2 != body.len() {
                    script.push(PAUSE_MARKER);
                }
            }
        }
        DurationBand::Extended { repeats } => {
            if let Some(text) = breathing {
                script.push(text);
                script.push(PAUSE_MARKER);
            }
            let main: Vec<&Section> = body.into_iter().filter(|s| s.key != BREATHING).collect();
            for pass in 0..=repeats {
                for section in &main {
                    script.push(&section.text);
                }
                if pass < repeats {
                    script.push(PAUSE_MARKER);
                }
            }
        }
    }

    Ok(script.finish(closing))
}

fn required<'a>(template: &'a Template, key: &str) -> Result<&'a str> {
    template
        .section(key)
        .ok_or_else(|| MeditateError::MalformedTemplate {
            template: template.name.clone(),
            section: key.to_string(),
        })
}

#[derive(Default)]
struct Script {
    text: String,
}

impl Script {
    fn push(&mut self, block: &str) {
        self.text.push_str(block);
        self.text.push_str(BLOCK_SEPARATOR);
    }

    fn finish(mut self, closing: &str) -> String {
        self.text.push_str(closing);
        self.text.trim().to_string()
    }
}
