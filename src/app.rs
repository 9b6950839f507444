use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::cli::Command;
use crate::color::{ContrastResult, Rgb};
use crate::config::Config;
use crate::error::Result;
use crate::palette::Tables;
use crate::report::{build_report, write_json, write_text};

/// Resolved settings and tables for one run
#[derive(Debug, Clone)]
pub struct App {
    pub tables: Tables,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckOutput {
    foreground: String,
    background: String,
    #[serde(flatten)]
    contrast: ContrastResult,
}

#[derive(Debug, Serialize)]
struct ColorEntry {
    code: u8,
    rgb: Rgb,
    hex: String,
}

impl App {
    /// Apply config filters to the built-in tables
    pub fn new(config: Config) -> Result<Self> {
        let mut tables = Tables::builtin();
        tables.select_palettes(config.palettes())?;
        tables.select_backgrounds(config.backgrounds())?;
        debug!(
            palettes = tables.palettes.len(),
            backgrounds = tables.backgrounds.len(),
            "tables selected"
        );

        Ok(Self {
            tables,
            json: config.json(),
        })
    }

    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> Result<()> {
        match command {
            Command::Report => self.report(out),
            Command::Check {
                foreground,
                background,
            } => self.check(foreground, background, out),
            Command::List => self.list(out),
        }
    }

    fn report<W: Write>(&self, out: &mut W) -> Result<()> {
        let report = build_report(&self.tables);
        if self.json {
            write_json(out, &report)
        } else {
            write_text(out, &report)
        }
    }

    fn check<W: Write>(&self, foreground: &str, background: &str, out: &mut W) -> Result<()> {
        let fg: Rgb = foreground.parse()?;
        let bg: Rgb = background.parse()?;
        let contrast = fg.contrast_with(bg);

        if self.json {
            let output = CheckOutput {
                foreground: fg.to_hex(),
                background: bg.to_hex(),
                contrast,
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{} vs {}  {}", fg.to_hex(), bg.to_hex(), contrast)?;
        }
        Ok(())
    }

    fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.json {
            let entries: Vec<_> = self
                .tables
                .colors
                .iter()
                .map(|(code, rgb)| ColorEntry {
                    code: *code,
                    rgb: *rgb,
                    hex: rgb.to_hex(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        } else {
            for (code, rgb) in &self.tables.colors {
                writeln!(out, "{:>3}  {:<20} {}", code, rgb.to_string(), rgb.to_hex())?;
            }
        }
        Ok(())
    }
}
