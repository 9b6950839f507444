use clap::{Parser, Subcommand};

use crate::config::{Config, ReportConfig};

#[derive(Debug, Parser)]
#[command(
    name = "palette-contrast",
    version,
    about = "WCAG 2.0 contrast ratios for terminal color palettes",
    long_about = "Computes WCAG 2.0 contrast ratios between the built-in terminal color palettes and common terminal backgrounds, and reports AA/AAA verdicts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Only report this palette (repeatable, case-insensitive)
    #[arg(long = "palette", short = 'p', value_name = "NAME", global = true)]
    pub palette_filter: Vec<String>,

    /// Only report against this background label (repeatable, case-insensitive)
    // clap derives arg ids from field names; must not collide with the `check` positionals
    #[arg(long = "background", short = 'b', value_name = "LABEL", global = true)]
    pub background_filter: Vec<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Ignore config files and report on the built-in tables as-is
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Verbose output on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the full palette report (default)
    Report,
    /// Check the contrast of two hex colors (e.g. "#FF0000" 000000)
    Check {
        foreground: String,
        background: String,
    },
    /// Print the ANSI color table
    List,
}

impl Cli {
    /// Flags expressed as a config layer; unset flags leave the file values alone
    pub fn as_config(&self) -> Config {
        let non_empty = |v: &Vec<String>| (!v.is_empty()).then(|| v.clone());

        Config {
            report: ReportConfig {
                palettes: non_empty(&self.palette_filter),
                backgrounds: non_empty(&self.background_filter),
                json: self.json.then_some(true),
            },
            sources: Vec::new(),
        }
    }

    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Report)
    }
}
