use std::io::Write;

use unicode_width::UnicodeWidthStr;

use super::driver::{Report, RoleOutcome};
use crate::color::{verdict_mark, ContrastResult};
use crate::error::Result;

const RULE_WIDTH: usize = 80;

/// Display columns reserved for the background label
const LABEL_WIDTH: usize = 30;

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Pad `s` with trailing spaces to `width` display columns
fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

/// One `vs` line of the text report
pub fn format_result_line(background: &str, contrast: &ContrastResult) -> String {
    format!("  vs {} {}", pad_right(background, LABEL_WIDTH), contrast)
}

/// Render the report as plain text
pub fn write_text<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "WCAG 2.0 CONTRAST RATIO ANALYSIS FOR OISEAU COLOR PALETTES")?;
    writeln!(out, "{}", rule('='))?;
    writeln!(out)?;
    writeln!(out, "Standards:")?;
    writeln!(out, "  - WCAG AA (normal text): 4.5:1 minimum")?;
    writeln!(out, "  - WCAG AAA (normal text): 7:1 minimum")?;
    writeln!(out, "  - Apple HIG: 4.5:1 minimum, 7:1 preferred")?;
    writeln!(out)?;

    for palette in &report.palettes {
        writeln!(out)?;
        writeln!(out, "{}", rule('='))?;
        writeln!(out, "{} PALETTE", palette.name)?;
        writeln!(out, "{}", rule('='))?;

        for role in &palette.roles {
            writeln!(out)?;
            match &role.outcome {
                RoleOutcome::Mapped { rgb, results, .. } => {
                    writeln!(out, "{} (ID #{}): {}", role.role, role.code, rgb)?;
                    writeln!(out, "{}", rule('-'))?;
                    for result in results {
                        writeln!(
                            out,
                            "{}",
                            format_result_line(result.background, &result.contrast)
                        )?;
                    }
                }
                RoleOutcome::Unmapped => {
                    writeln!(out, "{} (ID #{}): RGB not mapped", role.role, role.code)?;
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "{} = Passes standard", verdict_mark(true))?;
    writeln!(out, "{} = Fails standard", verdict_mark(false))?;
    writeln!(out)?;
    writeln!(out, "Recommendations:")?;
    writeln!(out, "1. DEFAULT palette works best on dark backgrounds")?;
    writeln!(
        out,
        "2. COLORBLIND palette needs verification on light backgrounds"
    )?;
    writeln!(
        out,
        "3. HIGHCONTRAST palette should pass on both (uses brightest colors)"
    )?;
    writeln!(out)?;

    Ok(())
}

/// Render the report as pretty-printed JSON
pub fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
