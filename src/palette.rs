//! Static color tables
//!
//! The color table approximates the xterm 256-color palette for the codes the
//! palettes use. Background values are reference approximations, not exact
//! theme definitions.

use crate::color::Rgb;
use crate::error::{Error, Result};

/// ANSI 256 color code to RGB
pub const ANSI_256_COLORS: &[(u8, Rgb)] = &[
    (33, Rgb::new(0, 135, 215)),    // Blue (colorblind success)
    (40, Rgb::new(0, 215, 0)),      // Green (old default)
    (45, Rgb::new(0, 215, 255)),    // Cyan (colorblind info)
    (46, Rgb::new(0, 255, 0)),      // Bright green (highcontrast success)
    (51, Rgb::new(0, 255, 255)),    // Bright cyan (highcontrast info)
    (75, Rgb::new(95, 175, 255)),   // Blue (default info)
    (76, Rgb::new(95, 215, 135)),   // Green (default success)
    (117, Rgb::new(135, 215, 255)), // Light blue (header)
    (196, Rgb::new(255, 0, 0)),     // Red (error)
    (208, Rgb::new(255, 135, 0)),   // Orange (colorblind error)
    (214, Rgb::new(255, 175, 0)),   // Orange (default warning)
    (220, Rgb::new(255, 215, 0)),   // Gold (colorblind warning)
    (226, Rgb::new(255, 255, 0)),   // Yellow (highcontrast warning)
    (240, Rgb::new(88, 88, 88)),    // Dark gray
    (244, Rgb::new(128, 128, 128)), // Medium gray
];

/// Reference terminal backgrounds
pub const BACKGROUNDS: &[(&str, Rgb)] = &[
    ("Black (dark terminal)", Rgb::BLACK),
    ("White (light terminal)", Rgb::WHITE),
    ("Dark gray (Solarized Dark)", Rgb::new(0, 43, 54)),
    ("Light gray (Solarized Light)", Rgb::new(253, 246, 227)),
];

/// A named palette of role -> ANSI color code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub roles: &'static [(&'static str, u8)],
}

pub const PALETTES: &[Palette] = &[
    Palette {
        name: "DEFAULT",
        roles: &[("Success", 76), ("Error", 196), ("Warning", 214), ("Info", 75)],
    },
    Palette {
        name: "COLORBLIND",
        roles: &[("Success", 33), ("Error", 208), ("Warning", 220), ("Info", 45)],
    },
    Palette {
        name: "HIGHCONTRAST",
        roles: &[("Success", 46), ("Error", 196), ("Warning", 226), ("Info", 51)],
    },
];

/// The three tables a report is computed from
#[derive(Debug, Clone)]
pub struct Tables {
    pub colors: Vec<(u8, Rgb)>,
    pub backgrounds: Vec<(&'static str, Rgb)>,
    pub palettes: Vec<Palette>,
}

impl Tables {
    /// Tables compiled into the binary
    pub fn builtin() -> Self {
        Self {
            colors: ANSI_256_COLORS.to_vec(),
            backgrounds: BACKGROUNDS.to_vec(),
            palettes: PALETTES.to_vec(),
        }
    }

    /// Look up the RGB value for an ANSI code
    pub fn lookup(&self, code: u8) -> Option<Rgb> {
        self.colors
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, rgb)| *rgb)
    }

    /// Like `lookup`, but absence is an `UnmappedColor` error
    pub fn resolve(&self, code: u8) -> Result<Rgb> {
        self.lookup(code).ok_or(Error::UnmappedColor(code))
    }

    /// Keep only the named palettes (case-insensitive), in table order.
    /// An empty selection keeps everything.
    pub fn select_palettes(&mut self, names: &[String]) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }

        if let Some(unknown) = names
            .iter()
            .find(|n| !self.palettes.iter().any(|p| p.name.eq_ignore_ascii_case(n)))
        {
            return Err(Error::UnknownPalette(unknown.clone()));
        }

        self.palettes
            .retain(|p| names.iter().any(|n| p.name.eq_ignore_ascii_case(n)));
        Ok(())
    }

    /// Keep only the named backgrounds (case-insensitive), in table order.
    /// An empty selection keeps everything.
    pub fn select_backgrounds(&mut self, labels: &[String]) -> Result<()> {
        if labels.is_empty() {
            return Ok(());
        }

        if let Some(unknown) = labels.iter().find(|l| {
            !self
                .backgrounds
                .iter()
                .any(|(label, _)| label.eq_ignore_ascii_case(l))
        }) {
            return Err(Error::UnknownBackground(unknown.clone()));
        }

        self.backgrounds
            .retain(|(label, _)| labels.iter().any(|l| label.eq_ignore_ascii_case(l)));
        Ok(())
    }
}
