use serde::Serialize;
use tracing::{debug, warn};

use crate::color::{ContrastResult, Rgb};
use crate::palette::{Palette, Tables};

/// Contrast of one role color against one background
#[derive(Debug, Clone, Serialize)]
pub struct BackgroundResult {
    pub background: &'static str,
    #[serde(flatten)]
    pub contrast: ContrastResult,
}

/// Outcome of evaluating one palette role
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoleOutcome {
    Mapped {
        rgb: Rgb,
        hex: String,
        results: Vec<BackgroundResult>,
    },
    Unmapped,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleReport {
    pub role: &'static str,
    pub code: u8,
    #[serde(flatten)]
    pub outcome: RoleOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaletteReport {
    pub name: &'static str,
    pub roles: Vec<RoleReport>,
}

/// Full contrast report, in table order
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub palettes: Vec<PaletteReport>,
}

impl Report {
    /// Number of (palette, role, background) results
    pub fn result_count(&self) -> usize {
        self.palettes
            .iter()
            .flat_map(|p| &p.roles)
            .map(|r| match &r.outcome {
                RoleOutcome::Mapped { results, .. } => results.len(),
                RoleOutcome::Unmapped => 0,
            })
            .sum()
    }

    /// Roles whose color code has no RGB mapping
    pub fn unmapped(&self) -> impl Iterator<Item = (&'static str, &RoleReport)> {
        self.palettes.iter().flat_map(|p| {
            p.roles
                .iter()
                .filter(|r| matches!(r.outcome, RoleOutcome::Unmapped))
                .map(move |r| (p.name, r))
        })
    }
}

/// Evaluate every (palette, role, background) triple
pub fn build_report(tables: &Tables) -> Report {
    let palettes = tables
        .palettes
        .iter()
        .map(|palette| evaluate_palette(tables, palette))
        .collect();

    let report = Report { palettes };
    debug!(
        results = report.result_count(),
        unmapped = report.unmapped().count(),
        "report built"
    );
    report
}

fn evaluate_palette(tables: &Tables, palette: &Palette) -> PaletteReport {
    debug!(palette = palette.name, roles = palette.roles.len(), "evaluating palette");

    let roles = palette
        .roles
        .iter()
        .map(|&(role, code)| {
            let outcome = match tables.resolve(code) {
                Ok(rgb) => RoleOutcome::Mapped {
                    rgb,
                    hex: rgb.to_hex(),
                    results: tables
                        .backgrounds
                        .iter()
                        .map(|&(background, bg)| BackgroundResult {
                            background,
                            contrast: rgb.contrast_with(bg),
                        })
                        .collect(),
                },
                Err(err) => {
                    warn!(palette = palette.name, role, "{err}");
                    RoleOutcome::Unmapped
                }
            };
            RoleReport { role, code, outcome }
        })
        .collect();

    PaletteReport {
        name: palette.name,
        roles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BACKGROUNDS, PALETTES};

    fn tables_with_gap() -> Tables {
        let mut tables = Tables::builtin();
        // Drop the mapping for 214 (DEFAULT warning)
        tables.colors.retain(|(code, _)| *code != 214);
        tables
    }

    #[test]
    fn test_builtin_report_covers_every_triple() {
        let report = build_report(&Tables::builtin());
        let expected: usize = PALETTES.iter().map(|p| p.roles.len()).sum::<usize>()
            * BACKGROUNDS.len();
        assert_eq!(report.result_count(), expected);
        assert_eq!(report.unmapped().count(), 0);
    }

    #[test]
    fn test_report_preserves_table_order() {
        let report = build_report(&Tables::builtin());
        let names: Vec<_> = report.palettes.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["DEFAULT", "COLORBLIND", "HIGHCONTRAST"]);

        let roles: Vec<_> = report.palettes[0].roles.iter().map(|r| r.role).collect();
        assert_eq!(roles, vec!["Success", "Error", "Warning", "Info"]);
    }

    #[test]
    fn test_error_role_on_black() {
        let report = build_report(&Tables::builtin());
        let error = &report.palettes[0].roles[1];
        let RoleOutcome::Mapped { rgb, results, .. } = &error.outcome else {
            panic!("Error role should be mapped");
        };
        assert_eq!(*rgb, Rgb::new(255, 0, 0));
        let black = &results[0];
        assert_eq!(black.background, "Black (dark terminal)");
        assert!((black.contrast.ratio - 5.25).abs() < 0.01);
        assert!(black.contrast.meets_aa);
        assert!(!black.contrast.meets_aaa);
    }

    #[test]
    fn test_unmapped_role_is_reported_not_dropped() {
        let report = build_report(&tables_with_gap());

        let unmapped: Vec<_> = report.unmapped().collect();
        assert_eq!(unmapped.len(), 1);
        assert_eq!(unmapped[0].0, "DEFAULT");
        assert_eq!(unmapped[0].1.role, "Warning");
        assert_eq!(unmapped[0].1.code, 214);
        assert!(matches!(unmapped[0].1.outcome, RoleOutcome::Unmapped));

        // The remaining roles are still evaluated
        assert_eq!(report.palettes[0].roles.len(), 4);
        assert_eq!(report.result_count(), 11 * BACKGROUNDS.len());
    }

    #[test]
    fn test_json_shape() {
        let mut tables = tables_with_gap();
        tables.select_palettes(&["DEFAULT".to_string()]).unwrap();
        tables
            .select_backgrounds(&["Black (dark terminal)".to_string()])
            .unwrap();

        let value = serde_json::to_value(build_report(&tables)).unwrap();
        let roles = &value["palettes"][0]["roles"];

        assert_eq!(roles[1]["role"], "Error");
        assert_eq!(roles[1]["status"], "mapped");
        assert_eq!(roles[1]["hex"], "#FF0000");
        assert_eq!(roles[1]["rgb"], serde_json::json!([255, 0, 0]));
        assert_eq!(roles[1]["results"][0]["meets_aa"], true);
        assert_eq!(roles[1]["results"][0]["meets_aaa"], false);

        assert_eq!(roles[2]["role"], "Warning");
        assert_eq!(roles[2]["status"], "unmapped");
        assert_eq!(roles[2]["code"], 214);
        assert!(roles[2].get("results").is_none());
    }
}
