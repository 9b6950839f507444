mod driver;
mod render;

pub use driver::{build_report, BackgroundResult, PaletteReport, Report, RoleOutcome, RoleReport};
pub use render::{format_result_line, write_json, write_text};
