pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod palette;
pub mod report;

pub use app::App;
pub use color::{contrast_ratio, relative_luminance, ContrastResult, Rgb};
pub use config::Config;
pub use error::{Error, Result};
pub use palette::Tables;
