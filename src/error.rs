use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid hex color: {0:?} (expected 6 hex digits, optionally prefixed with '#')")]
    InvalidFormat(String),

    #[error("ANSI color #{0} is not mapped to an RGB value")]
    UnmappedColor(u8),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Unknown background: {0}")]
    UnknownBackground(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),
}
