use std::io::Write;

use clap::Parser;
use color_eyre::Result;

use palette_contrast::cli::Cli;
use palette_contrast::config::{load_config, Config};
use palette_contrast::App;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if cli.verbose {
        // Keep stdout for the report
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let file_config = if cli.no_config {
        Config::default()
    } else {
        load_config()?
    };
    // Config files can narrow the report; say where the options came from
    for path in &file_config.sources {
        eprintln!("palette-contrast: using options from {}", path.display());
    }

    // File config first, then command-line flags on top
    let config = file_config.merge(cli.as_config());

    let app = App::new(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.run(&cli.command_or_default(), &mut out)?;
    out.flush()?;

    Ok(())
}
