mod settings;
mod viewer;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hexstrip_core::export::write_png;
use hexstrip_core::{composite, load, BlankLines, StripMode};
use log::info;
use settings::Settings;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StripArg {
    /// Remove every "0x" in the line
    Anywhere,
    /// Remove only a leading "0x"
    Leading,
}

impl From<StripArg> for StripMode {
    fn from(arg: StripArg) -> Self {
        match arg {
            StripArg::Anywhere => StripMode::Anywhere,
            StripArg::Leading => StripMode::Leading,
        }
    }
}

/// Decode hex-dumped 24x24 RGBA tiles and show them side by side.
#[derive(Parser, Debug)]
#[command(name = "hexstrip")]
struct Args {
    /// Record file, one hex-encoded tile per line [default: ./analysis/output.txt]
    input: Option<PathBuf>,

    /// Integer upscale factor [default: 12]
    #[arg(long)]
    scale: Option<u32>,

    /// How "0x" tokens are removed before decoding
    #[arg(long, value_enum)]
    strip_mode: Option<StripArg>,

    /// Treat blank lines as malformed records instead of skipping them
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Also write the strip to this PNG file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Don't open the viewer window
    #[arg(long, default_value_t = false)]
    no_display: bool,

    /// Settings file (JSON) [default: hexstrip.json next to the executable]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long, default_value_t = false)]
    save_config: bool,
}

impl Args {
    /// Flags win over the settings file.
    fn apply(&self, settings: &mut Settings) {
        if let Some(input) = &self.input {
            settings.input = input.to_string_lossy().into_owned();
        }
        if let Some(scale) = self.scale {
            settings.scale = scale;
        }
        if let Some(mode) = self.strip_mode {
            settings.strip_mode = mode.into();
        }
        if self.strict {
            settings.blank_lines = BlankLines::Reject;
        }
        if let Some(output) = &self.output {
            settings.output = Some(output.to_string_lossy().into_owned());
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(Settings::config_path);
    let mut settings = Settings::load(&config_path);
    args.apply(&mut settings);
    if args.save_config {
        settings
            .save(&config_path)
            .with_context(|| format!("failed to save {}", config_path.display()))?;
        info!("Saved settings to {}", config_path.display());
    }

    let file = File::open(&settings.input)
        .with_context(|| format!("failed to open {}", settings.input))?;
    let images = load(BufReader::new(file), &settings.load_options())
        .with_context(|| format!("failed to decode {}", settings.input))?;
    info!("Decoded {} record(s) from {}", images.len(), settings.input);

    let strip = composite(&images)?;
    info!("Strip is {}x{}", strip.width(), strip.height());

    if let Some(output) = &settings.output {
        let file = File::create(output).with_context(|| format!("failed to create {}", output))?;
        write_png(&strip, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", output))?;
        info!("Wrote {}", output);
    }

    if !args.no_display {
        viewer::show(&strip, &settings.window_title)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_settings_alone() {
        let args = Args::parse_from(["hexstrip"]);
        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert_eq!(settings, Settings::default());
        assert!(!args.no_display);
    }

    #[test]
    fn test_flags_override_settings() {
        let args = Args::parse_from([
            "hexstrip",
            "dump.txt",
            "--scale",
            "4",
            "--strip-mode",
            "leading",
            "--strict",
            "--output",
            "out.png",
            "--no-display",
        ]);
        let mut settings = Settings {
            scale: 7,
            ..Settings::default()
        };
        args.apply(&mut settings);

        assert_eq!(settings.input, "dump.txt");
        assert_eq!(settings.scale, 4);
        assert_eq!(settings.strip_mode, StripMode::Leading);
        assert_eq!(settings.blank_lines, BlankLines::Reject);
        assert_eq!(settings.output.as_deref(), Some("out.png"));
        assert!(args.no_display);
    }

    #[test]
    fn test_rejects_unknown_strip_mode() {
        assert!(Args::try_parse_from(["hexstrip", "--strip-mode", "middle"]).is_err());
    }

    #[test]
    fn test_args_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
