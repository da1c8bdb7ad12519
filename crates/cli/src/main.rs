#![deny(unsafe_code)]
//! CLI binary for the perlin-field noise synthesizer.
//!
//! Subcommands:
//! - `render <preset>`: generate a field and write a PNG
//! - `list`: print available presets, palettes, and override keys
//!
//! Set `RUST_LOG=debug` for generation details.

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use log::info;
use perlin_field_core::{FieldConfig, FieldGenerator};
use perlin_field_render::{
    BandPalette, Palette, Preset, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "perlin-field", about = "Deterministic gradient-noise field renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a noise field and write it as a PNG.
    Render {
        /// Preset name (e.g. "terrain").
        preset: String,

        /// Output width in pixels.
        #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
        width: usize,

        /// Output height in pixels.
        #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,

        /// Gradient grid seed.
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Palette name overriding the preset's (terrain, grayscale).
        #[arg(short, long)]
        palette: Option<String>,

        /// Custom bands as JSON: {"thresholds": [...], "colors": ["#rrggbb", ...]}.
        #[arg(long, conflicts_with = "palette")]
        bands: Option<String>,

        /// Preset overrides as a JSON string (cell_size, octaves, persistence, frequency_multiplier).
        #[arg(long, default_value = "{}")]
        params: String,

        /// Field config JSON file to reproduce; replaces size, seed, and params.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Evaluate rows on all cores.
        #[arg(long)]
        parallel: bool,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// List available presets and palettes.
    List,
}

fn load_config(path: &Path) -> Result<FieldConfig, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid config {}: {e}", path.display())))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let presets = Preset::list_presets();
            let palettes = Palette::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "presets": presets,
                    "palettes": palettes,
                    "params": Preset::param_schema(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Presets:");
                for name in presets {
                    println!("  {name}");
                }
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
            }
        }
        Command::Render {
            preset,
            width,
            height,
            seed,
            palette,
            bands,
            params,
            config,
            parallel,
            output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let mut chosen = Preset::from_name(&preset, width, height, seed, &params)?;
            if let Some(name) = palette {
                chosen = chosen.with_palette(Palette::from_name(&name)?);
            }
            if let Some(json) = bands {
                chosen = chosen.with_palette(Palette::Banded(BandPalette::from_json(&json)?));
            }

            let config = match config {
                Some(path) => load_config(&path)?,
                None => *chosen.config(),
            };
            let generator = FieldGenerator::new(config)?;
            info!(
                "rendering {preset}: {}x{} px, grid {}x{}",
                config.width,
                config.height,
                generator.grid().width(),
                generator.grid().height()
            );

            let field = if parallel {
                generator.generate_par()?
            } else {
                generator.generate()?
            };
            perlin_field_render::snapshot::write_png(&field, chosen.palette(), &output)?;

            let (min, max) = field.min_max();
            if cli.json {
                let info = serde_json::json!({
                    "preset": preset,
                    "config": config,
                    "min": min,
                    "max": max,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {preset} ({}x{}, seed {}, {} octaves, range {min:.3}..{max:.3}) -> {}",
                    config.width,
                    config.height,
                    config.seed,
                    config.octaves.octave_count,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
