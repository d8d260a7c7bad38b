//! Workspace tasks: `cargo run -p slider-xtask -- <task>`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use slider::SliderOptions;

#[derive(Parser)]
#[command(about = "Build tasks for the slider workspace")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Print the JSON Schema of the UI-exposed options.
    Schema {
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the default options as a TOML preset.
    Preset {
        /// Destination file, e.g. `presets/default.toml`.
        path: PathBuf,
    },
    /// List preset names found in a directory.
    Presets {
        /// Directory holding `*.toml` presets.
        #[arg(default_value = "presets")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().task {
        Task::Schema { out } => {
            let schema = serde_json::to_string_pretty(
                &SliderOptions::json_schema(),
            )?;
            match out {
                Some(path) => std::fs::write(&path, schema)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => writeln!(std::io::stdout(), "{schema}")?,
            }
        }
        Task::Preset { path } => {
            SliderOptions::default()
                .save(&path)
                .with_context(|| format!("saving {}", path.display()))?;
        }
        Task::Presets { dir } => {
            let mut stdout = std::io::stdout();
            for name in SliderOptions::list_presets(&dir) {
                writeln!(stdout, "{name}")?;
            }
        }
    }
    Ok(())
}
