use anyhow::Context;
use chartmark::Config;
use chartmark::host::{Overlay, Script, SurfaceBounds};
use chartmark::input::{ToolKind, ToolManager};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CHARTMARK_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "chartmark")]
#[command(version = VERSION, about = "Chart annotation engine: trendlines, level lines and Fibonacci tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the drawing tools
    Tools,

    /// Replay an interaction script and export the annotations as PNG
    Render {
        /// Interaction script (TOML)
        #[arg(long, short = 's', value_name = "FILE")]
        script: PathBuf,

        /// Output PNG; defaults to a timestamped file in the configured directory
        #[arg(long, short = 'o', value_name = "PNG")]
        output: Option<PathBuf>,

        /// Surface width in pixels (16 - 8192), overriding script and config
        #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(16..=8192))]
        width: Option<u32>,

        /// Surface height in pixels (16 - 8192), overriding script and config
        #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(16..=8192))]
        height: Option<u32>,

        /// Config file to use instead of ~/.config/chartmark/config.toml
        #[arg(long, short = 'c', value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Write the documented default config file
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Tools) => print_tools(),
        Some(Command::Render {
            script,
            output,
            width,
            height,
            config,
        }) => {
            let config = match config {
                Some(path) => Config::load_from(&path)?,
                None => Config::load()?,
            };
            let script = Script::load(&script)?;

            let bounds = SurfaceBounds::new(
                script.surface.left,
                script.surface.top,
                width.or(script.surface.width).unwrap_or(config.surface.width),
                height.or(script.surface.height).unwrap_or(config.surface.height),
            );
            log::info!("Replaying {} step(s)", script.steps.len());

            let mut overlay = Overlay::new(&config, bounds)?;
            overlay.run_script(&script).context("Script replay failed")?;

            let path = match output {
                Some(path) => {
                    overlay
                        .export_png(&path)
                        .with_context(|| format!("Failed to export {}", path.display()))?;
                    path
                }
                None => overlay.export_to_directory(&config.output)?,
            };

            println!("Wrote {}", path.display());
            println!("{}", summarize(overlay.manager()));
        }
        Some(Command::InitConfig) => {
            let path = Config::create_default_file()?;
            println!("Created {}", path.display());
        }
        None => {
            println!("chartmark: chart annotation engine");
            println!();
            println!("Usage:");
            println!("  chartmark tools                       List drawing tools");
            println!("  chartmark render --script FILE        Replay a script and export PNG");
            println!("  chartmark init-config                 Write the default config file");
            println!("  chartmark --help                      Show help");
        }
    }

    Ok(())
}

fn print_tools() {
    println!("{:<16} {:<24} {:>7}  sticky", "id", "title", "anchors");
    for tool in ToolKind::ALL {
        println!(
            "{:<16} {:<24} {:>7}  {}",
            tool.id(),
            tool.title(),
            tool.required_anchor_count().unwrap_or(0),
            if tool.is_sticky() { "yes" } else { "no" }
        );
    }
}

fn summarize(manager: &ToolManager) -> String {
    let draft = match manager.draft() {
        Some(draft) => format!(
            "{} {}/{}",
            ToolKind::from(draft.kind()),
            draft.anchors().len(),
            draft.required_anchor_count()
        ),
        None => "none".to_string(),
    };
    format!(
        "finalized: {}, active tool: {}, draft: {}",
        manager.finalized().len(),
        manager.active_tool(),
        draft
    )
}
