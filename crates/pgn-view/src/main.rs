mod config;
mod page;

use anyhow::{bail, Context, Result};
use askama::Template;
use clap::{Args, Parser, Subcommand};
use config::ViewerConfig;
use page::PageTemplate;
use pgn_core::{
    parse_game, render, ExportPreset, GameSummary, HeaderRecord, Locale, Surface, View,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pgn-view")]
#[command(about = "Render annotated PGN games")]
struct Cli {
    /// Configuration file (defaults to pgn-view.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log parse details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a game in the detailed or compact view
    Render(RenderArgs),
    /// Print the annotated moves as JSON
    Moves {
        /// PGN file; reads stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Print the game summary as JSON
    Summary {
        /// PGN file; reads stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Print the Lichess export query for a preset
    Export {
        /// Preset name (basic, with-evals, with-analysis, moves-only, literate, tournament, minimal)
        preset: ExportPreset,
    },
    /// List export presets
    Presets {
        /// Description language
        #[arg(short, long)]
        locale: Option<Locale>,
    },
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    /// PGN file; reads stdin when omitted or "-"
    file: Option<PathBuf>,
    /// detailed or compact
    #[arg(long)]
    view: Option<View>,
    /// html or text
    #[arg(short, long)]
    surface: Option<Surface>,
    /// Full moves to show before truncating
    #[arg(short = 'n', long)]
    max_moves: Option<usize>,
    /// Label language (en or ru)
    #[arg(short, long)]
    locale: Option<Locale>,
    /// Wrap the HTML in a standalone page
    #[arg(long)]
    page: bool,
}

impl RenderArgs {
    /// Applies command-line flags on top of the file configuration.
    fn apply(&self, config: ViewerConfig) -> ViewerConfig {
        ViewerConfig {
            max_moves: self.max_moves.unwrap_or(config.max_moves),
            locale: self.locale.unwrap_or(config.locale),
            view: self.view.unwrap_or(config.view),
            surface: self.surface.unwrap_or(config.surface),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ViewerConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::Render(args) => {
            let settings = args.apply(config);
            let pgn = read_pgn(args.file.as_deref())?;
            let output = render_game(&pgn, &settings, args.page)?;
            println!("{}", output);
        }
        Commands::Moves { file } => {
            let pgn = read_pgn(file.as_deref())?;
            let game = parse_game(&pgn).context("failed to parse movetext")?;
            println!("{}", serde_json::to_string_pretty(&game.moves)?);
        }
        Commands::Summary { file } => {
            let pgn = read_pgn(file.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&GameSummary::from_pgn(&pgn))?);
        }
        Commands::Export { preset } => {
            println!("{}", preset.options().query_string());
        }
        Commands::Presets { locale } => {
            let locale = locale.unwrap_or(config.locale);
            for preset in ExportPreset::ALL {
                println!("{:<14} {}", preset.name(), preset.description(locale));
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_pgn(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut pgn = String::new();
            std::io::stdin()
                .read_to_string(&mut pgn)
                .context("failed to read PGN from stdin")?;
            Ok(pgn)
        }
    }
}

fn render_game(pgn: &str, settings: &ViewerConfig, as_page: bool) -> Result<String> {
    let body = render(pgn, settings.view, settings.surface, &settings.render_options());
    if !as_page {
        return Ok(body);
    }
    if settings.surface != Surface::Html {
        bail!("--page needs the html surface");
    }
    let page = PageTemplate {
        title: PageTemplate::title_for(&HeaderRecord::parse(pgn)),
        lang: settings.locale.code().to_string(),
        body,
    };
    page.render().context("failed to render page")
}
