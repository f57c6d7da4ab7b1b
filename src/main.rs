use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use festcli::{cli, config, error, types::PkceToken, utils};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Handle cached listening history
    Artists(ArtistsOptions),

    /// Generate and show your personal festival
    Festival(FestivalOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle cached listening history",
    args_conflicts_with_subcommands = true // disallow mixing query flags with subcommands
)]
pub struct ArtistsOptions {
    /// Listening history window to list (short, medium, long)
    #[clap(long, default_value = "medium", value_parser = utils::parse_time_range)]
    pub time_range: utils::TimeRange,

    /// Search for artists
    #[clap(long)]
    pub search: Option<String>,

    /// Subcommands under `artists` (e.g., `update`)
    #[command(subcommand)]
    pub command: Option<ArtistsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ArtistsSubcommand {
    /// Update the listening history caches
    Update(ArtistsUpdateOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsUpdateOpts {
    /// Force update (skip caches/guards)
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Generate and show your personal festival",
    args_conflicts_with_subcommands = true
)]
pub struct FestivalOptions {
    /// Subcommands under `festival` (e.g., `update`)
    #[command(subcommand)]
    pub command: Option<FestivalSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FestivalSubcommand {
    /// Regenerate the festival
    Update(FestivalUpdateOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct FestivalUpdateOpts {
    /// Also refetch the listening history instead of reusing caches
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Artists(opt) => match opt.command {
            Some(ArtistsSubcommand::Update(u)) => cli::update_artists(u.force).await,
            None => cli::list_artists(opt.time_range, opt.search).await,
        },

        Command::Festival(opt) => match opt.command {
            Some(FestivalSubcommand::Update(u)) => cli::festival(true, u.force).await,
            None => cli::festival(false, false).await,
        },

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
