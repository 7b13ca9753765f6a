//! feedswipe - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use feedswipe::model::AppError;
use feedswipe::render::Timeline;
use feedswipe::state::AppState;

/// feedswipe - browse a timeline and swipe drafts into it
#[derive(Parser, Debug)]
#[command(name = "feedswipe")]
#[command(version)]
#[command(about = "Terminal social timeline with swipe-to-publish composition")]
pub struct Args {
    /// JSON markup document to hydrate the timeline from
    pub timeline: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Caption length before it collapses
    #[arg(long)]
    pub cutoff: Option<usize>,

    /// Handle published posts appear under
    #[arg(long)]
    pub handle: Option<String>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = feedswipe::config::load_config_with_precedence(args.config.clone())?;
        let merged = feedswipe::config::merge_config(config_file);
        let with_env = feedswipe::config::apply_env_overrides(merged);
        feedswipe::config::apply_cli_overrides(with_env, args.cutoff, args.handle.clone())
    };

    feedswipe::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let timeline = match &args.timeline {
        Some(path) => Timeline::load(path, config.caption())?,
        None => Timeline::seeded(config.caption()),
    };
    info!(posts = timeline.len(), "timeline ready");

    let state = AppState::new(&config, timeline);
    feedswipe::view::run_with_state(state)
}
