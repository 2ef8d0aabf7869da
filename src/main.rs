//! mpdx-list - Entry Point

use clap::Parser;
use mpdx_list::config::KeyBindings;
use mpdx_list::model::error::AppError;
use mpdx_list::model::GroupMode;
use mpdx_list::state::BrowserState;
use mpdx_list::view::{ColorConfig, ListStyles};
use std::path::PathBuf;
use tracing::info;

/// mpdx-list - browse a contact list in the terminal
#[derive(Parser, Debug)]
#[command(name = "mpdx-list")]
#[command(version)]
#[command(about = "Grouped, infinite-scrolling terminal browser for JSONL contact lists")]
pub struct Args {
    /// Path to JSONL contacts file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Initial grouping
    #[arg(short, long, value_enum)]
    pub group_by: Option<GroupMode>,

    /// Contacts fetched per page (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = mpdx_list::config::load_config_with_precedence(args.config.clone())?;
        let merged = mpdx_list::config::merge_config(config_file);
        let with_env = mpdx_list::config::apply_env_overrides(merged);
        let page_size = args
            .page_size
            .map(|size| usize::try_from(size).unwrap_or(usize::MAX));
        mpdx_list::config::apply_cli_overrides(with_env, args.group_by, page_size)
    };

    mpdx_list::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let options = config.list_options()?;
    let translator = config.translator();

    let source = mpdx_list::source::detect_contact_source(args.file.clone())?;
    let skipped = source.skipped().len();

    let browser = BrowserState::new(source, config.page_size, options, config.group_by, translator)
        .with_skipped(skipped);
    let styles = ListStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));

    mpdx_list::view::run_with_source(browser, KeyBindings::default(), styles)?;

    Ok(())
}
