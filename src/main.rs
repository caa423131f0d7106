#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod schedule;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use vitrine_core::AnimationTiming;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Animation timing chosen at start-up
static TIMING: OnceLock<AnimationTiming> = OnceLock::new();

/// Page shown when the window opens
static START_PAGE: OnceLock<StartPage> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the animation timing (set from command line or default)
pub fn get_timing() -> AnimationTiming {
    TIMING.get().copied().unwrap_or_default()
}

pub fn get_start_page() -> StartPage {
    START_PAGE.get().copied().unwrap_or_default()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vitrine")
}

/// Pages selectable with `--page`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StartPage {
    #[default]
    Menu,
    Gallery,
    Portfolio,
}

/// Vitrine - restaurant menu, photo gallery and portfolio showcase
#[derive(Parser, Debug)]
#[command(name = "vitrine-desktop")]
#[command(about = "Vitrine - interactive restaurant and portfolio showcase")]
struct Args {
    /// Data directory for the preference store
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Disable animation delays (items snap, counters jump to their value)
    #[arg(long)]
    reduced_motion: bool,

    /// JSON file overriding individual animation timings
    #[arg(long, value_name = "FILE", conflicts_with = "reduced_motion")]
    timing: Option<PathBuf>,

    /// Page to open first
    #[arg(short, long, value_enum, default_value_t = StartPage::Menu)]
    page: StartPage,
}

fn load_timing(path: &Path) -> anyhow::Result<AnimationTiming> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading timing file {}", path.display()))?;
    let timing = serde_json::from_str(&text)
        .with_context(|| format!("parsing timing file {}", path.display()))?;
    Ok(timing)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let timing = match (&args.timing, args.reduced_motion) {
        (Some(path), _) => load_timing(path)?,
        (None, true) => AnimationTiming::reduced_motion(),
        (None, false) => AnimationTiming::default(),
    };

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = TIMING.set(timing);
    let _ = START_PAGE.set(args.page);

    tracing::info!(
        data_dir = %data_dir.display(),
        page = ?args.page,
        reduced_motion = args.reduced_motion,
        "starting vitrine"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Vitrine")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
