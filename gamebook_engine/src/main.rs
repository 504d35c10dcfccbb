#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Gamebook **
//! Console player for page-and-choice stories.

use std::path::PathBuf;

use gamebook_engine::data_paths::{DEFAULT_STORY_FILE, data_path};
use gamebook_engine::view::title_page;
use gamebook_engine::{Engine, GAMEBOOK_VERSION, Halt, InputManager, View, load_story};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(author, version, about = "Play a page-and-choice gamebook in the terminal.")]
struct Cli {
    /// Story file to play (RON or TOML). Defaults to the bundled story.
    #[arg(long)]
    story: Option<PathBuf>,
    /// Seed for random page outcomes, for reproducible playthroughs.
    #[arg(long)]
    seed: Option<u64>,
    /// Load and validate the story, print a summary, and exit without playing.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    info!("gamebook v{GAMEBOOK_VERSION}");
    let story_path = cli.story.unwrap_or_else(|| data_path(DEFAULT_STORY_FILE));
    info!("Start: loading story from '{}'...", story_path.display());
    let story = load_story(&story_path).context("while loading story")?;

    if cli.check {
        println!("{}", story.summary());
        return Ok(());
    }

    let rng = match cli.seed {
        Some(seed) => {
            info!("random outcomes seeded with {seed}");
            StdRng::seed_from_u64(seed)
        },
        None => StdRng::from_os_rng(),
    };

    let mut view = View::new();
    for item in title_page(&story) {
        view.push(item);
    }

    let mut input = InputManager::new();
    let mut engine = Engine::new(&story, rng);
    let halt = engine.run(&mut input, &mut view).context("story could not continue")?;

    match halt {
        Halt::Dead { page } => info!("player died on the way to page '{page}'"),
        Halt::StoryEnd { page } => info!("story ended on page '{page}'"),
        Halt::Abandoned { page } => info!("player left the story at page '{page}'"),
    }
    Ok(())
}
