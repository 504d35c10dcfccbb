#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const GAMEBOOK_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod engine;
pub mod evaluator;
pub mod ledger;
pub mod progress;
pub mod resolver;
pub mod state;
pub mod story;

// Adapters
pub mod data_paths;
pub mod input;
pub mod loader;
pub mod style;
pub mod view;

// Re-exports for convenience
pub use engine::{Engine, EngineError, Halt, SelectionKind};
pub use input::{InputEvent, InputManager, ScriptedInput, SelectionInput};
pub use loader::load_story;
pub use state::GameState;
pub use story::{Choice, Page, Story};
pub use view::{View, ViewItem};
