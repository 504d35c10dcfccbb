//! Page Engine
//!
//! Drives a playthrough one page visit at a time: status line, death check, narrative,
//! terminal check, then a forced, random, or player-made selection that is resolved
//! before moving on. The loop only stops in a terminal state.

use std::io;

use log::{error, info};
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

use crate::evaluator::{active_choices, format_menu, parse_selection};
use crate::input::{InputEvent, SelectionInput};
use crate::ledger::LifeState;
use crate::resolver::{self, Rejected};
use crate::state::GameState;
use crate::story::{Choice, Story};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};

/// Failures that end a playthrough abnormally.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The page has authored choices, but none pass their gating: the story is missing a fallback.
    #[error("content defect: page '{page}' has {authored} choices but none are available")]
    ContentDefect { page: String, authored: usize },
    #[error("page '{0}' does not exist in the story")]
    MissingPage(String),
    #[error("failed to read the player's selection")]
    Input(#[from] io::Error),
}

/// Why the playthrough stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    /// Health reached zero.
    Dead { page: String },
    /// A page without choices was reached; the page itself says whether it was a victory.
    StoryEnd { page: String },
    /// The input closed (end of file or interrupt) while waiting for a selection.
    Abandoned { page: String },
}

/// How the choice for a page visit was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// The only active choice, taken without a prompt or a cost check.
    Forced,
    /// Drawn uniformly from the active choices of a random page, without a cost check.
    Random,
    /// Picked by the player and paid for.
    Chosen,
}

/// Owns the game state for one playthrough of a story.
pub struct Engine<'s, R: Rng> {
    story: &'s Story,
    state: GameState,
    rng: R,
    turn: usize,
}

impl<'s, R: Rng> Engine<'s, R> {
    /// Start a new playthrough from the story's opening state.
    pub fn new(story: &'s Story, rng: R) -> Self {
        Self::with_state(story, story.new_game(), rng)
    }

    /// Continue from an explicit state.
    pub fn with_state(story: &'s Story, state: GameState, rng: R) -> Self {
        Self {
            story,
            state,
            rng,
            turn: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of page visits so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Play until a terminal state is reached.
    ///
    /// # Errors
    /// Returns an [`EngineError`] for content defects, dangling page references, or input failures.
    pub fn run(&mut self, input: &mut impl SelectionInput, view: &mut View) -> Result<Halt, EngineError> {
        loop {
            if let Some(halt) = self.step(input, view)? {
                view.flush();
                info!("playthrough halted after {} turns: {halt:?}", self.turn);
                return Ok(halt);
            }
        }
    }

    /// Visit the current page once.
    ///
    /// Returns `Some(Halt)` if the visit ended the playthrough, `None` if play moves on.
    ///
    /// # Errors
    /// See [`Engine::run`].
    pub fn step(&mut self, input: &mut impl SelectionInput, view: &mut View) -> Result<Option<Halt>, EngineError> {
        let story = self.story;
        let messages = &story.messages;
        self.turn += 1;
        info!("================> TURN {} <================", self.turn);

        let page_id = self.state.current_page.clone();
        let Some(page) = story.page(&page_id) else {
            error!("page '{page_id}' does not exist");
            view.flush();
            return Err(EngineError::MissingPage(page_id));
        };
        info!(
            "visiting page '{page_id}' (health {}, coins {}, {} tasks done)",
            self.state.ledger.health(),
            self.state.ledger.coins(),
            self.state.progress.len()
        );

        view.push(ViewItem::status(&self.state.ledger, messages));
        if self.state.ledger.life_state() == LifeState::Dead {
            info!("player died; arrived dead at page '{page_id}'");
            view.push(ViewItem::Death(messages.death.clone()));
            return Ok(Some(Halt::Dead { page: page_id }));
        }

        view.push(ViewItem::Narrative(page.text.clone()));
        if page.is_terminal() {
            info!("page '{page_id}' has no choices: story ends");
            view.push(ViewItem::StoryEnd(messages.story_end.clone()));
            return Ok(Some(Halt::StoryEnd { page: page_id }));
        }

        let active = active_choices(page, &self.state.progress);
        match active.as_slice() {
            [] => {
                error!(
                    "page '{page_id}' offers none of its {} choices with tasks {:?}",
                    page.choices.len(),
                    self.state.progress.iter().collect::<Vec<_>>()
                );
                view.flush();
                return Err(EngineError::ContentDefect {
                    page: page_id,
                    authored: page.choices.len(),
                });
            },
            [only] => {
                log_selection(SelectionKind::Forced, only);
                resolver::apply(only, &mut self.state, view);
            },
            _ if page.random => {
                if let Some(&drawn) = active.choose(&mut self.rng) {
                    log_selection(SelectionKind::Random, drawn);
                    resolver::apply(drawn, &mut self.state, view);
                }
            },
            _ => {
                if !self.prompt_and_resolve(&active, input, view)? {
                    info!("input closed while waiting on page '{page_id}'");
                    view.flush();
                    return Ok(Some(Halt::Abandoned { page: page_id }));
                }
            },
        }
        Ok(None)
    }

    /// Show the menu and read selections until one is valid and affordable, then resolve it.
    ///
    /// Only the menu and an error message are repeated on a bad selection; the status line
    /// and narrative are not. Returns `false` if the input closed instead.
    fn prompt_and_resolve(
        &mut self,
        active: &[&Choice],
        input: &mut impl SelectionInput,
        view: &mut View,
    ) -> Result<bool, EngineError> {
        let story = self.story;
        let messages = &story.messages;
        let menu = format_menu(active, messages);
        let prompt = messages.prompt.prompt_style().to_string();

        loop {
            view.push(ViewItem::ChoiceMenu(menu.clone()));
            view.flush();

            let line = match input.read_line(&prompt)? {
                InputEvent::Line(line) => line,
                InputEvent::Eof | InputEvent::Interrupted => return Ok(false),
            };

            let choice = match parse_selection(&line, active.len()) {
                Ok(idx) => active[idx],
                Err(err) => {
                    info!("invalid selection {line:?}: {err}");
                    view.push(ViewItem::Error(messages.invalid_choice.clone()));
                    continue;
                },
            };

            match resolver::resolve(choice, &mut self.state, view) {
                Ok(()) => {
                    log_selection(SelectionKind::Chosen, choice);
                    return Ok(true);
                },
                Err(Rejected { cost, coins }) => {
                    info!("cannot afford \"{}\" ({cost} > {coins})", choice.label);
                    view.push(ViewItem::Error(messages.cannot_afford.clone()));
                },
            }
        }
    }
}

fn log_selection(kind: SelectionKind, choice: &Choice) {
    info!(
        "{kind:?} selection: \"{}\" -> '{}'",
        choice.label, choice.target
    );
}
