//! Choice Resolver
//!
//! Applies a selected choice to the game state: consequence text, resource effects,
//! completed tasks, and the move to the next page.

use log::info;
use thiserror::Error;

use crate::state::GameState;
use crate::story::Choice;
use crate::view::{View, ViewItem};

/// A choice the player cannot pay for. Nothing about the game state has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("choice costs {cost} coins but only {coins} are available")]
pub struct Rejected {
    pub cost: u32,
    pub coins: u32,
}

/// Take `choice` if the player can afford its entry cost.
///
/// # Errors
/// Returns [`Rejected`] when `entry_cost` exceeds the current coins; the state and the
/// view are left untouched in that case.
pub fn resolve(choice: &Choice, state: &mut GameState, view: &mut View) -> Result<(), Rejected> {
    if !state.ledger.can_afford(choice.entry_cost) {
        return Err(Rejected {
            cost: choice.entry_cost,
            coins: state.ledger.coins(),
        });
    }
    apply(choice, state, view);
    Ok(())
}

/// Take `choice` without checking its cost.
///
/// Used for forced and random selections; the coin balance still floors at zero.
pub fn apply(choice: &Choice, state: &mut GameState, view: &mut View) {
    view.push(ViewItem::Blank);
    if let Some(text) = choice.result_text.as_ref().filter(|t| !t.is_empty()) {
        view.push(ViewItem::ChoiceResult(text.clone()));
    }

    state
        .ledger
        .apply_delta(choice.health_delta, choice.coins_delta, choice.entry_cost);
    state.progress.add(&choice.completes);

    info!("page '{}' -> '{}'", state.current_page, choice.target);
    state.current_page.clone_from(&choice.target);
}
