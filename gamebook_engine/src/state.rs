//! Mutable state of a single playthrough.

use crate::ledger::ResourceLedger;
use crate::progress::ProgressSet;

/// Where the player is, what they carry, and what they have done.
///
/// Owned by the [`Engine`](crate::engine::Engine) for the whole playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub current_page: String,
    pub ledger: ResourceLedger,
    pub progress: ProgressSet,
}
impl GameState {
    pub fn new(start_page: &str, coins: u32, max_health: u32) -> GameState {
        GameState {
            current_page: start_page.to_string(),
            ledger: ResourceLedger::new(max_health, coins),
            progress: ProgressSet::new(),
        }
    }
}
