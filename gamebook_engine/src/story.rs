//! Story graph.
//!
//! Runtime pages and choices, built once from the authored `StoryDef` and read-only during play.

use std::collections::{BTreeSet, HashMap};

use gamebook_data::MessagesDef;

use crate::GAMEBOOK_VERSION;
use crate::state::GameState;

/// An edge from one page to another, with gating conditions and effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choice {
    /// Display text. May be empty for choices that are only ever taken at random.
    pub label: String,
    pub target: String,
    pub result_text: Option<String>,
    pub entry_cost: u32,
    pub health_delta: i32,
    pub coins_delta: i32,
    /// All of these must be completed for the choice to be offered.
    pub required: BTreeSet<String>,
    /// None of these may be completed for the choice to be offered.
    pub forbidden: BTreeSet<String>,
    /// Added to the progress set when the choice is taken.
    pub completes: BTreeSet<String>,
}

/// A narrative node: text plus ordered outgoing choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub id: String,
    pub text: String,
    pub choices: Vec<Choice>,
    pub random: bool,
}
impl Page {
    /// A page authored without any choices ends the story.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }
}

/// The complete story: game settings plus every page, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Story {
    pub title: String,
    pub author: String,
    pub intro: String,
    pub start_page: String,
    pub starting_coins: u32,
    pub max_health: u32,
    pub messages: MessagesDef,
    pub pages: HashMap<String, Page>,
}
impl Story {
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.get(id)
    }

    /// Add a page, replacing any page with the same id.
    pub fn insert_page(&mut self, page: Page) {
        self.pages.insert(page.id.clone(), page);
    }

    /// One-line description of the story: pages, choices, start, and endings.
    pub fn summary(&self) -> String {
        let choices: usize = self.pages.values().map(|page| page.choices.len()).sum();
        let mut endings: Vec<_> = self
            .pages
            .values()
            .filter(|page| page.is_terminal())
            .map(|page| page.id.as_str())
            .collect();
        endings.sort_unstable();
        let author = if self.author.is_empty() {
            String::new()
        } else {
            format!(" by {}", self.author)
        };
        format!(
            "\"{}\"{author}: {} pages, {choices} choices, start at '{}', endings: {} (gamebook v{GAMEBOOK_VERSION})",
            self.title,
            self.pages.len(),
            self.start_page,
            endings.join(", ")
        )
    }

    /// Fresh state for a new playthrough: start page, full health, starting purse, no progress.
    pub fn new_game(&self) -> GameState {
        GameState::new(&self.start_page, self.starting_coins, self.max_health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_without_choices_is_terminal() {
        let mut page = Page {
            id: "victory".into(),
            text: "You found the ring!".into(),
            ..Page::default()
        };
        assert!(page.is_terminal());

        page.choices.push(Choice {
            target: "start".into(),
            ..Choice::default()
        });
        assert!(!page.is_terminal());
    }

    #[test]
    fn summary_lists_endings_in_order() {
        let mut story = Story {
            title: "Tiny".into(),
            author: "Anon".into(),
            start_page: "start".into(),
            ..Story::default()
        };
        story.insert_page(Page {
            id: "start".into(),
            choices: vec![
                Choice {
                    target: "win".into(),
                    ..Choice::default()
                },
                Choice {
                    target: "lose".into(),
                    ..Choice::default()
                },
            ],
            ..Page::default()
        });
        for id in ["win", "lose"] {
            story.insert_page(Page {
                id: id.into(),
                ..Page::default()
            });
        }

        let summary = story.summary();
        assert!(summary.starts_with("\"Tiny\" by Anon: 3 pages, 2 choices, start at 'start', endings: lose, win"));
        assert!(summary.ends_with(&format!("(gamebook v{GAMEBOOK_VERSION})")));
    }

    #[test]
    fn new_game_starts_from_story_settings() {
        let mut story = Story {
            start_page: "start".into(),
            starting_coins: 5,
            max_health: 10,
            ..Story::default()
        };
        story.insert_page(Page {
            id: "start".into(),
            ..Page::default()
        });

        let state = story.new_game();
        assert_eq!(state.current_page, "start");
        assert_eq!(state.ledger.coins(), 5);
        assert_eq!(state.ledger.health(), 10);
        assert!(state.progress.is_empty());
        assert!(story.page("start").is_some());
    }
}
