use serde::{Deserialize, Serialize};

/// Stable identifier used for pages and page references.
pub type Id = String;

/// Top-level authored story loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoryDef {
    pub game: GameDef,
    #[serde(default)]
    pub pages: Vec<PageDef>,
}

/// Story-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub intro: String,
    pub start_page: Id,
    #[serde(default)]
    pub starting_coins: u32,
    #[serde(default = "default_max_health")]
    pub max_health: u32,
    #[serde(default)]
    pub messages: MessagesDef,
}

impl Default for GameDef {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            intro: String::new(),
            start_page: String::new(),
            starting_coins: 0,
            max_health: default_max_health(),
            messages: MessagesDef::default(),
        }
    }
}

/// Fixed strings the engine shows around the story text.
///
/// Every field is optional in the story file; omitted fields use the English defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesDef {
    pub health_label: String,
    pub coins_label: String,
    pub health_full: String,
    pub health_empty: String,
    pub coin: String,
    pub death: String,
    pub story_end: String,
    pub prompt: String,
    pub invalid_choice: String,
    pub cannot_afford: String,
    pub price: String,
}

impl Default for MessagesDef {
    fn default() -> Self {
        Self {
            health_label: "Health".into(),
            coins_label: "Coins".into(),
            health_full: "\u{2665}".into(),  // ♥
            health_empty: "\u{2661}".into(), // ♡
            coin: "\u{2460}".into(),         // ①
            death: "You died! Game over.".into(),
            story_end: "The end.".into(),
            prompt: "Your choice? ".into(),
            invalid_choice: "Invalid choice. Try again!".into(),
            cannot_afford: "You can't afford that! Pick something else.".into(),
            price: "Cost".into(),
        }
    }
}

/// A single page of the story: narrative text plus outgoing choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDef {
    pub id: Id,
    pub text: String,
    #[serde(default)]
    pub choices: Vec<ChoiceDef>,
    /// When set, the engine picks one of the active choices at random instead of asking.
    #[serde(default)]
    pub random: bool,
}

/// An edge from one page to another, with gating and effects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceDef {
    #[serde(default)]
    pub label: String,
    pub goto: Id,
    #[serde(default)]
    pub result_text: String,
    #[serde(default)]
    pub entry_cost: u32,
    #[serde(default)]
    pub health_delta: i32,
    #[serde(default)]
    pub coins_delta: i32,
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub forbids: Vec<String>,
    #[serde(default)]
    pub completes: Vec<String>,
}

fn default_max_health() -> u32 {
    10
}
