//! View module.
//!
//! The engine never prints directly. It pushes [`ViewItem`]s into the [`View`], which
//! renders them in the order they were pushed whenever it is flushed (before each prompt
//! and when the story halts). A recording view keeps the items instead of printing them.
use gamebook_data::MessagesDef;
use textwrap::fill;
use variantly::Variantly;

use crate::ledger::ResourceLedger;
use crate::story::Story;
use crate::style::{GameStyle, normal_block};

/// One unit of output, in the order the player should see it.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    Title(String),
    /// Author credit shown under the title.
    Byline(String),
    Intro(String),
    /// Health and coin markers shown at the top of every page visit.
    StatusLine {
        health_label: String,
        health: String,
        health_lost: String,
        coins_label: String,
        coins: String,
    },
    Death(String),
    StoryEnd(String),
    Narrative(String),
    ChoiceMenu(String),
    /// Spacer emitted before the consequences of a choice.
    Blank,
    ChoiceResult(String),
    Error(String),
}
impl ViewItem {
    /// Build the status line for the current balances.
    ///
    /// Health is drawn as one full marker per point and one empty marker per missing
    /// point; coins are drawn as one marker per coin.
    pub fn status(ledger: &ResourceLedger, messages: &MessagesDef) -> ViewItem {
        let lost = ledger.max_health().saturating_sub(ledger.health());
        ViewItem::StatusLine {
            health_label: messages.health_label.clone(),
            health: repeat(&messages.health_full, ledger.health()),
            health_lost: repeat(&messages.health_empty, lost),
            coins_label: messages.coins_label.clone(),
            coins: repeat(&messages.coin, ledger.coins()),
        }
    }

    /// Plain text of the item, without styling or wrapping.
    pub fn text(&self) -> String {
        match self {
            ViewItem::Title(text)
            | ViewItem::Byline(text)
            | ViewItem::Intro(text)
            | ViewItem::Death(text)
            | ViewItem::StoryEnd(text)
            | ViewItem::Narrative(text)
            | ViewItem::ChoiceMenu(text)
            | ViewItem::ChoiceResult(text)
            | ViewItem::Error(text) => text.clone(),
            ViewItem::StatusLine {
                health_label,
                health,
                health_lost,
                coins_label,
                coins,
            } => format!("{health_label} {health}{health_lost} | {coins_label}: {coins}"),
            ViewItem::Blank => String::new(),
        }
    }

    /// Styled, wrapped text ready for the terminal.
    pub fn render(&self) -> String {
        match self {
            ViewItem::Title(title) => format!("{}\n", title.title_style()),
            ViewItem::Byline(author) => format!("{}\n", author.byline_style()),
            ViewItem::Intro(text) => fill(text, normal_block()).intro_style().to_string(),
            ViewItem::StatusLine {
                health_label,
                health,
                health_lost,
                coins_label,
                coins,
            } => format!(
                "{} {}{} | {}: {}",
                health_label.status_style(),
                health.health_style(),
                health_lost.health_lost_style(),
                coins_label.status_style(),
                coins.coin_style()
            ),
            ViewItem::Death(text) => text.death_style().to_string(),
            ViewItem::StoryEnd(text) => text.story_end_style().to_string(),
            ViewItem::Narrative(text) => fill(text, normal_block()).narrative_style().to_string(),
            ViewItem::ChoiceMenu(text) => fill(text, normal_block()).menu_style().to_string(),
            ViewItem::Blank => String::new(),
            ViewItem::ChoiceResult(text) => fill(text, normal_block()).result_style().to_string(),
            ViewItem::Error(text) => text.error_style().to_string(),
        }
    }
}

/// Items shown once before the first page: title, author credit, and introduction.
pub fn title_page(story: &Story) -> Vec<ViewItem> {
    let mut items = vec![ViewItem::Title(story.title.clone())];
    if !story.author.is_empty() {
        items.push(ViewItem::Byline(format!("by {}", story.author)));
    }
    if !story.intro.is_empty() {
        items.push(ViewItem::Intro(story.intro.clone()));
    }
    items
}

fn repeat(marker: &str, count: u32) -> String {
    marker.repeat(usize::try_from(count).unwrap_or(usize::MAX))
}

#[derive(Debug, Clone)]
enum Sink {
    Terminal,
    Record(Vec<ViewItem>),
}

/// View aggregates output pushed by the engine and displays (or records) it on flush.
#[derive(Debug, Clone)]
pub struct View {
    items: Vec<ViewItem>,
    sink: Sink,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a view that prints to the terminal.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            sink: Sink::Terminal,
        }
    }

    /// Create a view that keeps everything it is asked to display.
    pub fn recording() -> Self {
        Self {
            items: Vec::new(),
            sink: Sink::Record(Vec::new()),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Items pushed since the last flush.
    pub fn pending(&self) -> &[ViewItem] {
        &self.items
    }

    /// Everything flushed so far by a recording view (always empty for a terminal view).
    pub fn transcript(&self) -> &[ViewItem] {
        match &self.sink {
            Sink::Terminal => &[],
            Sink::Record(items) => items,
        }
    }

    /// Display all pending items in order and clear the buffer.
    pub fn flush(&mut self) {
        match &mut self.sink {
            Sink::Terminal => {
                for item in &self.items {
                    println!("{}", item.render());
                }
            },
            Sink::Record(transcript) => transcript.append(&mut self.items),
        }
        self.items.clear();
    }
}
