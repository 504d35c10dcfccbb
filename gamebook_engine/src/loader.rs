//! Loader utilities for building a [`Story`] from serialized data.
//!
//! Stories are authored as RON (the default) or TOML, chosen by file extension,
//! validated as a whole, and then converted into the runtime page graph.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use gamebook_data::{ChoiceDef, PageDef, StoryDef, validate_story};
use log::info;

use crate::story::{Choice, Page, Story};

/// Load, validate, and build the story at `path`.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_story(path: &Path) -> Result<Story> {
    let def = load_story_def(path).context("while loading story definition from file")?;
    validate_story_def(&def)?;
    let story = build_story_from_def(&def);
    info!(
        "story \"{}\" loaded from '{}': {} pages, start at '{}'",
        story.title,
        path.display(),
        story.pages.len(),
        story.start_page
    );
    Ok(story)
}

/// Read a `StoryDef` from a RON or TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_story_def(path: &Path) -> Result<StoryDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading story from '{}'", path.display()))?;
    let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(&text).with_context(|| format!("parsing story TOML from '{}'", path.display()))
    } else {
        ron::from_str(&text).with_context(|| format!("parsing story RON from '{}'", path.display()))
    }
}

/// Validate the `StoryDef` and return a single aggregated error.
///
/// # Errors
/// Returns every validation problem found, one per line.
pub fn validate_story_def(def: &StoryDef) -> Result<()> {
    let errors = validate_story(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("story validation failed:\n{details}");
}

/// Convert a `StoryDef` into the runtime page graph.
pub fn build_story_from_def(def: &StoryDef) -> Story {
    let mut story = Story {
        title: def.game.title.clone(),
        author: def.game.author.clone(),
        intro: def.game.intro.clone(),
        start_page: def.game.start_page.clone(),
        starting_coins: def.game.starting_coins,
        max_health: def.game.max_health,
        messages: def.game.messages.clone(),
        ..Story::default()
    };
    for page_def in &def.pages {
        story.insert_page(page_from_def(page_def));
    }
    story
}

fn page_from_def(def: &PageDef) -> Page {
    Page {
        id: def.id.clone(),
        text: def.text.clone(),
        choices: def.choices.iter().map(choice_from_def).collect(),
        random: def.random,
    }
}

fn choice_from_def(def: &ChoiceDef) -> Choice {
    Choice {
        label: def.label.clone(),
        target: def.goto.clone(),
        result_text: Some(def.result_text.clone()).filter(|text| !text.is_empty()),
        entry_cost: def.entry_cost,
        health_delta: def.health_delta,
        coins_delta: def.coins_delta,
        required: def.requires.iter().cloned().collect(),
        forbidden: def.forbids.iter().cloned().collect(),
        completes: def.completes.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const RON_STORY: &str = r#"
StoryDef(
    game: GameDef(
        title: "Tiny",
        start_page: "start",
        starting_coins: 2,
    ),
    pages: [
        PageDef(
            id: "start",
            text: "A fork in the road.",
            choices: [
                ChoiceDef(label: "Left.", goto: "end", entry_cost: 1, completes: ["went left"]),
                ChoiceDef(label: "Right.", goto: "end", result_text: "You go right."),
            ],
        ),
        PageDef(id: "end", text: "Home."),
    ],
)
"#;

    const TOML_STORY: &str = r#"
[game]
title = "Tiny"
start_page = "start"
max_health = 3

[game.messages]
death = "Zemřel jsi!"

[[pages]]
id = "start"
text = "A fork in the road."
random = true

[[pages.choices]]
goto = "end"
health_delta = -1

[[pages.choices]]
goto = "end"

[[pages]]
id = "end"
text = "Home."
"#;

    fn write_story(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_ron_story() {
        let file = write_story(".ron", RON_STORY);
        let story = load_story(file.path()).unwrap();

        assert_eq!(story.title, "Tiny");
        assert_eq!(story.starting_coins, 2);
        assert_eq!(story.max_health, 10);
        assert_eq!(story.pages.len(), 2);

        let start = story.page("start").unwrap();
        assert_eq!(start.choices[0].entry_cost, 1);
        assert!(start.choices[0].completes.contains("went left"));
        assert_eq!(start.choices[0].result_text, None);
        assert_eq!(start.choices[1].result_text.as_deref(), Some("You go right."));
        assert!(story.page("end").unwrap().is_terminal());
    }

    #[test]
    fn loads_toml_story_with_message_overrides() {
        let file = write_story(".toml", TOML_STORY);
        let story = load_story(file.path()).unwrap();

        assert_eq!(story.max_health, 3);
        assert!(story.page("start").unwrap().random);
        assert_eq!(story.messages.death, "Zemřel jsi!");
        assert_eq!(story.messages.prompt, "Your choice? ");
    }

    #[test]
    fn invalid_story_reports_every_problem() {
        let broken = RON_STORY.replace("goto: \"end\", entry_cost", "goto: \"nowhere\", entry_cost");
        let broken = broken.replace("start_page: \"start\"", "start_page: \"prologue\"");
        let file = write_story(".ron", &broken);

        let err = load_story(file.path()).unwrap_err().to_string();
        assert!(err.contains("story validation failed"));
        assert!(err.contains("missing page 'nowhere'"));
        assert!(err.contains("missing page 'prologue'"));
    }

    #[test]
    fn unreadable_story_has_context() {
        let err = load_story(Path::new("/definitely/not/here.ron")).unwrap_err();
        assert!(format!("{err:#}").contains("reading story from"));
    }
}
