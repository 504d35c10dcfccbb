use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Highest number of choices a page can show; selections are the letters `a` through `z`.
pub const MAX_CHOICES_PER_PAGE: usize = 26;

/// A problem found in a `StoryDef` before play starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two pages share an id.
    DuplicatePage { id: String },
    /// A start page or choice target names a page that does not exist.
    MissingPage { id: String, context: String },
    /// A choice requires a tag that no choice in the story ever completes, so it can never be offered.
    UncompletableTag { tag: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicatePage { id } => write!(f, "page '{id}' is defined more than once"),
            ValidationError::MissingPage { id, context } => write!(f, "missing page '{id}' ({context})"),
            ValidationError::UncompletableTag { tag, context } => {
                write!(f, "{context} requires tag '{tag}', which no choice completes")
            },
            ValidationError::InvalidValue { context } => write!(f, "invalid story ({context})"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `StoryDef`.
///
/// Returns every problem found rather than stopping at the first one.
///
/// ```
/// use gamebook_data::{ChoiceDef, GameDef, PageDef, StoryDef, validate_story};
///
/// let story = StoryDef {
///     game: GameDef {
///         title: "Demo".into(),
///         start_page: "start".into(),
///         ..GameDef::default()
///     },
///     pages: vec![
///         PageDef {
///             id: "start".into(),
///             text: "A crossroads.".into(),
///             choices: vec![ChoiceDef {
///                 label: "Walk on.".into(),
///                 goto: "end".into(),
///                 ..ChoiceDef::default()
///             }],
///             random: false,
///         },
///         PageDef {
///             id: "end".into(),
///             text: "Home at last.".into(),
///             choices: Vec::new(),
///             random: false,
///         },
///     ],
/// };
/// assert!(validate_story(&story).is_empty());
/// ```
pub fn validate_story(story: &StoryDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let pages = page_ids(story, &mut errors);

    if story.game.start_page.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game start page missing".to_string(),
        });
    } else {
        check_target(&story.game.start_page, &pages, || "game start page".to_string(), &mut errors);
    }

    if story.game.max_health == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "game max health must be at least 1".to_string(),
        });
    }

    // tags that some choice can complete; anything required but never completed is unreachable
    let completable: HashSet<&str> = story
        .pages
        .iter()
        .flat_map(|page| &page.choices)
        .flat_map(|choice| &choice.completes)
        .map(String::as_str)
        .collect();

    for page in &story.pages {
        if page.choices.len() > MAX_CHOICES_PER_PAGE {
            errors.push(ValidationError::InvalidValue {
                context: format!(
                    "page '{}' has {} choices (at most {MAX_CHOICES_PER_PAGE} can be offered)",
                    page.id,
                    page.choices.len()
                ),
            });
        }
        for (idx, choice) in page.choices.iter().enumerate() {
            let context = format!("page '{}' choice #{}", page.id, idx + 1);
            check_target(&choice.goto, &pages, || context.clone(), &mut errors);
            validate_tags(choice, &context, &mut errors);
            for tag in &choice.requires {
                if !completable.contains(tag.as_str()) {
                    errors.push(ValidationError::UncompletableTag {
                        tag: tag.clone(),
                        context: context.clone(),
                    });
                }
            }
        }
    }

    errors
}

fn validate_tags(choice: &ChoiceDef, context: &str, errors: &mut Vec<ValidationError>) {
    let all_tags = choice.requires.iter().chain(&choice.forbids).chain(&choice.completes);
    for tag in all_tags {
        if tag.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} has a blank tag"),
            });
        }
    }
}

/// Collect page ids, reporting each id seen a second time.
fn page_ids<'a>(story: &'a StoryDef, errors: &mut Vec<ValidationError>) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for page in &story.pages {
        if !seen.insert(page.id.as_str()) {
            errors.push(ValidationError::DuplicatePage { id: page.id.clone() });
        }
    }
    seen
}

fn check_target(
    target: &str,
    pages: &HashSet<&str>,
    context: impl FnOnce() -> String,
    errors: &mut Vec<ValidationError>,
) {
    if !pages.contains(target) {
        errors.push(ValidationError::MissingPage {
            id: target.to_string(),
            context: context(),
        });
    }
}
