//! Choice Evaluator
//!
//! Decides which of a page's choices are currently on offer, labels them with
//! selection letters, and turns a typed letter back into a choice index.

use std::fmt::Write;

use gamebook_data::MessagesDef;
use thiserror::Error;

use crate::progress::ProgressSet;
use crate::story::{Choice, Page};

const FIRST_CHOICE: char = 'a';
const LETTER_COUNT: usize = 26;

/// Reasons a typed selection could not be mapped to an offered choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("nothing was entered")]
    Empty,
    #[error("expected a single letter, got \"{0}\"")]
    TooLong(String),
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("'{letter}' is not among the {count} choices offered")]
    OutOfRange { letter: char, count: usize },
}

/// Returns `true` if every required tag is complete and no forbidden tag is.
pub fn is_active(choice: &Choice, progress: &ProgressSet) -> bool {
    progress.has_all(&choice.required) && progress.has_none(&choice.forbidden)
}

/// The choices of `page` that pass their gating against `progress`, in authored order.
pub fn active_choices<'a>(page: &'a Page, progress: &ProgressSet) -> Vec<&'a Choice> {
    page.choices.iter().filter(|choice| is_active(choice, progress)).collect()
}

/// Letter used to select the choice at `index` (`a` for the first).
pub fn selection_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| usize::from(*i) < LETTER_COUNT)
        .map_or('?', |i| char::from(FIRST_CHOICE as u8 + i))
}

/// Render one menu entry, e.g. `c) Brothel. [Cost: 1]`.
pub fn format_choice(index: usize, choice: &Choice, messages: &MessagesDef) -> String {
    let mut entry = format!("{}) {}", selection_letter(index), choice.label);
    if choice.entry_cost > 0 {
        let _ = write!(entry, " [{}: {}]", messages.price, choice.entry_cost);
    }
    entry
}

/// Render the whole menu of active choices on one line.
pub fn format_menu(choices: &[&Choice], messages: &MessagesDef) -> String {
    choices
        .iter()
        .enumerate()
        .map(|(idx, choice)| format_choice(idx, choice, messages))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Map typed input to an index into the `count` offered choices.
///
/// Surrounding whitespace is ignored and letters match case-insensitively.
///
/// # Errors
/// Returns a [`SelectionError`] for empty input, more than one character, a non-letter,
/// or a letter past the end of the menu.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return Err(SelectionError::Empty);
    };
    if chars.next().is_some() {
        return Err(SelectionError::TooLong(trimmed.to_string()));
    }
    let letter = first.to_ascii_lowercase();
    if !letter.is_ascii_lowercase() {
        return Err(SelectionError::NotALetter(first));
    }
    let index = (letter as usize) - (FIRST_CHOICE as usize);
    if index >= count {
        return Err(SelectionError::OutOfRange { letter, count });
    }
    Ok(index)
}
