//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Widest line the view will wrap to, even on very wide terminals.
const MAX_TEXT_WIDTH: usize = 100;

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn byline_style(&self) -> ColoredString;
    fn intro_style(&self) -> ColoredString;
    fn status_style(&self) -> ColoredString;
    fn health_style(&self) -> ColoredString;
    fn health_lost_style(&self) -> ColoredString;
    fn coin_style(&self) -> ColoredString;
    fn narrative_style(&self) -> ColoredString;
    fn menu_style(&self) -> ColoredString;
    fn result_style(&self) -> ColoredString;
    fn death_style(&self) -> ColoredString;
    fn story_end_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn byline_style(&self) -> ColoredString {
        self.italic().dimmed()
    }
    fn intro_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn status_style(&self) -> ColoredString {
        self.truecolor(20, 220, 100)
    }
    fn health_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn health_lost_style(&self) -> ColoredString {
        self.truecolor(75, 80, 75)
    }
    fn coin_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn narrative_style(&self) -> ColoredString {
        self.truecolor(102, 208, 250)
    }
    fn menu_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
    fn result_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn death_style(&self) -> ColoredString {
        self.bold().truecolor(230, 30, 30)
    }
    fn story_end_style(&self) -> ColoredString {
        self.bold().truecolor(220, 40, 220)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(250, 200, 100).on_truecolor(50, 51, 50)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn byline_style(&self) -> ColoredString {
        self.as_str().byline_style()
    }
    fn intro_style(&self) -> ColoredString {
        self.as_str().intro_style()
    }
    fn status_style(&self) -> ColoredString {
        self.as_str().status_style()
    }
    fn health_style(&self) -> ColoredString {
        self.as_str().health_style()
    }
    fn health_lost_style(&self) -> ColoredString {
        self.as_str().health_lost_style()
    }
    fn coin_style(&self) -> ColoredString {
        self.as_str().coin_style()
    }
    fn narrative_style(&self) -> ColoredString {
        self.as_str().narrative_style()
    }
    fn menu_style(&self) -> ColoredString {
        self.as_str().menu_style()
    }
    fn result_style(&self) -> ColoredString {
        self.as_str().result_style()
    }
    fn death_style(&self) -> ColoredString {
        self.as_str().death_style()
    }
    fn story_end_style(&self) -> ColoredString {
        self.as_str().story_end_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}

/// Wrapping options for a normal block of story text at the current terminal width.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(MAX_TEXT_WIDTH))
}
