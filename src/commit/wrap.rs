// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Greedy word wrapping for commit bodies.

use textwrap::core::Fragment;
use textwrap::wrap_algorithms::wrap_first_fit;

/// Default body width.
pub const DEFAULT_WRAP_WIDTH: usize = 72;

/// A word measured in chars, followed by one space.
#[derive(Debug)]
struct Word<'a> {
    text: &'a str,
    width: usize,
}

impl Fragment for Word<'_> {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn whitespace_width(&self) -> f64 {
        1.0
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Wrap text to `width` columns.
///
/// Runs of whitespace collapse to one space. Words are never split: a word
/// longer than `width` sits alone on its line. Widths are counted in chars,
/// not display columns.
pub fn wrap(text: &str, width: usize) -> String {
    let words: Vec<Word<'_>> = text
        .split_whitespace()
        .map(|word| Word {
            text: word,
            width: word.chars().count(),
        })
        .collect();

    let line_widths = [width as f64];
    wrap_first_fit(&words, &line_widths)
        .into_iter()
        .map(|line| {
            line.iter()
                .map(|word| word.text)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap each blank-line separated paragraph independently.
pub fn wrap_paragraphs(text: &str, width: usize) -> String {
    text.split("\n\n")
        .map(|paragraph| wrap(paragraph, width))
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
