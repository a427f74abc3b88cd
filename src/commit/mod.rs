// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message codec: formatting, parsing, validation and wrapping.

mod message;
mod validate;
mod wrap;

pub use message::{format, parse, CommitFields, ParsedMessage, BREAKING_MARKER};
pub use validate::{validate, validate_with, ValidationOutcome};
pub use wrap::{wrap, wrap_paragraphs, DEFAULT_WRAP_WIDTH};
