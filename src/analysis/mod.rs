// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Staged change analysis.
//!
//! Classifies a change-set into a suggested commit type.

mod classify;

pub use classify::{classify, ChangeStats, Confidence, Suggestion};
