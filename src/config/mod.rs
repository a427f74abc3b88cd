// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for gmc.
//!
//! Handles locating, parsing and checking gmc.toml.

pub mod default;
mod loader;
mod schema;

pub use loader::{find_config_file, find_config_file_from, load_config, load_config_from, parse_config};
pub use schema::*;
