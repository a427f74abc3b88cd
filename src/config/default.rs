// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Example configuration written by `gmc init`.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# gmc configuration file

# Validation limits (exceeding them only produces warnings)
[rules]
max_title_length = 50
max_line_length = 72

# Formatting
[format]
wrap_width = 72

# Repository used when a tool call does not pass repo_path
[repository]
# path = "/path/to/repo"
"#
}
