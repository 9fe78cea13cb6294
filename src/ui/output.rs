// ghfeed - Latest releases and commits of a GitHub repository from its Atom feeds
// Copyright (C) 2025 ghfeed contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Console messages for ghfeed.

use crate::common::error::GhFeedError;
use crate::common::types::FeedKind;
use console::style;

/// Console message styling
#[derive(Debug, Clone, Copy)]
pub struct Output {
    colors: bool,
}

impl Output {
    /// Create a new output formatter
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// Section header line for a feed kind, newline included
    pub fn section_header(&self, kind: FeedKind) -> String {
        if self.colors {
            format!("{}\n", style(kind.header()).bold().cyan())
        } else {
            format!("{}\n", kind.header())
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colors {
            eprintln!("{} {}", style("error:").red().bold(), message);
        } else {
            eprintln!("error: {}", message);
        }
    }

    /// Print an error with its recovery suggestion, if any
    pub fn report(&self, err: &GhFeedError) {
        self.error(&format!("[{}] {}", err.code(), err));
        if let Some(hint) = err.suggestion() {
            if self.colors {
                eprintln!("  {} {}", style("hint:").dim(), hint);
            } else {
                eprintln!("  hint: {}", hint);
            }
        }
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        if self.colors {
            eprintln!("{} {}", style("warning:").yellow().bold(), message);
        } else {
            eprintln!("warning: {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colors {
            eprintln!("{} {}", style("::").bold().cyan(), message);
        } else {
            eprintln!(":: {}", message);
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_section_headers() {
        let output = Output::new(false);
        assert_eq!(output.section_header(FeedKind::Releases), "=== release info ===\n");
        assert_eq!(output.section_header(FeedKind::Commits), "=== commit info ===\n");
    }

    #[test]
    fn test_messages_do_not_panic() {
        let output = Output::new(false);
        output.info("fetching");
        output.warn("insecure");
        output.report(&GhFeedError::Config("bad".to_string()));
    }
}
