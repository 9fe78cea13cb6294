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

//! Text rendering of releases and commits.
//!
//! Every timestamp is shown at a fixed UTC+8 offset, independent of the
//! local timezone and of the offset the feed reported.

use crate::common::types::{Commit, Release};
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Offset applied to every displayed timestamp, in seconds east of UTC
pub const DISPLAY_OFFSET_SECS: i32 = 8 * 3600;

/// Display layout for timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Format a timestamp at the display offset
pub fn format_timestamp(date: &DateTime<Utc>) -> String {
    date.with_timezone(&display_offset())
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

pub fn render_release(release: &Release) -> String {
    format!(
        "Release: {}\nPublished: {}\nNotes: {}\nLink: {}\n\n",
        release.tag,
        format_timestamp(&release.date),
        release.content,
        release.url
    )
}

pub fn render_commit(commit: &Commit) -> String {
    format!(
        "Commit: {}\nCommitted: {}\nLink: {}\n\n",
        commit.title,
        format_timestamp(&commit.date),
        commit.url
    )
}
