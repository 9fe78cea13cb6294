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

//! Repository URL to feed URL resolution.

use crate::common::types::FeedKind;
use tracing::{debug, warn};

/// Resolve a repository URL into the feed URL for `kind`.
///
/// A URL that already ends in `/releases.atom` or `/commits.atom` is returned
/// as-is, even when that suffix belongs to the other kind.
pub fn resolve(base: &str, kind: FeedKind) -> String {
    if let Some(existing) = FeedKind::from_url_suffix(base) {
        if existing != kind {
            warn!(
                "{} already points at the {} feed; requested {} ignored for resolution",
                base, existing, kind
            );
        }
        return base.to_string();
    }

    let trimmed = base.strip_suffix('/').unwrap_or(base);
    let url = format!("{}{}", trimmed, kind.suffix());
    debug!("Resolved {} feed URL: {}", kind, url);
    url
}

/// Derive the commits feed URL from a releases feed URL by replacing the
/// first `releases.atom`. Unchanged when there is nothing to replace.
pub fn derive_commits_url(releases_url: &str) -> String {
    releases_url.replacen("releases.atom", "commits.atom", 1)
}

/// Feed URLs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedTargets {
    pub releases: Option<String>,
    pub commits: Option<String>,
}

/// Plan the feed URLs of a run.
///
/// The primary URL is resolved for releases whenever releases are requested,
/// and the commits URL is always derived from it textually.
pub fn plan(base: &str, releases: bool, commits: bool) -> FeedTargets {
    let primary_kind = if releases { FeedKind::Releases } else { FeedKind::Commits };
    let primary = resolve(base, primary_kind);

    FeedTargets {
        commits: commits.then(|| derive_commits_url(&primary)),
        releases: releases.then_some(primary),
    }
}
