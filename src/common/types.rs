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

//! Core domain types for ghfeed.

use chrono::{DateTime, Utc};
use std::fmt;

/// Which of the two repository feeds is being processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    Releases,
    Commits,
}

impl FeedKind {
    /// Path suffix appended to a repository URL
    pub fn suffix(&self) -> &'static str {
        match self {
            FeedKind::Releases => "/releases.atom",
            FeedKind::Commits => "/commits.atom",
        }
    }

    /// Name of the output file written for this kind.
    ///
    /// Mirrors the feed file name, but the content is plain text.
    pub fn file_name(&self) -> &'static str {
        match self {
            FeedKind::Releases => "releases.atom",
            FeedKind::Commits => "commits.atom",
        }
    }

    /// Console section header printed before the kind's blocks
    pub fn header(&self) -> &'static str {
        match self {
            FeedKind::Releases => "=== release info ===",
            FeedKind::Commits => "=== commit info ===",
        }
    }

    /// Kind whose suffix the URL already ends with, if any
    pub fn from_url_suffix(url: &str) -> Option<Self> {
        [FeedKind::Releases, FeedKind::Commits]
            .into_iter()
            .find(|kind| url.ends_with(kind.suffix()))
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::Releases => write!(f, "releases"),
            FeedKind::Commits => write!(f, "commits"),
        }
    }
}

/// One entry of a parsed feed, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// Entry body, empty when the feed has none
    pub content: String,
    pub published: Option<DateTime<Utc>>,
}

/// A published repository release
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub tag: String,
    /// Release notes, possibly HTML
    pub content: String,
    pub url: String,
    pub date: DateTime<Utc>,
}

/// A commit on the repository's default branch
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub title: String,
    pub url: String,
    pub date: DateTime<Utc>,
}

/// A typed record that can be built from a dated feed item and rendered as text
pub trait FeedRecord: Sized {
    /// Feed this record type comes from
    const KIND: FeedKind;

    /// Build the record from an item whose timestamp is already known
    fn from_item(item: FeedItem, date: DateTime<Utc>) -> Self;

    /// Human-readable block for console and file output
    fn render(&self) -> String;
}

impl FeedRecord for Release {
    const KIND: FeedKind = FeedKind::Releases;

    fn from_item(item: FeedItem, date: DateTime<Utc>) -> Self {
        Self {
            tag: item.title,
            content: item.content,
            url: item.link,
            date,
        }
    }

    fn render(&self) -> String {
        crate::feed::format::render_release(self)
    }
}

impl FeedRecord for Commit {
    const KIND: FeedKind = FeedKind::Commits;

    fn from_item(item: FeedItem, date: DateTime<Utc>) -> Self {
        Self {
            title: item.title,
            url: item.link,
            date,
        }
    }

    fn render(&self) -> String {
        crate::feed::format::render_commit(self)
    }
}
