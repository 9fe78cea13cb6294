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

//! Feed download and parsing.

use crate::common::error::FetchError;
use crate::common::types::FeedItem;
use crate::network::HttpClient;
use feed_rs::model::{Entry, Link};
use feed_rs::parser;
use tracing::debug;

/// Download `url` and parse it into feed items, in document order
pub async fn fetch(client: &HttpClient, url: &str) -> Result<Vec<FeedItem>, FetchError> {
    let body = client.get_bytes(url).await?;
    parse(url, &body)
}

/// Parse an Atom, RSS or JSON Feed document into feed items
pub fn parse(url: &str, body: &[u8]) -> Result<Vec<FeedItem>, FetchError> {
    let feed = parser::parse(body).map_err(|e| FetchError::Parse {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    debug!("{} contains {} entries", url, feed.entries.len());
    Ok(feed.entries.into_iter().map(to_item).collect())
}

fn to_item(entry: Entry) -> FeedItem {
    FeedItem {
        title: entry.title.map(|t| t.content).unwrap_or_default(),
        link: primary_link(&entry.links).unwrap_or_default(),
        content: entry.content.and_then(|c| c.body).unwrap_or_default(),
        // GitHub feeds only carry <updated>
        published: entry.published.or(entry.updated),
    }
}

fn primary_link(links: &[Link]) -> Option<String> {
    links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| links.first())
        .map(|l| l.href.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const RELEASES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xml:lang="en-US">
  <id>tag:github.com,2008:https://github.com/org/repo/releases</id>
  <title>Release notes from repo</title>
  <updated>2024-03-02T10:00:00Z</updated>
  <entry>
    <id>tag:github.com,2008:Repository/1/v2.0.0</id>
    <updated>2024-03-02T10:00:00+08:00</updated>
    <link rel="alternate" type="text/html" href="https://github.com/org/repo/releases/tag/v2.0.0"/>
    <title>v2.0.0</title>
    <content type="html">&lt;p&gt;Big release&lt;/p&gt;</content>
  </entry>
  <entry>
    <id>tag:github.com,2008:Repository/1/v1.0.0</id>
    <published>2024-01-01T20:00:00Z</published>
    <updated>2024-02-01T00:00:00Z</updated>
    <link rel="alternate" type="text/html" href="https://github.com/org/repo/releases/tag/v1.0.0"/>
    <title>v1.0.0</title>
  </entry>
  <entry>
    <id>tag:github.com,2008:Repository/1/v0.1.0</id>
    <link href="https://github.com/org/repo/releases/tag/v0.1.0"/>
    <title>v0.1.0</title>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_atom_preserves_order() {
        let items = parse("https://github.com/org/repo/releases.atom", RELEASES.as_bytes()).unwrap();
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["v2.0.0", "v1.0.0", "v0.1.0"]);
        assert_eq!(items[0].link, "https://github.com/org/repo/releases/tag/v2.0.0");
        assert_eq!(items[0].content, "<p>Big release</p>");
    }

    #[test]
    fn test_parse_timestamps() {
        let items = parse("u", RELEASES.as_bytes()).unwrap();
        // updated stands in for a missing published
        assert_eq!(items[0].published, Some(Utc.with_ymd_and_hms(2024, 3, 2, 2, 0, 0).unwrap()));
        // published wins over updated
        assert_eq!(items[1].published, Some(Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap()));
        assert_eq!(items[1].content, "");
        assert_eq!(items[2].published, None);
    }

    #[test]
    fn test_parse_rss() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>t</title><link>https://h</link><description>d</description>
  <item><title>one</title><link>https://h/1</link><pubDate>Mon, 01 Jan 2024 20:00:00 GMT</pubDate></item>
</channel></rss>"#;
        let items = parse("u", rss.as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].link, "https://h/1");
        assert!(items[0].published.is_some());
    }

    #[test]
    fn test_parse_garbage_is_fetch_error() {
        let err = parse("https://example.com/x", b"<html><body>Not found</body></html>").unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }

    #[test]
    fn test_link_prefers_alternate() {
        let atom = r#"<?xml version="1.0"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <id>x</id><title>t</title><updated>2024-01-01T00:00:00Z</updated>
  <entry>
    <id>1</id><title>one</title><updated>2024-01-01T00:00:00Z</updated>
    <link rel="enclosure" href="https://h/file.tar.gz"/>
    <link rel="alternate" href="https://h/page"/>
  </entry>
  <entry>
    <id>2</id><title>two</title><updated>2024-01-01T00:00:00Z</updated>
    <link rel="enclosure" href="https://h/only.tar.gz"/>
  </entry>
</feed>"#;
        let items = parse("u", atom.as_bytes()).unwrap();
        assert_eq!(items[0].link, "https://h/page");
        assert_eq!(items[1].link, "https://h/only.tar.gz");
    }
}
