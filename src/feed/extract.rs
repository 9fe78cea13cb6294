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

//! Typed record extraction from feed items.

use crate::common::types::{FeedItem, FeedRecord};
use tracing::debug;

/// Turn feed items into typed records, keeping feed order.
///
/// Items without a publication timestamp are skipped.
pub fn extract<R: FeedRecord>(items: Vec<FeedItem>) -> Vec<R> {
    let total = items.len();
    let records: Vec<R> = items
        .into_iter()
        .filter_map(|item| match item.published {
            Some(date) => Some(R::from_item(item, date)),
            None => {
                debug!("Skipping undated {} entry {:?}", R::KIND, item.title);
                None
            }
        })
        .collect();

    if records.len() < total {
        debug!("{} of {} {} entries had no date", total - records.len(), total, R::KIND);
    }
    records
}
