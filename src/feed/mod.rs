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

//! Feed retrieval and rendering: URL resolution, fetch, extraction, selection and formatting.

pub mod extract;
pub mod fetcher;
pub mod format;
pub mod resolver;
pub mod select;
