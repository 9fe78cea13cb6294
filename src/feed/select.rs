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

//! Bounded selection of the newest records.

/// Keep the first `count` records. A count of zero or less selects nothing.
pub fn select<T>(mut records: Vec<T>, count: i64) -> Vec<T> {
    let keep = match usize::try_from(count) {
        Ok(n) => n.min(records.len()),
        Err(_) if count > 0 => records.len(),
        Err(_) => 0,
    };
    records.truncate(keep);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_prefix() {
        assert_eq!(select(vec![1, 2, 3], 2), vec![1, 2]);
        assert_eq!(select(vec![1, 2, 3], 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_select_more_than_available() {
        assert_eq!(select(vec![1, 2, 3], 10), vec![1, 2, 3]);
        assert_eq!(select(vec![1, 2, 3], i64::MAX), vec![1, 2, 3]);
        assert!(select(Vec::<i32>::new(), 5).is_empty());
    }

    #[test]
    fn test_select_non_positive() {
        assert!(select(vec![1, 2, 3], 0).is_empty());
        assert!(select(vec![1, 2, 3], -1).is_empty());
        assert!(select(vec![1, 2, 3], i64::MIN).is_empty());
    }

    #[test]
    fn test_select_length_property() {
        let records: Vec<u32> = (0..7).collect();
        for n in -3i64..12 {
            let selected = select(records.clone(), n);
            let expected = if n > 0 { (n as usize).min(records.len()) } else { 0 };
            assert_eq!(selected.len(), expected);
            assert_eq!(selected[..], records[..expected]);
        }
    }
}
