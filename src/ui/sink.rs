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

//! Dual console + file output for rendered records.

use crate::common::error::{FileError, WriteError};
use crate::common::types::FeedKind;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes every block to the console and to one output file.
///
/// The file is truncated when the sink is opened and closed when the sink is
/// dropped, on success and on error alike.
pub struct OutputSink<W: Write> {
    console: W,
    file: File,
    path: PathBuf,
    written: usize,
}

impl<W: Write> OutputSink<W> {
    /// Open the output file for `kind` inside `dir` (empty for the current directory)
    pub fn create(dir: &Path, kind: FeedKind, console: W) -> Result<Self, FileError> {
        Self::open(dir.join(kind.file_name()), console)
    }

    /// Create or truncate `path`
    pub fn open(path: PathBuf, console: W) -> Result<Self, FileError> {
        let file = match File::create(&path) {
            Ok(file) => file,
            Err(source) => return Err(FileError { path, source }),
        };
        debug!("Truncated {:?}, previous content discarded", path);

        Ok(Self {
            console,
            file,
            path,
            written: 0,
        })
    }

    /// Write one block to the console, then to the file
    pub fn write_block(&mut self, block: &str) -> Result<(), WriteError> {
        self.console
            .write_all(block.as_bytes())
            .map_err(WriteError::Console)?;
        self.file
            .write_all(block.as_bytes())
            .map_err(|source| WriteError::File { path: self.path.clone(), source })?;
        self.written += 1;
        Ok(())
    }

    /// Write blocks in order, stopping at the first failure
    pub fn write_blocks<I, S>(&mut self, blocks: I) -> Result<usize, WriteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for block in blocks {
            self.write_block(block.as_ref())?;
        }
        self.console.flush().map_err(WriteError::Console)?;
        Ok(self.written)
    }

    /// Path of the output file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of blocks fully written so far
    pub fn written(&self) -> usize {
        self.written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    struct BrokenConsole;

    impl Write for BrokenConsole {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Accepts the first write, fails every later one
    struct FailsAfterFirst {
        writes: usize,
    }

    impl Write for FailsAfterFirst {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            if self.writes > 1 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_console_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = Vec::new();

        let mut sink = OutputSink::create(dir.path(), FeedKind::Releases, &mut console).unwrap();
        let written = sink.write_blocks(["a\n\n", "b\n\n"]).unwrap();
        let path = sink.path().to_path_buf();
        drop(sink);

        assert_eq!(written, 2);
        assert_eq!(path, dir.path().join("releases.atom"));
        assert_eq!(String::from_utf8(console).unwrap(), "a\n\nb\n\n");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a\n\nb\n\n");
    }

    #[test]
    fn test_reopen_truncates() {
        let dir = tempfile::tempdir().unwrap();

        let mut sink = OutputSink::create(dir.path(), FeedKind::Commits, io::sink()).unwrap();
        sink.write_blocks(["one\n\n", "two\n\n", "three\n\n"]).unwrap();
        drop(sink);

        let mut sink = OutputSink::create(dir.path(), FeedKind::Commits, io::sink()).unwrap();
        sink.write_blocks(["four\n\n"]).unwrap();
        drop(sink);

        let content = std::fs::read_to_string(dir.path().join("commits.atom")).unwrap();
        assert_eq!(content, "four\n\n");
    }

    #[test]
    fn test_truncates_even_without_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("releases.atom");
        std::fs::write(&path, "stale").unwrap();

        let sink = OutputSink::create(dir.path(), FeedKind::Releases, io::sink()).unwrap();
        drop(sink);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_missing_directory_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = match OutputSink::create(&missing, FeedKind::Releases, io::sink()) {
            Ok(_) => panic!("expected FileError"),
            Err(e) => e,
        };
        assert_eq!(err.path, missing.join("releases.atom"));
    }

    #[test]
    fn test_console_failure_stops_writing() {
        let dir = tempfile::tempdir().unwrap();

        let mut sink = OutputSink::create(dir.path(), FeedKind::Releases, BrokenConsole).unwrap();
        let err = sink.write_blocks(["a\n\n", "b\n\n"]).unwrap_err();
        assert!(matches!(err, WriteError::Console(_)));
        assert_eq!(sink.written(), 0);
        drop(sink);

        assert_eq!(std::fs::read_to_string(dir.path().join("releases.atom")).unwrap(), "");
    }

    #[test]
    fn test_blocks_before_failure_stay_on_disk() {
        let dir = tempfile::tempdir().unwrap();

        let console = FailsAfterFirst { writes: 0 };
        let mut sink = OutputSink::create(dir.path(), FeedKind::Commits, console).unwrap();
        let err = sink.write_blocks(["a\n\n", "b\n\n", "c\n\n"]).unwrap_err();
        assert!(matches!(err, WriteError::Console(_)));
        assert_eq!(sink.written(), 1);
        drop(sink);

        assert_eq!(std::fs::read_to_string(dir.path().join("commits.atom")).unwrap(), "a\n\n");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_file_failure_stops_writing() {
        let mut console = Vec::new();

        // Every write to /dev/full fails with ENOSPC
        let Ok(mut sink) = OutputSink::open(PathBuf::from("/dev/full"), &mut console) else {
            return;
        };
        let err = sink.write_blocks(["a\n\n", "b\n\n"]).unwrap_err();
        assert!(matches!(err, WriteError::File { .. }));
        assert_eq!(sink.written(), 0);
        drop(sink);

        // First block reached the console before the file write failed, second never did
        assert_eq!(String::from_utf8(console).unwrap(), "a\n\n");
    }
}
