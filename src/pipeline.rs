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

//! Per-kind fetch, extract, select and write pipeline.
//!
//! Releases and commits run one after the other. A failure in one kind is
//! reported and does not stop the other.

use crate::common::error::{Result, WriteError};
use crate::common::types::{Commit, FeedKind, FeedRecord, Release};
use crate::feed::resolver::FeedTargets;
use crate::feed::{extract, fetcher, select};
use crate::network::HttpClient;
use crate::ui::{progress, Output, OutputSink};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Settings shared by every kind of a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory receiving the output files, empty for the current directory
    pub output_dir: PathBuf,
    /// Entries written per kind
    pub count: i64,
    /// Show a spinner while fetching
    pub progress: bool,
    pub output: Output,
}

/// Result of one kind's pipeline
#[derive(Debug)]
pub struct KindReport {
    pub kind: FeedKind,
    pub url: String,
    /// Number of blocks written, or the error that stopped the kind
    pub outcome: Result<usize>,
}

/// Results of a whole run
#[derive(Debug, Default)]
pub struct RunReport {
    pub kinds: Vec<KindReport>,
}

impl RunReport {
    /// True when every requested kind completed
    pub fn is_success(&self) -> bool {
        self.kinds.iter().all(|k| k.outcome.is_ok())
    }

    /// Number of kinds that failed
    pub fn failures(&self) -> usize {
        self.kinds.iter().filter(|k| k.outcome.is_err()).count()
    }
}

pub struct Pipeline {
    client: HttpClient,
    options: RunOptions,
}

impl Pipeline {
    pub fn new(client: HttpClient, options: RunOptions) -> Self {
        Self { client, options }
    }

    /// Run every planned kind in order, releases first
    pub async fn run<W: Write>(&self, targets: &FeedTargets, console: &mut W) -> RunReport {
        let mut report = RunReport::default();

        if let Some(url) = &targets.releases {
            let outcome = self.run_kind::<Release, W>(url, console).await;
            report.kinds.push(self.finish(FeedKind::Releases, url, outcome));
        }

        if let Some(url) = &targets.commits {
            let outcome = self.run_kind::<Commit, W>(url, console).await;
            report.kinds.push(self.finish(FeedKind::Commits, url, outcome));
        }

        report
    }

    /// Fetch `url` and write the newest records of type `R`
    pub async fn run_kind<R: FeedRecord, W: Write>(&self, url: &str, console: &mut W) -> Result<usize> {
        let pb = progress::spinner(&format!("fetching {}...", url), self.options.progress);
        let items = fetcher::fetch(&self.client, url).await;
        pb.finish_and_clear();
        let items = items?;

        let records: Vec<R> = extract::extract(items);
        let available = records.len();
        let selected = select::select(records, self.options.count);
        debug!("Selected {} of {} {} entries", selected.len(), available, R::KIND);

        console
            .write_all(self.options.output.section_header(R::KIND).as_bytes())
            .map_err(WriteError::Console)?;

        let mut sink = OutputSink::create(&self.options.output_dir, R::KIND, &mut *console)?;
        let written = match sink.write_blocks(selected.iter().map(|record| record.render())) {
            Ok(written) => written,
            Err(e) => {
                debug!("{} of {} {} entries written before failure", sink.written(), selected.len(), R::KIND);
                return Err(e.into());
            }
        };
        info!("Wrote {} {} entries to {:?}", written, R::KIND, sink.path());
        Ok(written)
    }

    fn finish(&self, kind: FeedKind, url: &str, outcome: Result<usize>) -> KindReport {
        if let Err(ref e) = outcome {
            self.options.output.report(e);
        }
        KindReport {
            kind,
            url: url.to_string(),
            outcome,
        }
    }
}
