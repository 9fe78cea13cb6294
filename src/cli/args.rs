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

//! CLI argument definitions for ghfeed.

use crate::common::config::Config;
use clap::Parser;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "ghfeed")]
#[command(author = "ghfeed Team")]
#[command(version = VERSION)]
#[command(about = "Show and save the latest releases and commits of a GitHub repository")]
#[command(long_about = "ghfeed reads a repository's releases.atom and commits.atom feeds,\n\
    prints the newest entries and writes them to releases.atom / commits.atom\n\
    in the output directory. Existing output files are overwritten.")]
pub struct Cli {
    /// Repository URL, e.g. https://github.com/owner/repo (a feed URL is used as-is)
    #[arg(short = 'u', long, value_name = "URL", required_unless_present = "print_config")]
    pub url: Option<String>,

    /// Read the releases feed (default when no feed is selected)
    #[arg(short = 'r', long)]
    pub releases: bool,

    /// Read the commits feed
    #[arg(short = 'c', long)]
    pub commits: bool,

    /// Read both feeds
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Number of entries per feed [default: 1]
    #[arg(short = 'n', long, value_name = "N", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Directory for releases.atom / commits.atom [default: current directory]
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip TLS certificate verification (unsafe: allows man-in-the-middle tampering)
    #[arg(long)]
    pub insecure: bool,

    /// Use specific config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Be verbose (show debug info)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Be quiet (no spinner)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the default configuration file and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Which feeds to read as (releases, commits)
    pub fn feed_selection(&self) -> (bool, bool) {
        let releases = self.releases || self.all;
        let commits = self.commits || self.all;
        if !releases && !commits {
            (true, false)
        } else {
            (releases, commits)
        }
    }

    /// Fold command-line overrides into the loaded configuration
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(count) = self.count {
            config.output.count = count;
        }
        if let Some(ref dir) = self.output_dir {
            config.output.directory = dir.to_string_lossy().into_owned();
        }
        if self.insecure {
            config.network.insecure = true;
        }
        if self.verbose {
            config.general.verbose = true;
        }
        if self.quiet {
            config.ui.progress = false;
        }
        if self.no_color {
            config.ui.colors = false;
        }
        config
    }
}
