//! Runtime configuration: environment variables, then command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::types::{BoardSize, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Play memory pairs in the terminal
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "memory-pairs")]
#[command(about = "Flip tiles two at a time and find every matching pair", long_about = None)]
pub struct Args {
    /// Board width in tiles (overrides MEMORY_PAIRS_WIDTH)
    #[arg(long)]
    pub width: Option<usize>,

    /// Board height in tiles (overrides MEMORY_PAIRS_HEIGHT)
    #[arg(long)]
    pub height: Option<usize>,

    /// Seed for board shuffles (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append logs to this file (overrides MEMORY_PAIRS_LOG_PATH)
    #[arg(long)]
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source. Unparseable numbers fall back to the
    /// defaults; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let width = var("MEMORY_PAIRS_WIDTH")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_WIDTH);
        let height = var("MEMORY_PAIRS_HEIGHT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HEIGHT);
        let seed = var("MEMORY_PAIRS_SEED").and_then(|s| s.parse().ok());
        let log_path = var("MEMORY_PAIRS_LOG_PATH").map(PathBuf::from);

        Self {
            width,
            height,
            seed,
            log_path,
        }
    }

    /// Apply command-line flags on top.
    pub fn with_args(mut self, args: Args) -> Self {
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.log_path.is_some() {
            self.log_path = args.log_path;
        }
        self
    }

    pub fn board_size(&self) -> Result<BoardSize> {
        BoardSize::new(self.width, self.height)
            .with_context(|| format!("cannot play on a {}x{} board", self.width, self.height))
    }
}
