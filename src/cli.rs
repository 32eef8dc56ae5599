//! Command-line surface: `sitemirror <url> <path> [--only-update] [--confirmation]`.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sitemirror_core::config;
use sitemirror_core::confirm::PromptConfirmer;
use sitemirror_core::fetch::{CurlFetcher, HttpOptions};
use sitemirror_core::{Mirror, MirrorOptions};

/// Mirror a single website to local storage, rewriting same-site links to the local copies.
#[derive(Debug, Parser)]
#[command(name = "sitemirror", version, about)]
pub struct CliCommand {
    /// Page the mirror starts from (absolute http/https URL).
    pub url: String,
    /// Directory the mirror is written under.
    pub path: PathBuf,
    /// Do not overwrite files that already exist under PATH.
    #[arg(long)]
    pub only_update: bool,
    /// Ask before each download.
    #[arg(long)]
    pub confirmation: bool,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init().context("failed to load configuration")?;

        let options = MirrorOptions {
            only_update: self.only_update,
            ..MirrorOptions::from(&cfg)
        };
        let fetcher = CurlFetcher::new(HttpOptions::from(&cfg));

        let mut mirror = Mirror::new(&self.url, self.path.clone(), Box::new(fetcher), options);
        if self.confirmation {
            mirror = mirror.with_confirmer(Box::new(PromptConfirmer));
        }

        let summary = mirror
            .run()
            .with_context(|| format!("mirroring {} into {} failed", self.url, self.path.display()))?;
        println!("{}: {}", self.url, summary);
        Ok(())
    }
}
