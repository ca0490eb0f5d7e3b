//! Command-line host that renders the digital-twin system prompt.

use anyhow::Context;
use clap::Parser;
use persona::{Clock, FixedClock, PersonaContext, PromptBuilder, ResourcePaths, SystemClock};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

mod logging;

pub use logging::init_logging;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding facts.json, summary.txt, linkedin.txt and style.txt
    #[arg(long, env = "TWIN_RESOURCES", default_value = "data")]
    pub resources: PathBuf,

    /// Facts file, overriding the one in the resources directory
    #[arg(long)]
    pub facts: Option<PathBuf>,

    /// Summary file, overriding the one in the resources directory
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Profile file, overriding the one in the resources directory
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Style file, overriding the one in the resources directory
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Render as of this instant (`YYYY-MM-DD HH:MM:SS`) instead of now
    #[arg(long, value_parser = FixedClock::parse)]
    pub at: Option<FixedClock>,

    /// Write the prompt to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl Cli {
    pub fn resource_paths(&self) -> ResourcePaths {
        let mut paths = ResourcePaths::in_dir(&self.resources);
        if let Some(p) = &self.facts {
            paths = paths.facts(p);
        }
        if let Some(p) = &self.summary {
            paths = paths.summary(p);
        }
        if let Some(p) = &self.profile {
            paths = paths.profile(p);
        }
        if let Some(p) = &self.style {
            paths = paths.style(p);
        }
        paths
    }
}

/// Load the persona resources named by `cli` and render the prompt.
pub fn render(cli: &Cli) -> anyhow::Result<String> {
    let context = PersonaContext::load_from(&cli.resource_paths())
        .context("loading persona resources")?;
    let prompt = match cli.at {
        Some(clock) => build(context, clock)?,
        None => build(context, SystemClock)?,
    };
    Ok(prompt)
}

fn build(context: PersonaContext, clock: impl Clock) -> anyhow::Result<String> {
    PromptBuilder::with_clock(context, clock)
        .build_system_prompt()
        .context("rendering persona prompt")
}

/// Render the prompt and write it to the configured destination.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let prompt = render(cli)?;
    match &cli.out {
        Some(path) => {
            fs::write(path, &prompt).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = prompt.len(), "wrote persona prompt");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(prompt.as_bytes())
                .and_then(|()| stdout.flush())
                .context("writing prompt to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_single_files() {
        let cli = Cli::parse_from(["twin", "--resources", "me", "--profile", "cv.txt"]);
        let paths = cli.resource_paths();
        assert_eq!(paths.profile, PathBuf::from("cv.txt"));
        assert_eq!(paths.facts, PathBuf::from("me/facts.json"));
    }

    #[test]
    fn at_parses_into_fixed_clock() {
        let cli = Cli::parse_from(["twin", "--at", "2025-02-03 04:05:06"]);
        assert_eq!(cli.at, Some(FixedClock::parse("2025-02-03 04:05:06").unwrap()));
    }

    #[test]
    fn bad_at_is_rejected() {
        assert!(Cli::try_parse_from(["twin", "--at", "tomorrow"]).is_err());
    }
}
