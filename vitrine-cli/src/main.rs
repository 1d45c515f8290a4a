//! Vitrine CLI
//!
//! A headless loader/renderer for content-driven portfolio pages, used
//! for testing and debugging: fetch (or read) a content document, render
//! the page, optionally scroll, and report what would be playing.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use vitrine_content::{ContentDocument, partition_sections};
use vitrine_playback::PlaybackState;
use vitrine_view::{Page, SiteConfig};

/// Render a content-driven portfolio page headlessly.
#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about)]
struct Args {
    /// Site base URL (empty selects the same-origin deployment mode).
    #[arg(long, default_value = "")]
    base_url: String,

    /// Read the content document from a local JSON file instead of
    /// fetching `{base-url}/projects.json`.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Brand name shown in the page chrome.
    #[arg(long, default_value = "Vitrine")]
    site_name: String,

    /// Vertical scroll offset applied after rendering.
    #[arg(long, default_value_t = 0.0)]
    scroll: f32,

    /// Print the full rendered view tree.
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = SiteConfig::new(args.base_url);
    config.site_name = args.site_name;
    let mut page = Page::new(config);

    if let Some(path) = &args.file {
        let body = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        let doc = ContentDocument::from_json(&body).context("content document is malformed")?;
        let generation = page.begin_load();
        let _applied = page.apply(doc, generation);
    } else {
        page.load().context("failed to load content document")?;
    }

    page.scroll_to(args.scroll);

    let partition = partition_sections(page.content());
    println!(
        "{} {} featured section(s), {} secondary section(s), {} node(s)",
        "rendered:".bold(),
        partition.featured.len(),
        partition.secondary.len(),
        page.tree().len()
    );

    let states = page.playback().states();
    if states.is_empty() {
        println!("{} no videos on the page", "playback:".bold());
    } else {
        println!("{}", "playback:".bold());
        for (key, state) in states {
            let src = page
                .playback()
                .element(key)
                .map_or("<unknown>", |video| video.src());
            match state {
                PlaybackState::Playing => {
                    println!("  {} {} ({})", "playing".green(), src, key.0);
                }
                PlaybackState::Paused => {
                    println!("  {} {} ({})", "paused ".yellow(), src, key.0);
                }
                PlaybackState::Unobserved => {
                    println!("  {} {} ({})", "unobserved".red(), src, key.0);
                }
            }
        }
    }

    if args.dump {
        println!("\n{}", "=== View Tree ===".bold());
        print!("{}", page.tree().dump(page.root()));
    }

    Ok(())
}
