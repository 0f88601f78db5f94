use std::time::Duration;

use cloner_logging::cloner_debug;

use crate::snapshot::{style_map, ScrapedSnapshot, SnapshotMetadata};
use crate::CloneError;

#[derive(Debug, Clone)]
pub struct ScraperSettings {
    /// Pretend network latency before the snapshot is returned.
    pub simulated_latency: Duration,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_secs(2),
        }
    }
}

/// Produces a structural snapshot for a URL.
#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    async fn scrape(&self, url: &str) -> Result<ScrapedSnapshot, CloneError>;
}

/// Stand-in for a headless-browser backend: two canned payloads, picked by
/// whether the URL mentions `example.com`.
#[derive(Debug, Clone, Default)]
pub struct MockScraper {
    settings: ScraperSettings,
}

impl MockScraper {
    pub fn new(settings: ScraperSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl Scraper for MockScraper {
    async fn scrape(&self, url: &str) -> Result<ScrapedSnapshot, CloneError> {
        if !self.settings.simulated_latency.is_zero() {
            tokio::time::sleep(self.settings.simulated_latency).await;
        }
        let snapshot = if url.contains("example.com") {
            example_domain_snapshot(url)
        } else {
            generic_snapshot(url)
        };
        cloner_debug!(
            "Mock snapshot for {} title={:?} html_len={}",
            url,
            snapshot.title,
            snapshot.html_snippet.len()
        );
        Ok(snapshot)
    }
}

fn example_domain_snapshot(url: &str) -> ScrapedSnapshot {
    ScrapedSnapshot {
        url: url.to_string(),
        title: "Example Domain".to_string(),
        html_snippet: "<div><header><h1>Header</h1></header><main><section><h2>Hero</h2><p>Description</p></section></main></div>".to_string(),
        computed_styles: style_map([
            ("header", vec![("background", "#f0f0f0"), ("padding", "20px")]),
            ("h1", vec![("font-size", "32px"), ("color", "#333")]),
        ]),
        metadata: SnapshotMetadata {
            colors: strings(&["#ffffff", "#f0f0f0", "#333333"]),
            fonts: strings(&["Arial", "sans-serif"]),
        },
    }
}

const GENERIC_HTML: &str = r#"
      <nav class="top-nav">
        <div class="logo">CloneUI</div>
        <ul>
          <li>Home</li>
          <li>Features</li>
          <li>Pricing</li>
        </ul>
      </nav>
      <section class="hero">
        <h1>Transform URLs into React Components</h1>
        <p>The ultimate developer tool for UI cloning.</p>
        <button class="cta">Get Started</button>
      </section>
    "#;

fn generic_snapshot(url: &str) -> ScrapedSnapshot {
    ScrapedSnapshot {
        url: url.to_string(),
        title: "Analyzed Site".to_string(),
        html_snippet: GENERIC_HTML.to_string(),
        computed_styles: style_map([
            (
                ".top-nav",
                vec![
                    ("display", "flex"),
                    ("justify-content", "space-between"),
                    ("padding", "1rem"),
                ],
            ),
            (".hero", vec![("text-align", "center"), ("padding", "5rem 0")]),
        ]),
        metadata: SnapshotMetadata {
            colors: strings(&["#0f172a", "#38bdf8", "#f8fafc"]),
            fonts: strings(&["Inter", "sans-serif"]),
        },
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
