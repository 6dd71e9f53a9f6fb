use crate::html;
use crate::source::PageSource;
use crate::types::{FailedPage, FetchedPage, SiteText};

/// Sub-paths checked on every artist site, in order. The empty path is the
/// homepage.
pub const CANDIDATE_PATHS: &[&str] = &["", "/about", "/bio", "/cv", "/exhibitions", "/resume"];

/// Build the list of URLs to check for `base_url`.
pub fn candidate_urls(base_url: &str) -> Vec<String> {
    let base = base_url.trim_end_matches('/');
    CANDIDATE_PATHS
        .iter()
        .map(|path| format!("{base}{path}"))
        .collect()
}

/// Fetch every candidate page of an artist's website and keep the visible
/// text of those that succeed.
///
/// A page that fails to load is logged and skipped. A site where every
/// page fails yields a [`SiteText`] with no pages.
pub async fn fetch_site(artist: &str, base_url: &str, source: &dyn PageSource) -> SiteText {
    tracing::info!(artist = %artist, base_url = %base_url, "Scraping artist website");

    let mut pages = Vec::new();
    let mut failures = Vec::new();

    for url in candidate_urls(base_url) {
        tracing::debug!(url = %url, "Fetching");
        match source.fetch(&url).await {
            Ok(body) => {
                let text = html::html_to_text(&body);
                tracing::info!(url = %url, chars = text.chars().count(), "Extracted text");
                pages.push(FetchedPage { url, text });
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to fetch");
                failures.push(FailedPage {
                    url,
                    error: format!("{e:#}"),
                });
            }
        }
    }

    let site = SiteText {
        artist: artist.to_string(),
        base_url: base_url.to_string(),
        fetched_at: chrono::Utc::now().to_rfc3339(),
        pages,
        failures,
    };
    tracing::info!(
        pages = site.pages.len(),
        failed = site.failures.len(),
        chars = site.total_chars(),
        "Finished scraping"
    );
    site
}
