use serde::{Deserialize, Serialize};

/// Text gathered from one artist's website.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteText {
    pub artist: String,
    pub base_url: String,
    pub fetched_at: String,
    /// Pages that returned successfully, in the order they were checked.
    pub pages: Vec<FetchedPage>,
    /// Pages that could not be fetched. Kept for reporting only.
    pub failures: Vec<FailedPage>,
}

/// Visible text of one successfully fetched page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    pub url: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedPage {
    pub url: String,
    pub error: String,
}

impl SiteText {
    /// All page texts joined with blank lines, in check order.
    pub fn combined_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn total_chars(&self) -> usize {
        self.combined_text().chars().count()
    }
}
