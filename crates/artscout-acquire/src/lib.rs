pub mod html;
pub mod normalize;
pub mod site;
pub mod source;
pub mod types;

pub use site::{candidate_urls, fetch_site, CANDIDATE_PATHS};
pub use source::{HttpPageSource, PageSource};
pub use types::{FailedPage, FetchedPage, SiteText};
