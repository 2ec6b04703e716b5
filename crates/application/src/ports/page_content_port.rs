//! Page content port
//!
//! Defines how the application obtains the readable text of a web page.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching a page's content blocks
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PageContentPort: Send + Sync {
    /// Fetch a page and return the trimmed text of its content blocks
    ///
    /// Blocks are article/main bodies, paragraphs and headings, in document
    /// order, with presentation elements (scripts, navigation, ads, media,
    /// buttons) already removed.
    ///
    /// # Errors
    /// Returns an error if the page cannot be probed or fetched in time, or
    /// responds with a non-success status.
    async fn fetch_text_blocks(&self, url: &str) -> Result<Vec<String>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PageContentPort>();
    }
}
