//! Remote API Bindings
//!
//! HTTP wrappers around the grocery collection resource, organized by
//! domain. Every binding returns `Result<T, String>` with a
//! human-readable message on failure.

mod items;

pub use items::*;

/// Collection endpoint of the original mock deployment
const DEFAULT_API_URL: &str = "https://67d528ded2c7857431ef8b0f.mockapi.io/items";

/// Base URL of the collection, overridable at build time
pub fn api_url() -> &'static str {
    option_env!("GROCERY_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Per-item endpoint
pub(crate) fn item_url(id: &str) -> String {
    format!("{}/{}", api_url(), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url_appends_the_id() {
        assert_eq!(item_url("42"), format!("{}/42", api_url()));
    }
}
