//! Search-by-redirect: the navbar search form does not filter in place, it
//! navigates to the "all categories" listing with the text in the query string.

use crate::domain::a002_category::CATEGORY_ALL;

pub const SEARCH_PARAM: &str = "search";

/// Route for a search submission, `None` when the text is blank
pub fn search_route(text: &str) -> Option<String> {
    let query = text.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!(
        "/category/{}?{}={}",
        CATEGORY_ALL,
        SEARCH_PARAM,
        urlencoding::encode(query)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_has_no_route() {
        assert_eq!(search_route(""), None);
        assert_eq!(search_route("   \t"), None);
    }

    #[test]
    fn test_search_is_trimmed_and_encoded() {
        assert_eq!(
            search_route("  red shoes & hats "),
            Some("/category/all?search=red%20shoes%20%26%20hats".to_string())
        );
        assert_eq!(search_route("yy381"), Some("/category/all?search=yy381".to_string()));
    }
}
