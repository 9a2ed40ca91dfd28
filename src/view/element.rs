use regex::Regex;

/// Test id of the loading placeholder
pub const LOADING_TEST_ID: &str = "loadingPlaceholder";

/// Test id of the error notice
pub const ERROR_TEST_ID: &str = "searchError";

/// One rendered node of the search view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Shown while the request for the current query is outstanding
    Placeholder { test_id: &'static str, text: String },
    /// One search hit
    Link {
        text: String,
        href: String,
        label: String,
    },
    /// Shown when the request for the current query failed
    Error { test_id: &'static str, text: String },
}

impl Element {
    /// Visible text
    pub fn text(&self) -> &str {
        match self {
            Element::Placeholder { text, .. }
            | Element::Link { text, .. }
            | Element::Error { text, .. } => text,
        }
    }

    pub fn test_id(&self) -> Option<&str> {
        match self {
            Element::Placeholder { test_id, .. } | Element::Error { test_id, .. } => Some(*test_id),
            Element::Link { .. } => None,
        }
    }

    /// Accessible label (links only)
    pub fn label(&self) -> Option<&str> {
        match self {
            Element::Link { label, .. } => Some(label.as_str()),
            _ => None,
        }
    }

    /// Link target (links only)
    pub fn href(&self) -> Option<&str> {
        match self {
            Element::Link { href, .. } => Some(href.as_str()),
            _ => None,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Element::Link { .. })
    }
}

pub fn find_by_test_id<'a>(elements: &'a [Element], test_id: &str) -> Option<&'a Element> {
    elements.iter().find(|el| el.test_id() == Some(test_id))
}

pub fn find_by_text<'a>(elements: &'a [Element], pattern: &Regex) -> Option<&'a Element> {
    elements.iter().find(|el| pattern.is_match(el.text()))
}

pub fn find_by_label<'a>(elements: &'a [Element], pattern: &Regex) -> Option<&'a Element> {
    elements
        .iter()
        .find(|el| el.label().is_some_and(|label| pattern.is_match(label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Element> {
        vec![
            Element::Link {
                text: "Rust 2024".to_string(),
                href: "https://blog.rust-lang.org".to_string(),
                label: "read more about Rust 2024".to_string(),
            },
            Element::Link {
                text: "Tokio 1.0".to_string(),
                href: "https://tokio.rs".to_string(),
                label: "read more about Tokio 1.0".to_string(),
            },
        ]
    }

    #[test]
    fn test_find_by_label_is_regex_driven() {
        let elements = sample();
        let pattern = Regex::new("(?i)READ MORE ABOUT tokio").unwrap();

        let link = find_by_label(&elements, &pattern).unwrap();
        assert_eq!(link.href(), Some("https://tokio.rs"));
        assert_eq!(link.text(), "Tokio 1.0");
    }

    #[test]
    fn test_find_by_test_id_skips_links() {
        let mut elements = sample();
        assert!(find_by_test_id(&elements, LOADING_TEST_ID).is_none());

        elements.push(Element::Placeholder {
            test_id: LOADING_TEST_ID,
            text: "waiting".to_string(),
        });
        assert_eq!(
            find_by_test_id(&elements, LOADING_TEST_ID).map(Element::text),
            Some("waiting")
        );
    }

    #[test]
    fn test_placeholder_has_no_label_or_href() {
        let el = Element::Error {
            test_id: ERROR_TEST_ID,
            text: "boom".to_string(),
        };
        assert!(el.label().is_none());
        assert!(el.href().is_none());
        assert!(!el.is_link());
    }
}
