use std::borrow::Cow;

/// Anchors carrying this attribute keep native navigation.
pub const NO_SMOOTH_SCROLL_ATTR: &str = "data-no-smooth-scroll";

/// Offset applied when scrolling to a fragment, clears the fixed navbar.
pub const ANCHOR_OFFSET: f64 = 100.0;

/// Resolved parts of a clicked anchor's `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorLink<'a> {
    pub host: &'a str,
    pub pathname: &'a str,
    pub hash: &'a str,
    pub opted_out: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation<'a> {
    pub host: &'a str,
    pub pathname: &'a str,
}

impl AnchorLink<'_> {
    /// The element id this click should smooth-scroll to, if the link stays
    /// on the current page.
    pub fn in_page_target(&self, page: &PageLocation<'_>) -> Option<String> {
        if self.opted_out || self.host != page.host || !same_path(self.pathname, page.pathname) {
            return None;
        }
        fragment_id(self.hash)
    }
}

fn same_path(a: &str, b: &str) -> bool {
    let trim = |path: &str| -> String {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        }
    };
    trim(a) == trim(b)
}

/// Turns `#some%20id` into `some id`. Empty fragments yield `None`.
pub fn fragment_id(hash: &str) -> Option<String> {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    if raw.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw));
    Some(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: PageLocation<'static> = PageLocation {
        host: "cafemrp.com",
        pathname: "/menu",
    };

    fn link<'a>(host: &'a str, pathname: &'a str, hash: &'a str) -> AnchorLink<'a> {
        AnchorLink {
            host,
            pathname,
            hash,
            opted_out: false,
        }
    }

    #[test]
    fn same_page_fragment_is_intercepted() {
        let anchor = link("cafemrp.com", "/menu", "#section2");
        assert_eq!(anchor.in_page_target(&PAGE), Some("section2".to_string()));
    }

    #[test]
    fn trailing_slash_still_matches() {
        let anchor = link("cafemrp.com", "/menu/", "#drinks");
        assert_eq!(anchor.in_page_target(&PAGE), Some("drinks".to_string()));

        let root = PageLocation {
            host: "cafemrp.com",
            pathname: "/",
        };
        assert_eq!(
            link("cafemrp.com", "", "#about").in_page_target(&root),
            Some("about".to_string())
        );
    }

    #[test]
    fn other_pages_and_hosts_pass_through() {
        assert_eq!(link("cafemrp.com", "/events", "#today").in_page_target(&PAGE), None);
        assert_eq!(link("instagram.com", "/menu", "#top").in_page_target(&PAGE), None);
    }

    #[test]
    fn links_without_fragment_pass_through() {
        assert_eq!(link("cafemrp.com", "/menu", "").in_page_target(&PAGE), None);
        assert_eq!(link("cafemrp.com", "/menu", "#").in_page_target(&PAGE), None);
    }

    #[test]
    fn opted_out_links_pass_through() {
        let anchor = AnchorLink {
            opted_out: true,
            ..link("cafemrp.com", "/menu", "#coffee")
        };
        assert_eq!(anchor.in_page_target(&PAGE), None);
    }

    #[test]
    fn fragment_ids_are_percent_decoded() {
        assert_eq!(fragment_id("#house%20blend"), Some("house blend".to_string()));
        assert_eq!(fragment_id("plain"), Some("plain".to_string()));
    }
}
