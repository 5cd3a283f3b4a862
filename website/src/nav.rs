//! Primary site navigation.

use crate::model::NavItem;
use crate::renderer::escape_html;
use crate::router::{CERTIFICATIONS_PATH, CONTACT_PATH, HOME_PATH, INDUSTRIES_PATH};

/// Builds the primary site navigation.
#[must_use]
pub fn build_nav() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Home",
            url: HOME_PATH,
        },
        NavItem {
            label: "Certifications",
            url: CERTIFICATIONS_PATH,
        },
        NavItem {
            label: "Industries",
            url: INDUSTRIES_PATH,
        },
        NavItem {
            label: "Contact",
            url: CONTACT_PATH,
        },
    ]
}

/// Renders the navigation as an HTML list, marking the item for
/// `current_path` with `aria-current="page"`.
///
/// Detail pages mark the Certifications item.
#[must_use]
pub fn render_nav(nav: &[NavItem], current_path: &str) -> String {
    let mut html = String::from("<ul>\n");
    for item in nav {
        let current = is_current(item.url, current_path);
        let marker = if current { " aria-current=\"page\"" } else { "" };
        html.push_str(&format!(
            "  <li><a href=\"{url}\"{marker}>{label}</a></li>\n",
            url = escape_html(item.url),
            label = escape_html(item.label),
        ));
    }
    html.push_str("</ul>\n");
    html
}

fn is_current(url: &str, current_path: &str) -> bool {
    if url == HOME_PATH {
        return current_path == HOME_PATH;
    }
    current_path == url
        || (url == CERTIFICATIONS_PATH
            && current_path.starts_with(crate::router::CERTIFICATION_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_only_the_current_item() {
        let html = render_nav(&build_nav(), "/industries");
        assert_eq!(html.matches("aria-current").count(), 1);
        assert!(html.contains("<a href=\"/industries\" aria-current=\"page\">"));
    }

    #[test]
    fn detail_pages_mark_certifications() {
        let html = render_nav(&build_nav(), "/certification/green-business");
        assert!(html.contains("<a href=\"/certifications\" aria-current=\"page\">"));
    }

    #[test]
    fn not_found_marks_nothing() {
        let html = render_nav(&build_nav(), "");
        assert!(!html.contains("aria-current"));
    }
}
