//! HTML rendering for every view.
//!
//! All pages share one shell ([`render_page`]); each view contributes only the
//! body of `<main>`. Every piece of catalog text is escaped on the way out.

use greencert_catalog::{Certification, Industry, ItemGroup};

use crate::extractor::{
    category_sections, certification_breadcrumbs, certification_cards, home_breadcrumbs,
    page_breadcrumbs,
};
use crate::model::{BreadcrumbItem, CategorySection, CertificationCard};
use crate::nav::{build_nav, render_nav};
use crate::router::{
    certification_path, View, CERTIFICATIONS_PATH, CONTACT_PATH, HOME_PATH, INDUSTRIES_PATH,
};

/// Site name used in titles, header, and footer.
pub const SITE_NAME: &str = "GreenCert";

/// Renders a view to a complete HTML document.
#[must_use]
pub fn render_view(view: &View<'_>) -> String {
    let nav = build_nav();
    match view {
        View::Home {
            certifications,
            categories,
            industries,
        } => {
            let sections = category_sections(categories, certifications);
            render_page(
                SITE_NAME,
                &render_home(&sections, industries),
                &render_nav(&nav, HOME_PATH),
                &home_breadcrumbs(),
            )
        }
        View::Certifications {
            certifications,
            categories,
        } => {
            let sections = category_sections(categories, certifications);
            render_page(
                "Certifications",
                &render_certifications(&sections),
                &render_nav(&nav, CERTIFICATIONS_PATH),
                &page_breadcrumbs("Certifications"),
            )
        }
        View::Certification { slug, cert } => render_page(
            cert.title,
            &render_certification(cert),
            &render_nav(&nav, &certification_path(slug)),
            &certification_breadcrumbs(cert.title),
        ),
        View::Industries {
            industries,
            certifications,
        } => render_page(
            "Industries",
            &render_industries(industries, &certification_cards(certifications)),
            &render_nav(&nav, INDUSTRIES_PATH),
            &page_breadcrumbs("Industries"),
        ),
        View::Contact => render_page(
            "Contact",
            &render_contact(),
            &render_nav(&nav, CONTACT_PATH),
            &page_breadcrumbs("Contact"),
        ),
        View::NotFound => render_page(
            "Page Not Found",
            &render_not_found(),
            &render_nav(&nav, ""),
            &page_breadcrumbs("Page Not Found"),
        ),
    }
}

/// Wraps page content in the site shell.
#[must_use]
pub fn render_page(
    title: &str,
    content_html: &str,
    nav_html: &str,
    breadcrumbs: &[BreadcrumbItem],
) -> String {
    let full_title = if title == SITE_NAME {
        SITE_NAME.to_string()
    } else {
        format!("{} | {SITE_NAME}", escape_html(title))
    };
    let crumbs = render_breadcrumbs(breadcrumbs);
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{full_title}</title>
</head>
<body>
<a href="#main-content" class="skip-link">Skip to main content</a>
<header class="site-header">
<a href="{HOME_PATH}" class="site-logo">{SITE_NAME}</a>
<nav aria-label="Site navigation" class="site-nav">
{nav_html}</nav>
</header>
{crumbs}<main id="main-content">
{content_html}</main>
<footer class="site-footer">
<p>{SITE_NAME} sustainability certifications</p>
</footer>
</body>
</html>
"##
    )
}

fn render_breadcrumbs(items: &[BreadcrumbItem]) -> String {
    if items.len() < 2 {
        return String::new();
    }
    let mut html = String::from("<nav aria-label=\"Breadcrumb\" class=\"breadcrumbs\">\n<ol>\n");
    for item in items {
        if item.url.is_empty() {
            html.push_str(&format!(
                "  <li aria-current=\"page\">{}</li>\n",
                escape_html(&item.label)
            ));
        } else {
            html.push_str(&format!(
                "  <li><a href=\"{}\">{}</a></li>\n",
                escape_html(&item.url),
                escape_html(&item.label)
            ));
        }
    }
    html.push_str("</ol>\n</nav>\n");
    html
}

/// Renders the home page body.
#[must_use]
pub fn render_home(sections: &[CategorySection], industries: &[Industry]) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<section class=\"hero\">\n<h1>{SITE_NAME}</h1>\n<p>Independent sustainability \
         certifications for organizations that want to measure, improve, and demonstrate \
         their environmental, social, and governance performance.</p>\n\
         <p><a href=\"{CERTIFICATIONS_PATH}\">Browse certifications</a></p>\n</section>\n"
    ));
    for section in sections {
        html.push_str(&render_section(section));
    }
    html.push_str("<section id=\"industries\">\n<h2>Industries We Serve</h2>\n");
    html.push_str(&render_industry_list(industries));
    html.push_str(&format!(
        "<p><a href=\"{INDUSTRIES_PATH}\">All industries</a></p>\n</section>\n"
    ));
    html
}

/// Renders the certifications listing body.
#[must_use]
pub fn render_certifications(sections: &[CategorySection]) -> String {
    let mut html = String::from("<h1>Certifications</h1>\n");
    for section in sections {
        html.push_str(&render_section(section));
    }
    html
}

fn render_section(section: &CategorySection) -> String {
    let mut html = format!(
        "<section id=\"{id}\" class=\"category\">\n<h2>{title}</h2>\n<p>{desc}</p>\n",
        id = escape_html(section.id),
        title = escape_html(section.title),
        desc = escape_html(section.desc),
    );
    html.push_str(&render_cards(&section.cards));
    html.push_str("</section>\n");
    html
}

fn render_cards(cards: &[CertificationCard]) -> String {
    let mut html = String::from("<ul class=\"cards\">\n");
    for card in cards {
        html.push_str(&format!(
            "  <li class=\"card\" data-icon=\"{icon}\"><a href=\"{url}\">{title}</a>\n  <p>{short}</p></li>\n",
            icon = escape_html(card.icon),
            url = escape_html(&card.url),
            title = escape_html(card.title),
            short = escape_html(card.short),
        ));
    }
    html.push_str("</ul>\n");
    html
}

fn render_industry_list(industries: &[Industry]) -> String {
    let mut html = String::from("<ul class=\"industries\">\n");
    for industry in industries {
        html.push_str(&format!(
            "  <li data-icon=\"{icon}\"><h3>{name}</h3>\n  <p>{desc}</p></li>\n",
            icon = escape_html(industry.icon),
            name = escape_html(industry.name),
            desc = escape_html(industry.desc),
        ));
    }
    html.push_str("</ul>\n");
    html
}

/// Renders a certification detail body.
///
/// Sections appear in record order: overview, eligibility, criteria, process,
/// benefits, levels, FAQ. `process` and `levels` are rendered as narrative;
/// the score column appears only when some level has a score.
#[must_use]
pub fn render_certification(cert: &Certification) -> String {
    let mut html = format!(
        "<article class=\"certification\" data-category=\"{category}\" data-icon=\"{icon}\">\n\
         <h1>{title}</h1>\n<p class=\"lead\">{short}</p>\n",
        category = cert.category,
        icon = escape_html(cert.icon),
        title = escape_html(cert.title),
        short = escape_html(cert.short),
    );

    // Eligibility
    html.push_str("<section id=\"applicability\">\n<h2>Who Can Apply</h2>\n");
    html.push_str(&format!("<p>{}</p>\n", escape_html(cert.applicable)));
    html.push_str(&render_list("ul", cert.suitable_for));
    html.push_str(&format!("<p>{}</p>\n</section>\n", escape_html(cert.applicable_note)));

    html.push_str("<section id=\"criteria\">\n<h2>Assessment Criteria</h2>\n");
    html.push_str(&render_item_groups(cert.criteria));
    html.push_str(&format!("<p>{}</p>\n</section>\n", escape_html(cert.criteria_note)));

    html.push_str("<section id=\"process\">\n<h2>Certification Process</h2>\n<ol class=\"process\">\n");
    for step in cert.process {
        html.push_str(&format!(
            "  <li><h3>{}</h3>\n  <p>{}</p></li>\n",
            escape_html(step.step),
            escape_html(step.desc)
        ));
    }
    html.push_str("</ol>\n</section>\n");

    html.push_str("<section id=\"benefits\">\n<h2>Benefits</h2>\n");
    html.push_str(&render_item_groups(cert.benefits));
    html.push_str("</section>\n");

    html.push_str("<section id=\"levels\">\n<h2>Certification Levels</h2>\n");
    let scored = cert.levels.iter().any(|l| !l.score.trim().is_empty());
    html.push_str("<table>\n<thead><tr><th scope=\"col\">Level</th>");
    if scored {
        html.push_str("<th scope=\"col\">Score</th>");
    }
    html.push_str("<th scope=\"col\">Focus</th><th scope=\"col\">Description</th></tr></thead>\n<tbody>\n");
    for level in &cert.levels {
        html.push_str(&format!(
            "<tr class=\"level-{class}\"><th scope=\"row\">{name}<br><small>{label}</small></th>",
            class = level.name().to_lowercase(),
            name = level.name(),
            label = escape_html(level.label),
        ));
        if scored {
            html.push_str(&format!("<td>{}</td>", escape_html(level.score)));
        }
        html.push_str(&format!(
            "<td>{}</td><td>{}</td></tr>\n",
            escape_html(level.focus),
            escape_html(level.desc)
        ));
    }
    html.push_str("</tbody>\n</table>\n</section>\n");

    html.push_str("<section id=\"faq\">\n<h2>Frequently Asked Questions</h2>\n<dl>\n");
    for faq in cert.faq {
        html.push_str(&format!(
            "  <dt>{}</dt>\n  <dd>{}</dd>\n",
            escape_html(faq.q),
            escape_html(faq.a)
        ));
    }
    html.push_str("</dl>\n</section>\n");

    html.push_str(&format!(
        "<p><a href=\"{CONTACT_PATH}\">Apply for {}</a></p>\n</article>\n",
        escape_html(cert.title)
    ));
    html
}

fn render_item_groups(groups: &[ItemGroup]) -> String {
    let mut html = String::new();
    for group in groups {
        html.push_str(&format!("<h3>{}</h3>\n", escape_html(group.title)));
        html.push_str(&render_list("ul", group.items));
    }
    html
}

fn render_list(tag: &str, items: &[&str]) -> String {
    let mut html = format!("<{tag}>\n");
    for item in items {
        html.push_str(&format!("  <li>{}</li>\n", escape_html(item)));
    }
    html.push_str(&format!("</{tag}>\n"));
    html
}

/// Renders the industries page body.
#[must_use]
pub fn render_industries(industries: &[Industry], cards: &[CertificationCard]) -> String {
    let mut html = String::from("<h1>Industries</h1>\n");
    html.push_str(&render_industry_list(industries));
    html.push_str("<section id=\"all-certifications\">\n<h2>All Certifications</h2>\n");
    html.push_str(&render_cards(cards));
    html.push_str("</section>\n");
    html
}

/// Renders the static contact page body.
#[must_use]
pub fn render_contact() -> String {
    format!(
        "<h1>Contact</h1>\n<p>To start a certification, request an assessment, or ask about \
         eligibility, get in touch with the {SITE_NAME} team. Tell us about your organization \
         and the certification you are interested in, and an assessor will follow up.</p>\n\
         <p><a href=\"{CERTIFICATIONS_PATH}\">Review the certifications</a></p>\n"
    )
}

/// Renders the not-found page body.
#[must_use]
pub fn render_not_found() -> String {
    format!(
        "<h1>Page Not Found</h1>\n<p>The page you requested does not exist.</p>\n\
         <p><a href=\"{HOME_PATH}\">Return to the home page</a></p>\n"
    )
}

/// Renders a `sitemap.xml` for `paths` under `base_url`.
#[must_use]
pub fn render_sitemap(base_url: &str, paths: &[String]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in paths {
        xml.push_str(&format!(
            "  <url><loc>{}{}</loc></url>\n",
            escape_html(base),
            escape_html(path)
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Escapes HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use greencert_catalog::Catalog;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("R&D <b>\"x\"</b>"), "R&amp;D &lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    }

    #[test]
    fn detail_renders_every_section_in_order() {
        let cert = Catalog::full().get_by_slug("green-business");
        let Ok(cert) = cert else {
            unreachable!("green-business is in the catalog");
        };
        let html = render_certification(cert);
        let order = ["applicability", "criteria", "process", "benefits", "levels", "faq"];
        let positions: Vec<usize> = order
            .iter()
            .filter_map(|id| html.find(&format!("<section id=\"{id}\"")))
            .collect();
        assert_eq!(positions.len(), order.len());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("MSMEs &amp; Industrial Units"));
        assert!(html.contains("<td>85+</td>"));
    }

    #[test]
    fn levels_render_bronze_to_platinum() {
        let Ok(cert) = Catalog::full().get_by_slug("carbon-neutral") else {
            unreachable!("carbon-neutral is in the catalog");
        };
        let html = render_certification(cert);
        let bronze = html.find("level-bronze");
        let platinum = html.find("level-platinum");
        assert!(bronze.is_some() && platinum.is_some());
        assert!(bronze < platinum);
        assert!(html.contains("Climate Positive Organization"));
        assert!(!html.contains("<th scope=\"col\">Score</th>"));
    }

    #[test]
    fn page_shell_has_landmarks() {
        let html = render_page("Contact", &render_contact(), "<ul></ul>\n", &page_breadcrumbs("Contact"));
        for needle in ["<html lang=\"en\">", "<title>Contact | GreenCert</title>", "<nav", "<main", "<footer"] {
            assert!(html.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn sitemap_lists_each_path_once() {
        let xml = render_sitemap("http://localhost:5000/", &["/".to_string(), "/contact".to_string()]);
        assert!(xml.contains("<loc>http://localhost:5000/</loc>"));
        assert!(xml.contains("<loc>http://localhost:5000/contact</loc>"));
        assert_eq!(xml.matches("<url>").count(), 2);
    }
}
