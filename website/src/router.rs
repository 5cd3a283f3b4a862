//! Request routing and view dispatch.
//!
//! A request path is parsed into a [`Route`], and [`dispatch`] assembles the
//! data bundle that route's view needs. Both the HTTP server and the static
//! exporter go through [`dispatch`], so a page looks the same whichever way
//! it is produced.
//!
//! | Path | View | Bundle |
//! |------|------|--------|
//! | `/` | [`View::Home`] | certifications, categories, industries |
//! | `/certifications` | [`View::Certifications`] | certifications, categories |
//! | `/certification/<slug>` | [`View::Certification`] | the record |
//! | `/industries` | [`View::Industries`] | industries, certifications |
//! | `/contact` | [`View::Contact`] | none |
//! | anything else | [`View::NotFound`] | none |

use greencert_catalog::{Catalog, CategoryGroup, Certification, Industry};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Path of the home page.
pub const HOME_PATH: &str = "/";
/// Path of the certifications listing.
pub const CERTIFICATIONS_PATH: &str = "/certifications";
/// Path prefix of certification detail pages.
pub const CERTIFICATION_PREFIX: &str = "/certification/";
/// Path of the industries page.
pub const INDUSTRIES_PATH: &str = "/industries";
/// Path of the contact page.
pub const CONTACT_PATH: &str = "/contact";

/// A parsed request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'p> {
    /// `/`
    Home,
    /// `/certifications`
    Certifications,
    /// `/certification/<slug>`; the slug is not yet checked against the catalog.
    Certification(&'p str),
    /// `/industries`
    Industries,
    /// `/contact`
    Contact,
    /// No route matches.
    NotFound,
}

impl<'p> Route<'p> {
    /// Parses a request path (without query string).
    ///
    /// Matching is exact: trailing slashes are significant and the slug
    /// segment is taken verbatim. A slug must be non-empty and contain no `/`.
    /// Percent-escapes are not decoded, so `green%2Dbusiness` is not a known slug.
    #[must_use]
    pub fn parse(path: &'p str) -> Self {
        match path {
            HOME_PATH => Route::Home,
            CERTIFICATIONS_PATH => Route::Certifications,
            INDUSTRIES_PATH => Route::Industries,
            CONTACT_PATH => Route::Contact,
            _ => match path.strip_prefix(CERTIFICATION_PREFIX) {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                    Route::Certification(slug)
                }
                _ => Route::NotFound,
            },
        }
    }
}

/// Returns the detail-page path for a slug.
#[must_use]
pub fn certification_path(slug: &str) -> String {
    format!("{CERTIFICATION_PREFIX}{slug}")
}

/// Returns every routable path, in site order: home, listing, one detail
/// page per certification, industries, contact.
#[must_use]
pub fn site_paths(catalog: &Catalog) -> Vec<String> {
    let mut paths = vec![HOME_PATH.to_string(), CERTIFICATIONS_PATH.to_string()];
    paths.extend(catalog.slugs().map(certification_path));
    paths.push(INDUSTRIES_PATH.to_string());
    paths.push(CONTACT_PATH.to_string());
    paths
}

/// Response status of a dispatched view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// 200
    Ok,
    /// 404
    NotFound,
}

impl Status {
    /// Returns the HTTP status code.
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::NotFound => 404,
        }
    }
}

/// The data bundle handed to a view. Borrowed read-only from the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View<'a> {
    /// Home page.
    Home {
        /// All certifications, serialized as an object keyed by slug.
        #[serde(serialize_with = "by_slug")]
        certifications: &'a [Certification],
        /// All category groups.
        categories: &'a [CategoryGroup],
        /// All industries.
        industries: &'a [Industry],
    },
    /// Certifications listing.
    Certifications {
        /// All certifications, serialized as an object keyed by slug.
        #[serde(serialize_with = "by_slug")]
        certifications: &'a [Certification],
        /// All category groups.
        categories: &'a [CategoryGroup],
    },
    /// A single certification.
    Certification {
        /// The requested slug.
        slug: &'a str,
        /// The matching record.
        cert: &'a Certification,
    },
    /// Industries page.
    Industries {
        /// All industries.
        industries: &'a [Industry],
        /// All certifications, serialized as an object keyed by slug.
        #[serde(serialize_with = "by_slug")]
        certifications: &'a [Certification],
    },
    /// Static contact page.
    Contact,
    /// Not-found page.
    NotFound,
}

fn by_slug<S: Serializer>(certs: &&[Certification], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(certs.len()))?;
    for cert in certs.iter() {
        map.serialize_entry(cert.slug, cert)?;
    }
    map.end()
}

/// The outcome of routing one request.
#[derive(Debug, Clone, Serialize)]
pub struct Dispatch<'a> {
    /// Response status.
    pub status: Status,
    /// View and its data bundle.
    pub view: View<'a>,
}

impl<'a> Dispatch<'a> {
    /// The not-found outcome shared by unmatched paths and unknown slugs.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            view: View::NotFound,
        }
    }

    fn ok(view: View<'a>) -> Self {
        Self {
            status: Status::Ok,
            view,
        }
    }

    /// Renders the view to a complete HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        crate::renderer::render_view(&self.view)
    }
}

/// Routes `path` against `catalog`.
///
/// Unmatched paths and unknown slugs both yield [`Dispatch::not_found`];
/// callers cannot tell them apart.
#[must_use]
pub fn dispatch<'a>(catalog: &'a Catalog, path: &str) -> Dispatch<'a> {
    match Route::parse(path) {
        Route::Home => Dispatch::ok(View::Home {
            certifications: catalog.certifications(),
            categories: catalog.categories(),
            industries: catalog.industries(),
        }),
        Route::Certifications => Dispatch::ok(View::Certifications {
            certifications: catalog.certifications(),
            categories: catalog.categories(),
        }),
        Route::Certification(slug) => match catalog.get_by_slug(slug) {
            Ok(cert) => Dispatch::ok(View::Certification {
                slug: cert.slug,
                cert,
            }),
            Err(_) => Dispatch::not_found(),
        },
        Route::Industries => Dispatch::ok(View::Industries {
            industries: catalog.industries(),
            certifications: catalog.certifications(),
        }),
        Route::Contact => Dispatch::ok(View::Contact),
        Route::NotFound => Dispatch::not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/certifications"), Route::Certifications);
        assert_eq!(Route::parse("/industries"), Route::Industries);
        assert_eq!(Route::parse("/contact"), Route::Contact);
    }

    #[test]
    fn parses_detail_slug_verbatim() {
        assert_eq!(
            Route::parse("/certification/Green-Business"),
            Route::Certification("Green-Business")
        );
    }

    #[test]
    fn percent_escaped_slug_is_not_decoded() {
        let path = "/certification/green%2Dbusiness";
        assert_eq!(Route::parse(path), Route::Certification("green%2Dbusiness"));
        assert_eq!(dispatch(Catalog::full(), path).status, Status::NotFound);
    }

    #[test]
    fn rejects_near_misses() {
        for path in [
            "",
            "/certifications/",
            "/certification",
            "/certification/",
            "/certification/a/b",
            "/Contact",
            "/industries/x",
        ] {
            assert_eq!(Route::parse(path), Route::NotFound, "{path:?}");
        }
    }

    #[test]
    fn site_paths_cover_every_slug() {
        let catalog = Catalog::full();
        let paths = site_paths(catalog);
        assert_eq!(paths.len(), catalog.len() + 4);
        assert_eq!(paths.first().map(String::as_str), Some("/"));
        assert_eq!(paths.last().map(String::as_str), Some("/contact"));
        for slug in catalog.slugs() {
            assert!(paths.contains(&certification_path(slug)));
        }
    }

    #[test]
    fn unknown_slug_and_unknown_path_are_indistinguishable() {
        let catalog = Catalog::full();
        let a = serde_json::to_string(&dispatch(catalog, "/certification/nope")).ok();
        let b = serde_json::to_string(&dispatch(catalog, "/nope")).ok();
        assert!(a.is_some());
        assert_eq!(a, b);
    }
}
