// src/domain/language/page.rs
use std::fmt;

/// Non-empty `/`-separated components of a URL path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathSegments(Vec<String>);

impl PathSegments {
    pub fn parse(path: &str) -> Self {
        Self(
            path.split('/')
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Storefront page kinds recognised from the path alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageShape {
    /// `/{lang}/{id}/{slug}/`
    ProductDetail { product_id: String, slug: String },
    /// `/{lang}/{category_slug}/`
    Category { slug: String },
    /// `/{lang}/`
    Home,
    Other,
}

impl PageShape {
    pub fn classify(segments: &PathSegments) -> Self {
        match segments.as_slice() {
            [_, id, slug] if is_numeric(id) => Self::ProductDetail {
                product_id: id.clone(),
                slug: slug.clone(),
            },
            // three segments without a numeric id are not a product page
            [_, _, _] => Self::Other,
            [_, category] => Self::Category {
                slug: category.clone(),
            },
            [_] => Self::Home,
            _ => Self::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ProductDetail { .. } => "product_detail",
            Self::Category { .. } => "category",
            Self::Home => "home",
            Self::Other => "other",
        }
    }

    /// Path of the equivalent page under `language`.
    pub fn localized_path(&self, language: &str) -> String {
        match self {
            // TODO: look up the product's slug in `language` and redirect to
            // `/{language}/{product_id}/{slug}/` once the catalog exposes it.
            Self::ProductDetail { .. } => format!("/{language}/"),
            Self::Category { slug } => format!("/{language}/{slug}/"),
            Self::Home | Self::Other => format!("/{language}/"),
        }
    }
}

impl fmt::Display for PageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Stricter than a "parses as a number" check: `1e3`, `1.5` or `0x1F` are not
// product ids. Such paths classify as `Other`, which redirects to the same
// `/{language}/` target as a product page.
fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// A computed language switch: what page we were on and where to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRedirectPlan {
    pub shape: PageShape,
    pub target: String,
}

impl LanguageRedirectPlan {
    pub fn for_path(current_path: &str, language: &str) -> Self {
        let segments = PathSegments::parse(current_path);
        let shape = PageShape::classify(&segments);
        let target = shape.localized_path(language);
        Self { shape, target }
    }
}
