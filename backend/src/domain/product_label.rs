//! Product label derivation from shop URLs.
//!
//! Clients paste a product page URL and get a readable label back to pre-fill
//! a line item. Nothing is fetched; the label comes from the URL's last path
//! segment and the price is a placeholder the user overwrites.

use url::Url;

/// Price returned alongside every derived label.
pub const PLACEHOLDER_PRICE: &str = "0.00";

/// Errors raised while deriving a label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductLabelError {
    /// The input could not be parsed as an absolute URL.
    #[error("url is not valid: {message}")]
    InvalidUrl { message: String },
    /// The URL has neither a usable path segment nor a host.
    #[error("url has no path segment to derive a name from")]
    NoSegment,
}

/// Label derived from a product URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLabel {
    pub name: String,
    pub price: &'static str,
}

/// Derive a product label from `raw_url`.
///
/// The last non-empty path segment is split on hyphens and each word gets an
/// upper-case first letter. URLs without a path fall back to the host name.
///
/// # Examples
/// ```
/// use receipts_backend::domain::derive_product_label;
///
/// let label = derive_product_label("https://example.com/store/cool-blue-widget")
///     .expect("valid url");
/// assert_eq!(label.name, "Cool Blue Widget");
/// assert_eq!(label.price, "0.00");
/// ```
pub fn derive_product_label(raw_url: &str) -> Result<ProductLabel, ProductLabelError> {
    let url = Url::parse(raw_url.trim()).map_err(|err| ProductLabelError::InvalidUrl {
        message: err.to_string(),
    })?;

    let segment = url
        .path_segments()
        .and_then(|segments| segments.filter(|segment| !segment.is_empty()).last())
        .or_else(|| url.host_str())
        .ok_or(ProductLabelError::NoSegment)?;

    let name = humanise_slug(segment);
    if name.is_empty() {
        return Err(ProductLabelError::NoSegment);
    }

    Ok(ProductLabel {
        name,
        price: PLACEHOLDER_PRICE,
    })
}

fn humanise_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalise)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
