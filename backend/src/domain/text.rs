//! Validated text values shared by the entities.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Validation errors for the text value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextValidationError {
    /// The value was empty once trimmed of whitespace.
    #[error("value must not be empty")]
    Empty,
    /// The value is not a syntactically valid email address.
    #[error("invalid email address")]
    InvalidEmail,
}

/// Non-empty human readable name (user, store, or line item name).
///
/// The original spelling is kept; only the emptiness check trims.
///
/// # Examples
/// ```
/// use receipts_backend::domain::Name;
///
/// assert!(Name::new("Corner Shop").is_ok());
/// assert!(Name::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Validate and construct a [`Name`].
    pub fn new(value: impl Into<String>) -> Result<Self, TextValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TextValidationError::Empty);
        }
        Ok(Self(value))
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

// local@domain.tld with no whitespace and exactly one `@`.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN)
        .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
});

/// Syntactically valid email address.
///
/// Comparison via [`EmailAddress::matches`] ignores ASCII case, which is how
/// the store enforces uniqueness.
///
/// # Examples
/// ```
/// use receipts_backend::domain::EmailAddress;
///
/// assert!(EmailAddress::new("ada@example.com").is_ok());
/// assert!(EmailAddress::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(value: impl Into<String>) -> Result<Self, TextValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TextValidationError::Empty);
        }
        if !EMAIL_RE.is_match(&value) {
            return Err(TextValidationError::InvalidEmail);
        }
        Ok(Self(value))
    }

    /// Borrow the address.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Case-insensitive equality used for uniqueness checks.
    pub fn matches(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}
