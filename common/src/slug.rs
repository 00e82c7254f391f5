//! Location naming rules and the name <-> slug mapping.
//!
//! Names are restricted to ASCII letters, digits and single spaces, which
//! keeps the mapping lossless: `Coffee Shop` <-> `coffee-shop`.

use thiserror::Error;

/// Longest accepted location name, in characters.
pub const MAX_NAME_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Location name is required")]
    Empty,
    #[error("Location name must be at most {} characters", MAX_NAME_LEN)]
    TooLong,
    #[error("Location name can only contain letters, numbers, and spaces")]
    InvalidCharacters,
}

/// Collapses whitespace runs into one space and trims both ends.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes `raw` and checks it against the naming rules.
pub fn validate_name(raw: &str) -> Result<String, NameError> {
    let name = normalize_name(raw);
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        return Err(NameError::InvalidCharacters);
    }
    Ok(name)
}

/// Case-insensitive identity of a name; two names collide iff their keys match.
pub fn name_key(name: &str) -> String {
    normalize_name(name).to_lowercase()
}

/// `Coffee Shop` -> `coffee-shop`.
pub fn slug_for(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// `coffee-shop` -> `coffee shop`. Match the result with [`name_key`].
pub fn name_from_slug(slug: &str) -> String {
    slug.replace('-', " ")
}
