//! Category slugs and the display titles derived from them

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("category slug must not be empty")]
    Empty,
}

/// URL-safe category identifier taken from the CMS or the route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn parse(value: impl Into<String>) -> Result<Self, SlugError> {
        let value = value.into();
        if value.is_empty() {
            return Err(SlugError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn display_title(&self) -> String {
        derive_title(&self.0)
    }
}

impl TryFrom<String> for CategorySlug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CategorySlug> for String {
    fn from(slug: CategorySlug) -> Self {
        slug.0
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turn a slug into a display title: `-` becomes a space and every word
/// starts with an uppercase letter.
///
/// A word starts at an ASCII word character (`[A-Za-z0-9_]`) that is either
/// first in the string or follows a non-word character. Only ASCII letters
/// are uppercased; everything else passes through unchanged.
pub fn derive_title(slug: &str) -> String {
    let mut title = String::with_capacity(slug.len());
    let mut prev_is_word = false;

    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric() || c == '_';

        if is_word && !prev_is_word {
            title.push(c.to_ascii_uppercase());
        } else {
            title.push(c);
        }
        prev_is_word = is_word;
    }

    title
}
