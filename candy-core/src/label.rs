//! Normalised candy type labels.
//!
//! Callers report candy names as free text. Matching against preferences is
//! case-insensitive and ignores surrounding whitespace, so every comparison
//! goes through [`CandyLabel`].
//!
//! # Examples
//! ```
//! use candy_core::CandyLabel;
//!
//! assert_eq!(CandyLabel::new("  KitKat ").as_str(), "kitkat");
//! assert_eq!(CandyLabel::new("Peanut Butter Cups").icon_key(), "peanut-butter-cups");
//! ```

use thiserror::Error;

/// A trimmed, lower-cased candy type label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct CandyLabel(String);

/// Errors returned when parsing a [`CandyLabel`] from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandyLabelError {
    /// The label was empty once surrounding whitespace was removed.
    #[error("candy label must not be blank")]
    Blank,
}

impl CandyLabel {
    /// Normalise a raw label: trim surrounding whitespace and lower-case it.
    ///
    /// # Examples
    /// ```
    /// use candy_core::CandyLabel;
    ///
    /// assert_eq!(CandyLabel::new("M&M's"), CandyLabel::new(" m&m's"));
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Return the normalised label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return `true` when the label carries no text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Key used to pick a marker icon: whitespace runs collapse to `-`.
    ///
    /// # Examples
    /// ```
    /// use candy_core::CandyLabel;
    ///
    /// assert_eq!(CandyLabel::new("Jelly  Beans").icon_key(), "jelly-beans");
    /// ```
    #[must_use]
    pub fn icon_key(&self) -> String {
        self.0.split_whitespace().collect::<Vec<_>>().join("-")
    }
}

impl std::fmt::Display for CandyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CandyLabel {
    type Err = CandyLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = Self::new(s);
        if label.is_blank() {
            return Err(CandyLabelError::Blank);
        }
        Ok(label)
    }
}

impl From<String> for CandyLabel {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for CandyLabel {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<CandyLabel> for String {
    fn from(label: CandyLabel) -> Self {
        label.0
    }
}
