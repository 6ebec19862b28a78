//! Candy preferences: the labels a visitor wants and the ones they avoid.
//!
//! The toggling mutators keep the two sets disjoint, matching how the map UI
//! evicts a label from one list when it is ticked in the other.
//! [`Preferences::from_sets`] trusts its input; scoring treats membership in
//! each set independently either way.

use std::collections::BTreeSet;

use crate::CandyLabel;

/// Desired and undesired candy labels.
///
/// # Examples
/// ```
/// use candy_core::{CandyLabel, Preferences};
///
/// let prefs = Preferences::new().desiring("KitKat").avoiding("Licorice");
/// assert!(prefs.is_desired(&CandyLabel::new("kitkat")));
/// assert!(prefs.is_undesired(&CandyLabel::new("licorice")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    desired: BTreeSet<CandyLabel>,
    undesired: BTreeSet<CandyLabel>,
}

impl Preferences {
    /// Construct empty preferences.
    ///
    /// # Examples
    /// ```
    /// use candy_core::Preferences;
    ///
    /// assert!(Preferences::new().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build preferences from two sets without reconciling overlaps.
    ///
    /// A label present in both sets counts for and against a location.
    #[must_use]
    pub const fn from_sets(desired: BTreeSet<CandyLabel>, undesired: BTreeSet<CandyLabel>) -> Self {
        Self { desired, undesired }
    }

    /// Mark a label as desired, removing it from the undesired set.
    pub fn desire(&mut self, label: impl Into<CandyLabel>) {
        let normalised = label.into();
        self.undesired.remove(&normalised);
        self.desired.insert(normalised);
    }

    /// Mark a label as undesired, removing it from the desired set.
    pub fn avoid(&mut self, label: impl Into<CandyLabel>) {
        let normalised = label.into();
        self.desired.remove(&normalised);
        self.undesired.insert(normalised);
    }

    /// Drop a label from both sets.
    pub fn clear(&mut self, label: &CandyLabel) {
        self.desired.remove(label);
        self.undesired.remove(label);
    }

    /// Chaining form of [`Preferences::desire`].
    #[must_use]
    pub fn desiring(mut self, label: impl Into<CandyLabel>) -> Self {
        self.desire(label);
        self
    }

    /// Chaining form of [`Preferences::avoid`].
    #[must_use]
    pub fn avoiding(mut self, label: impl Into<CandyLabel>) -> Self {
        self.avoid(label);
        self
    }

    /// Return `true` when the label is desired.
    #[must_use]
    pub fn is_desired(&self, label: &CandyLabel) -> bool {
        self.desired.contains(label)
    }

    /// Return `true` when the label is undesired.
    #[must_use]
    pub fn is_undesired(&self, label: &CandyLabel) -> bool {
        self.undesired.contains(label)
    }

    /// Desired labels in sorted order.
    #[must_use]
    pub const fn desired(&self) -> &BTreeSet<CandyLabel> {
        &self.desired
    }

    /// Undesired labels in sorted order.
    #[must_use]
    pub const fn undesired(&self) -> &BTreeSet<CandyLabel> {
        &self.undesired
    }

    /// Return `true` when no preference has been expressed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.desired.is_empty() && self.undesired.is_empty()
    }

    /// Labels that appear in both sets.
    pub fn overlapping(&self) -> impl Iterator<Item = &CandyLabel> {
        self.desired.intersection(&self.undesired)
    }
}
