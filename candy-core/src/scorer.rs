//! Score candy locations against a visitor's preferences.
//!
//! The `Scorer` trait assigns a net preference score to a
//! [`CandyLocation`](crate::CandyLocation) given the visitor's
//! [`Preferences`](crate::Preferences). Only locations with a strictly
//! positive score are worth a detour.

use crate::{CandyLocation, Preferences};

/// Calculate a preference score for a candy location.
///
/// Higher scores indicate a better match between the reported candy and the
/// visitor's preferences. Implementations must be thread-safe (`Send` +
/// `Sync`) and infallible; a location with no matching labels scores `0`.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use candy_core::{CandyLocation, Preferences, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _location: &CandyLocation, _preferences: &Preferences) -> i64 {
///         1
///     }
/// }
///
/// let house = CandyLocation::without_labels("1", Coord { x: 0.0, y: 0.0 });
/// assert_eq!(FlatScorer.score(&house, &Preferences::new()), 1);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `location` according to `preferences`.
    fn score(&self, location: &CandyLocation, preferences: &Preferences) -> i64;
}

/// Count desired label occurrences and subtract undesired ones.
///
/// Each reported label is normalised before lookup. A repeated label counts
/// once per occurrence, and a label sitting in both preference sets cancels
/// itself out.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use candy_core::{CandyLocation, PreferenceScorer, Preferences, Scorer};
///
/// let house = CandyLocation::new(
///     "1",
///     Coord { x: 0.0, y: 0.0 },
///     vec!["KitKat".into(), "Mars".into(), "Licorice".into()],
/// );
/// let prefs = Preferences::new()
///     .desiring("kitkat")
///     .desiring("mars")
///     .avoiding("licorice");
/// assert_eq!(PreferenceScorer.score(&house, &prefs), 1);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct PreferenceScorer;

impl Scorer for PreferenceScorer {
    fn score(&self, location: &CandyLocation, preferences: &Preferences) -> i64 {
        location.normalised_labels().fold(0_i64, |score, label| {
            let liked = i64::from(preferences.is_desired(&label));
            let disliked = i64::from(preferences.is_undesired(&label));
            score.saturating_add(liked).saturating_sub(disliked)
        })
    }
}
