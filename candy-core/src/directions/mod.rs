//! Turn a planned route into a walkable path.
//!
//! The `DirectionsProvider` trait abstracts the retrieval of a walking path
//! between two coordinates. [`stitch_path`] walks the consecutive waypoint
//! pairs of a [`Route`](crate::Route), joins the returned segments, and falls
//! back to a straight line for any segment the provider cannot supply.

mod error;
mod provider;
mod stitch;

pub use error::DirectionsError;
pub use provider::{DirectionsProvider, StraightLineDirections};
pub use stitch::stitch_path;
