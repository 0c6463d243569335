//! Card locations.
//!
//! ## Key Types
//!
//! - `LocationId`: structured key over (kind, suit, player)
//! - `Location`: ordered pile with add/draw/extract/peek
//! - `LocationManager`: owns all locations of a game and moves cards

pub mod location;
pub mod manager;

pub use location::{make_location_key, Location, LocationId, LocationKind};
pub use manager::LocationManager;
