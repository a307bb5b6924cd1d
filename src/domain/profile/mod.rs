//! Profile module - the persisted user profile and how classifications
//! are committed to it.

mod aggregate;
mod events;
mod updater;

pub use aggregate::UserProfile;
pub use events::ProfileEvent;
pub use updater::{ProfileUpdater, TerrainUpdate};
