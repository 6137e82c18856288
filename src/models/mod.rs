pub mod event;
pub mod rsvp;
pub mod zip_location;

pub use event::{Event, EventSearchResult};
pub use rsvp::Rsvp;
pub use zip_location::{Coordinate, ZipLocation};
