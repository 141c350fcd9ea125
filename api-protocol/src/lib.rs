//! Wire types for the travel backend: the flight-search endpoint and the
//! location-lookup endpoint. Both speak JSON over POST.

pub mod flights;
pub mod location;

pub use flights::{Flight, SearchQuery};
pub use location::{LocationInfo, LocationQuery};
