pub mod location;
pub mod place;
pub mod requests;

// Re-export commonly used types
pub use location::{GeoPoint, PlaceLocation};
pub use place::{Geometry, NearbySearchResponse, Place, PlusCode};
pub use requests::{GrassResponse, NearbyQuery, NearbyResponse, PlaceSummary, DEFAULT_CATEGORY};
