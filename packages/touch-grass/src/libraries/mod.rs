pub mod distance;
pub mod listing;
pub mod place_type;
