pub mod client;
pub mod transform;

pub use crate::domain::place::Place;
pub use crate::domain::ports::{FetchObserver, PlacesApi};
pub use crate::utils::error::Result;
pub use client::{PlacesClient, DEFAULT_CATEGORIES};
