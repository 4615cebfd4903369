pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;
pub use config::ClientConfig;
pub use core::client::{PlacesClient, DEFAULT_CATEGORIES};
pub use domain::place::Place;
pub use domain::ports::{FetchObserver, PlacesApi, TracingObserver};
pub use utils::error::{PlacesError, Result};
