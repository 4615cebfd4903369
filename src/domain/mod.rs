pub mod place;
pub mod ports;
