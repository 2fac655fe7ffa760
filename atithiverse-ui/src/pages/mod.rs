//! Pages
//!
//! Top-level page components for each route.

pub mod destination;
pub mod home;

pub use destination::DestinationPage;
pub use home::Home;
