//! UI Components
//!
//! Leptos components for the site's widgets.

pub mod actions;
pub mod chat_widget;
pub mod destination_grid;
pub mod loading;
pub mod nav;
pub mod newsletter;
pub mod search_bar;
pub mod stats;
pub mod toast;
pub mod weather_widget;

pub use chat_widget::ChatWidget;
pub use destination_grid::DestinationGrid;
pub use loading::{Loading, LoadingOverlay};
pub use nav::Nav;
pub use newsletter::Newsletter;
pub use search_bar::SearchBar;
pub use stats::Stats;
pub use toast::Toast;
pub use weather_widget::WeatherWidget;
