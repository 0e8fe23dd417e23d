//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route,
//! along with any server functions specific to that page.

pub mod data_form;
pub mod home;

pub use data_form::{DataForm, ItemCard, load_integration_items};
pub use home::HomePage;
