//! Core domain types for datadeck.
//!
//! This crate provides the integration kinds, the records a load returns,
//! the view state and card models derived from them, and the controller
//! that ties a load to a re-render.

pub mod controller;
pub mod error;
pub mod item;
pub mod kind;
pub mod loader;
pub mod view;

pub use controller::DataFormController;
pub use error::{LoadError, Result};
pub use item::{Credentials, ItemId, LoadedItem};
pub use kind::{IntegrationKind, ParseKindError};
pub use loader::{ItemLoader, LoadRequest};
pub use view::{
    CardName, ItemCard, ItemKey, KeyedCard, NAME_PLACEHOLDER, NO_ITEMS_NOTICE, Rendered,
    ViewState,
};
