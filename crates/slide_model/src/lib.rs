//! Slide Model - Presentation themes and shape elements
//!
//! This crate holds the state of a deck theme and of the shapes placed on a
//! slide, and turns both into the JSON descriptors read by the renderer.
//! Everything here is plain in-memory data with pure derivations.

mod element;
mod element_id;
mod error;
pub mod config;
pub mod shape;
pub mod theme;

pub use element::*;
pub use element_id::*;
pub use error::*;
pub use config::RenderSettings;
pub use shape::*;
pub use theme::*;
