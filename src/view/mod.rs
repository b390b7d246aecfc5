//! View projection and the rendered dashboard.
//!
//! - [`projection`]: pure filter and paginate steps over the collection.
//! - [`render`]: the [`DashboardView`] built from store and navigation state.

pub mod projection;
pub mod render;

pub use projection::*;
pub use render::*;
