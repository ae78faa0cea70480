//! The pizza: an immutable grid of ingredient labels and its coordinates.
//!
//! [`Grid`] owns the labels and the global slice [`Limits`]. Rectangles are
//! described by [`Bounds`] over [`Cell`] coordinates; both the grid and every
//! [`Slice`](crate::slice::Slice) expose their contents through the
//! [`LabeledRect`] trait.

mod bounds;
mod cell;
mod error;
#[allow(clippy::module_inception)]
mod grid;
mod ingredient;
mod limits;
mod parse;
mod traits;

pub use bounds::Bounds;
pub use cell::{Cell, Direction};
pub use error::GridError;
pub use grid::Grid;
pub use ingredient::Ingredient;
pub use limits::{Limits, Region};
pub use traits::LabeledRect;
