//! Widget implementations for the Folio document-composition engine.
//!
//! Every widget implements the [`folio_core::Widget`] protocol: layout
//! against box constraints, paint against an abstract drawing sink. The
//! containers here publish their child placements so a render pipeline
//! can mirror the tree without the widgets knowing about it.

mod container;
mod flex;
mod padding;
mod sized_box;
mod stack;
mod text;

pub use container::Container;
pub use flex::{CrossAxisAlignment, Flex, FlexFit, MainAxisAlignment, MainAxisSize};
pub use padding::Padding;
pub use sized_box::SizedBox;
pub use stack::{Stack, StackAlignment, StackFit};
pub use text::Text;
