//! A sortable list widget for egui. Items are reordered by dragging them to a new position.
//!
//! [SortableList] owns the items and draws them, [DragSession] holds the state of a single drag
//! gesture and [utils::move_item] performs the actual move.

pub use error::SortError;
pub use props::{ItemProps, WrapProps};
pub use session::{hit_test, resolve_destination, DragSession, DropOutcome, HoverTarget, Placement};
pub use state::{DragEvent, DragIndices, SortableList, SortableResponse};

mod error;
mod props;
mod session;
mod state;

pub mod utils;
