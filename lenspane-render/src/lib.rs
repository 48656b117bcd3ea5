pub mod object;
pub mod pane;

pub use object::{ChangeEvent, ObjectId, PaneObject, Placement};
pub use pane::{Pane, PaneOptions};
