//! The boundary between the pane and the host layer's visual objects.

use lenspane_core::Point3;

/// Handle to an object registered with a [`crate::Pane`].
///
/// Ids are issued by `add_object` in insertion order and stay valid for the
/// pane's lifetime (objects are never removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Change events the host layer emits for an object.
///
/// Both kinds fold into the same re-render; they are distinguished only so
/// hosts can report what actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The object's content finished loading.
    ContentLoaded,
    /// A rendering-relevant property (style, class, size) changed.
    AppearanceChanged,
}

/// The position a render pass writes back onto an object.
///
/// `left`/`top` address the object's top-left corner; the pane subtracts half
/// the object's size so that its coordinates address the geometric center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub stack_order: f64,
}

/// A host visual object positioned by a pane.
///
/// The pane reads `coordinates` and `size`, and writes the computed
/// [`Placement`] back through `apply_placement`. Hosts report state changes
/// by queueing [`ChangeEvent`]s; the pane drains them via `take_events`
/// (from [`crate::Pane::poll_changes`], and immediately after each placement
/// write-back so nested notifications hit the re-entrancy guard).
pub trait PaneObject {
    /// The object's position in the pane's logical 3D space.
    fn coordinates(&self) -> Point3;

    fn set_coordinates(&mut self, coordinates: Point3);

    /// Intrinsic size as (width, height).
    fn size(&self) -> (f64, f64);

    /// Write the computed pane position onto the object.
    ///
    /// If this mutates host state that normally fires an appearance event,
    /// the implementation should queue that event like any other; the pane
    /// suppresses it while the object's own render pass is in progress.
    fn apply_placement(&mut self, placement: Placement);

    /// Drain change events queued since the last call.
    ///
    /// The default implementation reports none, for hosts that only notify
    /// through explicit pane calls.
    fn take_events(&mut self) -> Vec<ChangeEvent> {
        Vec::new()
    }
}
