//! The pane: an object registry plus the render loop that maps projected
//! points into pane positions.

use crate::object::{ObjectId, PaneObject, Placement};
use lenspane_core::{Identity, Point3, PointTransform};

/// Configuration accepted at pane construction.
#[derive(Clone)]
pub struct PaneOptions {
    /// Added to every mapped position. Defaults to zero.
    pub offset: Point3,
    /// Component-wise scale applied to projected points. Defaults to unit.
    pub scale: Point3,
    /// The projection policy. Defaults to the identity transform.
    pub filter: Box<dyn PointTransform>,
}

impl Default for PaneOptions {
    fn default() -> Self {
        Self {
            offset: Point3::ORIGIN,
            scale: Point3::splat(1.0),
            filter: Box::new(Identity),
        }
    }
}

struct Entry<O> {
    object: O,
    /// True only while this object's own render pass is in progress; the
    /// sole mechanism preventing notify→render→mutate loops.
    rendering: bool,
}

/// Positions a collection of host objects by projecting their 3D coordinates
/// through the configured filter.
///
/// The pane owns its objects arena-style; [`ObjectId`]s issued by
/// [`Pane::add_object`] are the handles host code keeps. All operations are
/// synchronous and single-threaded: a render call runs to completion, and
/// the per-entry in-progress flag is owned exclusively by the pane while it
/// does.
pub struct Pane<O: PaneObject> {
    entries: Vec<Entry<O>>,
    options: PaneOptions,
}

impl<O: PaneObject> Default for Pane<O> {
    fn default() -> Self {
        Self::new(PaneOptions::default())
    }
}

impl<O: PaneObject> Pane<O> {
    pub fn new(options: PaneOptions) -> Self {
        Self {
            entries: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> &PaneOptions {
        &self.options
    }

    /// Adds an object to the pane and assigns its coordinates.
    ///
    /// Coordinates accept anything convertible to [`Point3`], including
    /// short arrays whose missing components default to zero. Objects are
    /// appended in call order, which is also the order [`Pane::render_all`]
    /// visits them. Nothing is rendered yet; the first render comes from an
    /// explicit render call or a bridged change event.
    pub fn add_object(&mut self, mut object: O, coordinates: impl Into<Point3>) -> ObjectId {
        object.set_coordinates(coordinates.into());
        self.entries.push(Entry {
            object,
            rendering: false,
        });
        let id = ObjectId(self.entries.len() - 1);
        log::debug!("pane: added object {}", id.index());
        id
    }

    /// Renders every object in insertion order.
    ///
    /// Not atomic: a panicking host write-back mid-iteration leaves later
    /// objects at their previous position.
    pub fn render_all(&mut self) {
        for index in 0..self.entries.len() {
            self.render_index(index);
        }
    }

    /// Renders exactly one object.
    pub fn render_object(&mut self, id: ObjectId) {
        self.render_index(id.0);
    }

    /// Change-notification entry point.
    ///
    /// Re-renders the object unless its own render pass is in progress, in
    /// which case the notification is swallowed (the write-back mutating the
    /// object is expected traffic, not a fault).
    pub fn object_changed(&mut self, id: ObjectId) {
        if self.entries[id.0].rendering {
            log::trace!("pane: suppressed re-entrant render of object {}", id.0);
            return;
        }
        self.render_index(id.0);
    }

    /// Updates an object's coordinates and re-renders it.
    pub fn set_coordinates(&mut self, id: ObjectId, coordinates: impl Into<Point3>) {
        self.entries[id.0].object.set_coordinates(coordinates.into());
        self.object_changed(id);
    }

    /// Drains pending host change events from every object, folding each
    /// event into one [`Pane::object_changed`] call.
    pub fn poll_changes(&mut self) {
        for index in 0..self.entries.len() {
            let events = self.entries[index].object.take_events();
            for event in events {
                log::trace!("pane: object {} reported {:?}", index, event);
                self.object_changed(ObjectId(index));
            }
        }
    }

    pub fn object(&self, id: ObjectId) -> Option<&O> {
        self.entries.get(id.0).map(|entry| &entry.object)
    }

    /// Mutable access to a registered object.
    ///
    /// The pane cannot see mutations made through this; callers changing
    /// rendering-relevant state must follow up with
    /// [`Pane::object_changed`].
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut O> {
        self.entries.get_mut(id.0).map(|entry| &mut entry.object)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> {
        (0..self.entries.len()).map(ObjectId)
    }

    fn render_index(&mut self, index: usize) {
        self.entries[index].rendering = true;

        let coordinates = self.entries[index].object.coordinates();
        let projected = self.options.filter.transform(coordinates);
        let mapped = projected.scale(&self.options.scale) + self.options.offset;
        let (width, height) = self.entries[index].object.size();
        let placement = Placement {
            left: mapped.x - width / 2.0,
            top: mapped.y - height / 2.0,
            stack_order: mapped.z,
        };
        log::trace!(
            "pane: object {} at {:?} placed at ({}, {})",
            index,
            coordinates,
            placement.left,
            placement.top
        );
        self.entries[index].object.apply_placement(placement);

        // The write-back is itself a state mutation; route any events it
        // emitted through the guard while the flag is still set so nested
        // notifications are swallowed rather than queued.
        let nested = self.entries[index].object.take_events();
        for _event in nested {
            self.object_changed(ObjectId(index));
        }

        self.entries[index].rendering = false;
    }
}
