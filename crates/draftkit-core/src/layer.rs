//! Document layers.
//!
//! A layer is an ordered list of shapes. Order is draw order: later
//! entries render on top, and hit testing walks them back-to-front.
//! Every shape gets a stable `u64` id when added; the interactive tools
//! hold ids rather than references while a shape is under construction.

use serde::{Deserialize, Serialize};

use crate::shape::BaseShape;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayerEntry {
    id: u64,
    shape: BaseShape,
}

/// An ordered shape list with an invalidation counter.
///
/// `revision` is bumped by [`Layer::invalidate`]; renderers repaint a
/// layer whenever the counter moved since their last pass. The counter is
/// runtime-only state and is not serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub visible: bool,
    entries: Vec<LayerEntry>,
    next_id: u64,
    #[serde(skip)]
    revision: u64,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            entries: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Appends a shape on top of the layer and returns its id.
    pub fn add(&mut self, shape: BaseShape) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(LayerEntry { id, shape });
        id
    }

    pub fn get(&self, id: u64) -> Option<&BaseShape> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.shape)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut BaseShape> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.shape)
    }

    /// Removes a shape by id. Removing an id that is not present is a
    /// no-op returning `None`; cancelling a tool that never staged a
    /// shape takes this path.
    pub fn remove(&mut self, id: u64) -> Option<BaseShape> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index).shape)
    }

    /// Shapes in draw order (bottom to top).
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &BaseShape> {
        self.entries.iter().map(|entry| &entry.shape)
    }

    /// `(id, shape)` pairs in draw order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u64, &BaseShape)> {
        self.entries.iter().map(|entry| (entry.id, &entry.shape))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Marks the layer dirty for renderers.
    pub fn invalidate(&mut self) {
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
