use alloc::vec::Vec;

use crate::Rect;

/// The single surface holding caller content.
///
/// The engine only decides where the surface sits (always the central tile) and how large it is
/// (the logical content size). What it holds is up to the caller: `C` is opaque here.
#[derive(Clone, Debug)]
pub struct ContentSurface<C> {
    frame: Rect,
    children: Vec<C>,
}

impl<C> ContentSurface<C> {
    pub(crate) fn new() -> Self {
        Self {
            frame: Rect::default(),
            children: Vec::new(),
        }
    }

    /// Frame in tiled-content coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn add_child(&mut self, child: C) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[C] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [C] {
        &mut self.children
    }

    pub fn remove_child(&mut self, index: usize) -> Option<C> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
