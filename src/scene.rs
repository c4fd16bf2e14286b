//! Render set for transient screen visuals
//!
//! Circles and text are added to a [`Scene`] and addressed by the
//! [`VisualId`] handle returned from [`Scene::add`]. Removing a visual frees
//! its slot for the next addition, so rebuilding decorations on every
//! selection change never grows the scene. Handles are versioned: once a
//! visual is removed its old handle never resolves again, even after the
//! slot is reused.

use sdl2::pixels::Color;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle to a visual stored in a [`Scene`]
    pub struct VisualId;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    /// Filled circle centered on `(x, y)`
    Circle {
        x: i32,
        y: i32,
        radius: u32,
        color: Color,
        z: i32,
    },
    /// Bitmap text with its top-left corner at `(x, y)`
    Text {
        text: String,
        x: i32,
        y: i32,
        scale: u32,
        color: Color,
        z: i32,
    },
}

impl Visual {
    pub fn depth(&self) -> i32 {
        match self {
            Visual::Circle { z, .. } | Visual::Text { z, .. } => *z,
        }
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    visuals: SlotMap<VisualId, Visual>,
}

impl Scene {
    pub fn new() -> Self {
        Scene::default()
    }

    pub fn add(&mut self, visual: Visual) -> VisualId {
        self.visuals.insert(visual)
    }

    /// Returns the removed visual, or `None` if the handle is stale
    pub fn remove(&mut self, id: VisualId) -> Option<Visual> {
        self.visuals.remove(id)
    }

    pub fn get(&self, id: VisualId) -> Option<&Visual> {
        self.visuals.get(id)
    }

    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Visual> {
        self.visuals.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(z: i32) -> Visual {
        Visual::Circle {
            x: 0,
            y: 0,
            radius: 1,
            color: Color::RGB(255, 255, 255),
            z,
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut scene = Scene::new();
        let id = scene.add(dot(3));

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(id).map(Visual::depth), Some(3));
    }

    #[test]
    fn test_remove_frees_slot_for_reuse() {
        let mut scene = Scene::new();
        let first = scene.add(dot(1));
        let _second = scene.add(dot(2));

        assert!(scene.remove(first).is_some());
        assert_eq!(scene.len(), 1);
        assert!(scene.get(first).is_none());

        let third = scene.add(dot(5));
        assert_ne!(third, first);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.iter().count(), 2);
    }

    #[test]
    fn test_removed_handle_stays_dead_after_slot_reuse() {
        let mut scene = Scene::new();
        let old = scene.add(dot(7));
        scene.remove(old);

        let new = scene.add(dot(9));
        assert_eq!(scene.get(old), None);
        assert!(scene.remove(old).is_none());
        assert_eq!(scene.get(new).map(Visual::depth), Some(9));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_double_remove_is_harmless() {
        let mut scene = Scene::new();
        let id = scene.add(dot(0));

        assert!(scene.remove(id).is_some());
        assert!(scene.remove(id).is_none());
        assert_eq!(scene.len(), 0);

        let a = scene.add(dot(0));
        let b = scene.add(dot(0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_text_depth() {
        let text = Visual::Text {
            text: "WORK".to_string(),
            x: 0,
            y: 0,
            scale: 4,
            color: Color::RGB(77, 77, 77),
            z: 0,
        };
        assert_eq!(text.depth(), 0);
    }
}
