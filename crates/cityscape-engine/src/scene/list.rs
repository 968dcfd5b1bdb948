use crate::coords::Transform;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + placement transform.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Transform applied to the command's geometry at tessellation time.
    pub transform: Transform,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Transforms
///
/// Use [`push_transform`](Self::push_transform) / [`pop_transform`](Self::pop_transform)
/// to place a group of commands in a local frame. Transforms compose with the
/// current parent, so nested groups work like a matrix stack.
///
/// ```ignore
/// draw_list.push_transform(Transform::translate(train_x, 162.0));
/// // ... push car bodies in car-local coordinates ...
/// draw_list.pop_transform();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active transforms. The top is the effective transform,
    /// already composed with all parents.
    transform_stack: Vec<Transform>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the transform stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.transform_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item captures the current transform from the transform stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            transform: self.current_transform(),
        });

        self.sorted_dirty = true;
    }

    /// Returns the effective transform for newly pushed commands.
    #[inline]
    pub fn current_transform(&self) -> Transform {
        self.transform_stack.last().copied().unwrap_or(Transform::IDENTITY)
    }

    /// Begins a transformed group. `t` is applied inside the current transform.
    ///
    /// Calls must be balanced with [`pop_transform`](Self::pop_transform).
    #[inline]
    pub fn push_transform(&mut self, t: Transform) {
        let effective = self.current_transform().then(t);
        self.transform_stack.push(effective);
    }

    /// Ends the most recent group started by [`push_transform`](Self::push_transform).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_transform`.
    #[inline]
    pub fn pop_transform(&mut self) {
        debug_assert!(
            !self.transform_stack.is_empty(),
            "pop_transform called without matching push_transform"
        );
        self.transform_stack.pop();
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;

    fn z(v: i32) -> ZIndex {
        ZIndex::new(v)
    }

    fn rect_x(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Rect(r) => r.rect.origin.x,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(z(2), Rect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0));
        dl.push_solid_rect(z(1), Rect::new(1.0, 0.0, 1.0, 1.0), Color::rgb(0.0, 1.0, 0.0));
        dl.push_solid_rect(z(1), Rect::new(2.0, 0.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 1.0));

        let xs: Vec<f32> = dl.iter_in_paint_order().map(rect_x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn indices_follow_paint_order() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(z(5), Rect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(1.0, 1.0, 1.0));
        dl.push_solid_rect(z(0), Rect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(dl.indices_in_paint_order(), &[1, 0]);
    }

    #[test]
    fn items_capture_current_transform() {
        let mut dl = DrawList::new();
        dl.push_transform(Transform::translate(10.0, 20.0));
        dl.push_solid_rect(z(0), Rect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(1.0, 1.0, 1.0));
        dl.pop_transform();
        dl.push_solid_rect(z(0), Rect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(1.0, 1.0, 1.0));

        assert_eq!(dl.items()[0].transform.translate, Vec2::new(10.0, 20.0));
        assert!(dl.items()[1].transform.is_identity());
    }

    #[test]
    fn nested_transforms_compose() {
        let mut dl = DrawList::new();
        dl.push_transform(Transform::translate(100.0, 0.0));
        dl.push_transform(Transform::scale(2.0, 2.0));
        let t = dl.current_transform();
        assert_eq!(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(102.0, 2.0));
        dl.pop_transform();
        dl.pop_transform();
        assert!(dl.current_transform().is_identity());
    }

    #[test]
    fn clear_resets_items_and_transforms() {
        let mut dl = DrawList::new();
        dl.push_transform(Transform::translate(1.0, 1.0));
        dl.push_solid_rect(z(0), Rect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(1.0, 1.0, 1.0));
        dl.clear();
        assert!(dl.is_empty());
        assert!(dl.current_transform().is_identity());
    }
}
