use super::ZIndex;

/// Stable sort key for draw items.
///
/// Field order gives the ordering: `z` ascending (back-to-front), then
/// `order` ascending (insertion order within a layer).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    /// Lower values are drawn first (further back).
    pub z: ZIndex,
    /// Insertion index, so equal-z items keep the order they were recorded in.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
