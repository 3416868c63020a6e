use super::DrawCmd;

/// Opaque property-tree state a paint operation was issued under.
///
/// The ids are never interpreted here: painters copy them from the input
/// record onto every operation they emit.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct StateIds {
    pub transform: i32,
    pub clip: i32,
    pub effect: i32,
}

impl StateIds {
    #[inline]
    pub const fn new(transform: i32, clip: i32, effect: i32) -> Self {
        Self { transform, clip, effect }
    }
}

/// Opaque DOM node identifier carried through to text blobs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(pub i64);

impl NodeId {
    pub const INVALID: NodeId = NodeId(0);
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// A single recorded operation: property-tree state + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub state: StateIds,
    pub cmd: DrawCmd,
}

/// Ordered paint operations produced by one paint call.
///
/// The list is append-only. Insertion order is paint order (later items
/// draw on top) and consumers must not reorder it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    items: Vec<DrawItem>,
}

impl DisplayList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns items in paint order.
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

    /// Iterates commands in paint order, without their state ids.
    #[inline]
    pub fn cmds(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|item| &item.cmd)
    }

    /// Appends a command issued under `state`.
    #[inline]
    pub fn push(&mut self, state: StateIds, cmd: DrawCmd) {
        log::trace!("push {}", cmd.name());
        self.items.push(DrawItem { state, cmd });
    }

    /// Appends every item of `other`, keeping its order after ours.
    #[inline]
    pub fn append(&mut self, other: DisplayList) {
        self.items.extend(other.items);
    }

    #[inline]
    pub fn into_items(self) -> Vec<DrawItem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DrawItem;
    type IntoIter = core::slice::Iter<'a, DrawItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
