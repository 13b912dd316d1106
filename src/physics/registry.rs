use super::body::Body;

/// Host-owned entity handle. The JS side mints these (one per draggable
/// element); the core only stores them.
pub type EntityId = u32;

/// Live mapping from entity handle to kinematic state.
///
/// Backed by a Vec so iteration order is insertion order. Commands only run
/// between frames, so the entry list is frozen for the duration of a tick and
/// the pair loop visits each unordered pair exactly once in a stable order.
pub struct BodyRegistry {
    entries: Vec<(EntityId, Body)>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert or overwrite the body for `id`. Overwrite keeps the entity's
    /// original slot in the iteration order.
    pub fn insert(&mut self, id: EntityId, body: Body) {
        if let Some(entry) = self.entries.iter_mut().find(|(eid, _)| *eid == id) {
            entry.1 = body;
        } else {
            self.entries.push((id, body));
        }
    }

    /// Remove the body for `id`. Missing ids are a no-op; returns whether
    /// anything was removed. Order of the survivors is preserved.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(eid, _)| *eid != id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.iter().any(|(eid, _)| *eid == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Body> {
        self.entries.iter().find(|(eid, _)| *eid == id).map(|(_, b)| b)
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

    pub fn iter(&self) -> impl Iterator<Item = &(EntityId, Body)> {
        self.entries.iter()
    }

    /// Entry by tick-stable index.
    pub fn entry_at_mut(&mut self, index: usize) -> (EntityId, &mut Body) {
        let (id, body) = &mut self.entries[index];
        (*id, body)
    }

    /// Two distinct bodies by index, for pairwise resolution. `i < j`.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        debug_assert!(i < j);
        let (head, tail) = self.entries.split_at_mut(j);
        (&mut head[i].1, &mut tail[0].1)
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
