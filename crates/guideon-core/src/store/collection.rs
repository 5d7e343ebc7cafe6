// ── Generic ordered entity collection ──
//
// Single-threaded in-memory storage for one entity type. Ordering is part
// of the display contract: newly created entities go to the head, so the
// collection iterates newest-first. Every mutation bumps a version
// counter; value-identical entities are never touched by a mutation that
// does not target them.

use std::fmt;

/// An entity stored in an [`EntityCollection`].
pub trait Entity {
    type Id: Copy + Eq + Ord + fmt::Display;

    fn id(&self) -> Self::Id;
}

/// Ordered collection of one entity type with unique numeric identities.
#[derive(Debug, Clone)]
pub struct EntityCollection<T: Entity> {
    /// Newest-first. Uniqueness of ids is an invariant all insertion
    /// paths uphold.
    items: Vec<T>,
    /// Bumped on every mutation.
    version: u64,
}

impl<T: Entity> EntityCollection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            version: 0,
        }
    }

    /// Seed the collection. `items` are taken as already newest-first.
    pub fn with_items(items: Vec<T>) -> Self {
        Self { items, version: 0 }
    }

    /// Insert at the head (newest-first display contract).
    pub fn insert_front(&mut self, entity: T) {
        self.items.insert(0, entity);
        self.version += 1;
    }

    /// Append at the tail (child records keep arrival order).
    pub fn push(&mut self, entity: T) {
        self.items.push(entity);
        self.version += 1;
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Apply `mutate` to the matching entity. Returns `false` (and bumps
    /// nothing) if the id is absent.
    pub fn update(&mut self, id: T::Id, mutate: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|e| e.id() == id) {
            Some(entity) => {
                mutate(entity);
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Remove the matching entity, returning it if it existed.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.items.iter().position(|e| e.id() == id)?;
        self.version += 1;
        Some(self.items.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

impl<T: Entity> EntityCollection<T>
where
    T::Id: From<u64> + Into<u64>,
{
    /// Next identity: max existing id + 1, or 1 when empty. Deleting the
    /// highest entity admits a gap; ids are never recycled in a session.
    pub fn next_id(&self) -> T::Id {
        let max = self
            .items
            .iter()
            .map(|e| e.id().into())
            .max()
            .unwrap_or(0);
        T::Id::from(max + 1)
    }
}

impl<T: Entity> Default for EntityCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}
