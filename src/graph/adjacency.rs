//! Adjacency store — per-vertex neighbor maps, the only state a graph holds.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::types::Label;

/// Neighbor label -> edge weight.
pub type Neighbors<V> = IndexMap<V, f64>;

/// Maps each vertex to its outgoing neighbors and their weights.
///
/// The store knows nothing about direction or weighting; it records single
/// directed entries. Enumeration follows insertion order, and removals keep
/// the relative order of what remains.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyStore<V: Label> {
    entries: IndexMap<V, Neighbors<V>>,
}

impl<V: Label> AdjacencyStore<V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store has no vertices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `vertex` has a neighbor map.
    pub fn contains(&self, vertex: &V) -> bool {
        self.entries.contains_key(vertex)
    }

    /// Insert `vertex` with no neighbors. Returns false if already present.
    pub fn insert_vertex(&mut self, vertex: V) -> bool {
        match self.entries.entry(vertex) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Neighbors::new());
                true
            }
        }
    }

    /// Remove `vertex` and every entry in other maps that points at it.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.entries.shift_remove(vertex).is_none() {
            return false;
        }
        for neighbors in self.entries.values_mut() {
            neighbors.shift_remove(vertex);
        }
        true
    }

    /// Neighbor map of `vertex`.
    pub fn neighbors(&self, vertex: &V) -> Option<&Neighbors<V>> {
        self.entries.get(vertex)
    }

    /// Weight of the entry `from -> to`.
    pub fn weight(&self, from: &V, to: &V) -> Option<f64> {
        self.entries.get(from)?.get(to).copied()
    }

    /// Whether the single entry `from -> to` exists.
    pub fn has_entry(&self, from: &V, to: &V) -> bool {
        self.weight(from, to).is_some()
    }

    /// Write the entry `from -> to`. Returns false (and writes nothing) if
    /// `from` is not a vertex.
    pub(crate) fn set_entry(&mut self, from: &V, to: V, weight: f64) -> bool {
        match self.entries.get_mut(from) {
            Some(neighbors) => {
                neighbors.insert(to, weight);
                true
            }
            None => false,
        }
    }

    /// Drop the entry `from -> to`. Returns whether it existed.
    pub(crate) fn clear_entry(&mut self, from: &V, to: &V) -> bool {
        self.entries
            .get_mut(from)
            .is_some_and(|neighbors| neighbors.shift_remove(to).is_some())
    }

    /// Iterate over `(vertex, neighbors)` in store order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &Neighbors<V>)> {
        self.entries.iter()
    }

    /// Iterate over vertices in store order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.entries.keys()
    }

    /// Total number of single directed entries.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(|n| n.len()).sum()
    }
}

impl<V: Label> Default for AdjacencyStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
