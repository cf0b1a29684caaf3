use std::collections::BTreeSet;
use std::fmt::Debug;

/// Working set of tentatively labelled vertices ordered by `(priority, vertex)`.
///
/// Unlike a binary heap this supports removing a vertex's stale entry when its
/// priority decreases, so each vertex appears at most once if callers remove
/// before re-inserting.
#[derive(Debug, Clone)]
pub struct OrderedWorkingSet<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    entries: BTreeSet<(P, V)>,
}

impl<V, P> OrderedWorkingSet<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty working set
    pub fn new() -> Self {
        OrderedWorkingSet {
            entries: BTreeSet::new(),
        }
    }

    /// Returns true if the working set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the working set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts a vertex with the given priority. Returns false if that exact
    /// entry was already present.
    pub fn insert(&mut self, vertex: V, priority: P) -> bool {
        self.entries.insert((priority, vertex))
    }

    /// Removes the entry for a vertex at the given priority, if present
    pub fn remove(&mut self, vertex: V, priority: P) -> bool {
        self.entries.remove(&(priority, vertex))
    }

    /// Removes and returns the entry with the smallest priority; ties go to the
    /// smallest vertex
    pub fn pop_min(&mut self) -> Option<(V, P)> {
        self.entries.pop_first().map(|(priority, vertex)| (vertex, priority))
    }

    /// Returns the smallest entry without removing it
    pub fn peek_min(&self) -> Option<(V, P)> {
        self.entries.first().map(|&(priority, vertex)| (vertex, priority))
    }

    /// Clears the working set
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<V, P> Default for OrderedWorkingSet<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
