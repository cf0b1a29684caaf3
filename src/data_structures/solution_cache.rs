use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::trace;
use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::Result;

/// Counters describing how the memo has been used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub cached_origins: usize,
}

/// Single-source solutions memoized by origin vertex.
///
/// Interior mutability lets read-only queries populate the memo. The cache is
/// single-threaded (`Rc` + `RefCell`); entries are never invalidated unless
/// [`SolutionCache::clear`] is called.
#[derive(Debug, Clone)]
pub struct SolutionCache<W> {
    entries: RefCell<HashMap<usize, Rc<ShortestPathResult<W>>>>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl<W> SolutionCache<W> {
    pub fn new() -> Self {
        SolutionCache {
            entries: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Returns the cached solution for `origin`, computing and storing it on
    /// first use. A failed computation caches nothing.
    pub fn get_or_try_insert_with<F>(&self, origin: usize, compute: F) -> Result<Rc<ShortestPathResult<W>>>
    where
        F: FnOnce() -> Result<ShortestPathResult<W>>,
    {
        if let Some(solution) = self.get(origin) {
            self.hits.set(self.hits.get() + 1);
            trace!("Solution cache hit for origin {}", origin);
            return Ok(solution);
        }

        self.misses.set(self.misses.get() + 1);
        let solution = Rc::new(compute()?);
        self.entries
            .borrow_mut()
            .insert(origin, Rc::clone(&solution));
        Ok(solution)
    }

    /// Cached solution for `origin`, without computing or counting
    pub fn get(&self, origin: usize) -> Option<Rc<ShortestPathResult<W>>> {
        self.entries.borrow().get(&origin).cloned()
    }

    pub fn contains(&self, origin: usize) -> bool {
        self.entries.borrow().contains_key(&origin)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drops every cached solution; counters are kept
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
            cached_origins: self.len(),
        }
    }
}

impl<W> Default for SolutionCache<W> {
    fn default() -> Self {
        Self::new()
    }
}
