#[cfg(test)]
#[path = "../../tests/unit/solver/cache_test.rs"]
mod cache_test;

use crate::models::{AdjacencyGraph, CoordinateIndex, NodeId};
use crate::utils::RouteResult;
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

/// A loaded road network: the graph plus the geometry of its nodes.
pub struct MapData<N: NodeId> {
    /// The road graph.
    pub graph: AdjacencyGraph<N>,
    /// Geometry of the graph nodes.
    pub coordinates: CoordinateIndex<N>,
}

/// A read mostly cache of loaded map data keyed by place name.
///
/// Loading a road network is expensive, so entries are shared via `Arc` and reused
/// across requests. Writes happen only on a miss or an explicit invalidation, and
/// an entry is fully built before the write lock is taken, so readers never observe
/// a partially loaded network. Reloading concurrently with in-flight reads is safe:
/// old readers keep their `Arc` until they drop it.
pub struct MapCache<N: NodeId> {
    entries: RwLock<FxHashMap<String, Arc<MapData<N>>>>,
}

impl<N: NodeId> Default for MapCache<N> {
    fn default() -> Self {
        Self { entries: RwLock::new(FxHashMap::default()) }
    }
}

impl<N: NodeId> MapCache<N> {
    /// Returns the cached entry of the place or builds it with the loader.
    pub fn get_or_load<F>(&self, place: &str, loader: F) -> RouteResult<Arc<MapData<N>>>
    where
        F: FnOnce() -> RouteResult<MapData<N>>,
    {
        if let Some(found) = self.entries.read().expect("cannot lock cache").get(place) {
            return Ok(found.clone());
        }

        let loaded = Arc::new(loader()?);
        let mut entries = self.entries.write().expect("cannot lock cache");

        // another request may have loaded the place meanwhile, keep the first entry
        Ok(entries.entry(place.to_string()).or_insert(loaded).clone())
    }

    /// Drops the entry of the place so the next request reloads it.
    pub fn invalidate(&self, place: &str) {
        self.entries.write().expect("cannot lock cache").remove(place);
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries.write().expect("cannot lock cache").clear();
    }

    /// Returns amount of cached places.
    pub fn size(&self) -> usize {
        self.entries.read().expect("cannot lock cache").len()
    }
}
