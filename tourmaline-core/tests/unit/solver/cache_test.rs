use super::*;
use crate::utils::RouteError;
use std::sync::atomic::{AtomicUsize, Ordering};

fn create_loader(loads: &AtomicUsize) -> impl FnOnce() -> RouteResult<MapData<&'static str>> + '_ {
    move || {
        loads.fetch_add(1, Ordering::SeqCst);
        Ok(MapData { graph: AdjacencyGraph::default(), coordinates: CoordinateIndex::default() })
    }
}

#[test]
fn can_load_place_once() {
    let cache = MapCache::<&'static str>::default();
    let loads = AtomicUsize::new(0);

    cache.get_or_load("hanoi", create_loader(&loads)).unwrap();
    cache.get_or_load("hanoi", create_loader(&loads)).unwrap();

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert_eq!(cache.size(), 1);
}

#[test]
fn can_reload_after_invalidation() {
    let cache = MapCache::<&'static str>::default();
    let loads = AtomicUsize::new(0);

    cache.get_or_load("hanoi", create_loader(&loads)).unwrap();
    cache.invalidate("hanoi");
    cache.get_or_load("hanoi", create_loader(&loads)).unwrap();

    assert_eq!(loads.load(Ordering::SeqCst), 2);
}

#[test]
fn can_keep_places_separate() {
    let cache = MapCache::<&'static str>::default();
    let loads = AtomicUsize::new(0);

    cache.get_or_load("hanoi", create_loader(&loads)).unwrap();
    cache.get_or_load("saigon", create_loader(&loads)).unwrap();

    assert_eq!(loads.load(Ordering::SeqCst), 2);
    assert_eq!(cache.size(), 2);
}

#[test]
fn can_clear_all_entries() {
    let cache = MapCache::<&'static str>::default();
    let loads = AtomicUsize::new(0);

    cache.get_or_load("hanoi", create_loader(&loads)).unwrap();
    cache.clear();

    assert_eq!(cache.size(), 0);
}

#[test]
fn can_propagate_loader_failure() {
    let cache = MapCache::<&'static str>::default();

    let result = cache.get_or_load("atlantis", || Err(RouteError::InvalidInput("no such place".to_string())));

    assert!(result.is_err());
    assert_eq!(cache.size(), 0);
}
