//! Uniform random selection over breed maps.
//!
//! # Design Decisions
//! - Every function takes the random source as `&mut impl Rng` so tests can
//!   inject a seeded generator and production can pass `thread_rng()`.
//! - Empty inputs yield `None`/empty results, never a panic. Callers decide
//!   whether absence is a not-found condition.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::breeds::BreedMap;

/// Pick one key uniformly from the map's current key order.
pub fn pick_random_key<'a, R: Rng>(rng: &mut R, map: &'a BreedMap) -> Option<&'a str> {
    if map.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..map.len());
    map.get_index(index).map(|(key, _)| key.as_str())
}

/// Uniform in-place permutation (Fisher–Yates).
pub fn shuffle<R: Rng, T>(rng: &mut R, items: &mut [T]) {
    items.shuffle(rng);
}

/// Shuffle the map's top-level keys and keep the first `count` entries.
///
/// `count == 0` keeps the full shuffled set; a `count` beyond the key count
/// is silently capped. Sub-breed lists are carried over unpermuted.
pub fn shuffle_and_take<R: Rng>(rng: &mut R, map: &BreedMap, count: usize) -> BreedMap {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.shuffle(rng);
    if count > 0 && count < keys.len() {
        keys.truncate(count);
    }
    keys.into_iter()
        .map(|key| (key.clone(), map.get(key).cloned().unwrap_or_default()))
        .collect()
}
