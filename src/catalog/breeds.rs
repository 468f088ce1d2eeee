//! Breed map construction from bucket listings.
//!
//! Bucket keys are laid out as `breeds/<breed>[-<subbreed>]/<file>`, so a
//! one-level common-prefix listing under `breeds/` yields one entry per
//! breed directory. Entries split on the first hyphen into primary breed and
//! optional sub-breed.

use indexmap::IndexMap;
use rand::Rng;

use crate::catalog::sampler;
use crate::storage::{ObjectLister, StorageError};

/// Prefix under which all breed directories live.
pub const BREEDS_PREFIX: &str = "breeds/";

/// Path separator used for one-level listings.
pub const DELIMITER: &str = "/";

/// Primary breed → ordered sub-breed tokens. A breed without sub-breeds maps
/// to an empty list, never an absent entry.
pub type BreedMap = IndexMap<String, Vec<String>>;

/// Split a listing entry (`breeds/<breed>[-<sub>]/`) into primary breed and
/// optional sub-breed. The split is on the first hyphen only.
fn split_entry(entry: &str) -> (&str, Option<&str>) {
    let name = entry
        .strip_prefix(BREEDS_PREFIX)
        .unwrap_or(entry)
        .trim_end_matches(DELIMITER);
    match name.split_once('-') {
        Some((primary, sub)) => (primary, Some(sub)),
        None => (name, None),
    }
}

/// All breeds with their sub-breeds, grouped in listing order.
pub async fn list_all_breeds(store: &dyn ObjectLister) -> Result<BreedMap, StorageError> {
    let entries = store
        .list_common_prefixes(DELIMITER, BREEDS_PREFIX, "list_all_breeds")
        .await?;

    let mut breeds = BreedMap::new();
    for entry in &entries {
        let (primary, sub) = split_entry(entry);
        let subs = breeds.entry(primary.to_string()).or_default();
        if let Some(sub) = sub {
            subs.push(sub.to_string());
        }
    }
    Ok(breeds)
}

/// Primary breeds only; every key maps to an empty list.
pub async fn list_main_breeds(store: &dyn ObjectLister) -> Result<BreedMap, StorageError> {
    let entries = store
        .list_common_prefixes(DELIMITER, BREEDS_PREFIX, "list_main_breeds")
        .await?;

    let mut breeds = BreedMap::new();
    for entry in &entries {
        let (primary, _) = split_entry(entry);
        breeds.entry(primary.to_string()).or_default();
    }
    Ok(breeds)
}

/// Sub-breeds of one primary breed, in listing order.
///
/// The store offers no server-side filtering, so this re-issues the full
/// listing and keeps only matching entries. An unknown breed yields an empty
/// map.
pub async fn list_sub_breeds(
    store: &dyn ObjectLister,
    breed1: &str,
) -> Result<BreedMap, StorageError> {
    let label = format!("list_sub_breeds:{breed1}");
    let entries = store
        .list_common_prefixes(DELIMITER, BREEDS_PREFIX, &label)
        .await?;

    let mut breeds = BreedMap::new();
    for entry in &entries {
        let (primary, sub) = split_entry(entry);
        if primary != breed1 {
            continue;
        }
        let subs = breeds.entry(primary.to_string()).or_default();
        if let Some(sub) = sub {
            subs.push(sub.to_string());
        }
    }
    Ok(breeds)
}

/// Random selection over the full breed map.
///
/// `count == 1` picks a single entry uniformly (empty map on an empty
/// catalog); otherwise the whole map is shuffled and truncated to `count`.
pub async fn list_random_breeds_with_sub<R: Rng>(
    store: &dyn ObjectLister,
    rng: &mut R,
    count: usize,
) -> Result<BreedMap, StorageError> {
    let breeds = list_all_breeds(store).await?;
    Ok(random_subset(rng, &breeds, count))
}

/// Random selection over primary breeds only.
pub async fn list_random_main_breeds<R: Rng>(
    store: &dyn ObjectLister,
    rng: &mut R,
    count: usize,
) -> Result<BreedMap, StorageError> {
    let breeds = list_main_breeds(store).await?;
    Ok(random_subset(rng, &breeds, count))
}

/// Random selection of sub-breed tokens for one primary breed.
///
/// Shuffles the breed's sub-breed list and truncates to `count`, capped at
/// the available size. Unknown breeds and breeds without sub-breeds yield an
/// empty list.
pub async fn list_random_sub_breeds<R: Rng>(
    store: &dyn ObjectLister,
    rng: &mut R,
    breed1: &str,
    count: usize,
) -> Result<Vec<String>, StorageError> {
    let breeds = list_sub_breeds(store, breed1).await?;
    let Some(key) = sampler::pick_random_key(rng, &breeds).map(str::to_owned) else {
        return Ok(Vec::new());
    };

    let mut subs = breeds.get(&key).cloned().unwrap_or_default();
    sampler::shuffle(rng, &mut subs);
    subs.truncate(count.min(subs.len()));
    Ok(subs)
}

fn random_subset<R: Rng>(rng: &mut R, breeds: &BreedMap, count: usize) -> BreedMap {
    if count == 1 {
        let mut result = BreedMap::new();
        if let Some(key) = sampler::pick_random_key(rng, breeds).map(str::to_owned) {
            let subs = breeds.get(&key).cloned().unwrap_or_default();
            result.insert(key, subs);
        }
        return result;
    }
    sampler::shuffle_and_take(rng, breeds, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store() -> MemoryStore {
        MemoryStore::new([
            "breeds/boxer/a.jpg",
            "breeds/boxer/b.jpg",
            "breeds/husky-siberian/c.jpg",
            "breeds/husky-alaskan/d.jpg",
            "breeds/poodle/e.jpg",
        ])
    }

    #[tokio::test]
    async fn test_list_all_breeds_groups_sub_breeds() {
        let breeds = list_all_breeds(&store()).await.unwrap();
        assert_eq!(breeds.len(), 3);
        assert_eq!(breeds["boxer"], Vec::<String>::new());
        assert_eq!(breeds["husky"], vec!["siberian", "alaskan"]);
        assert_eq!(breeds["poodle"], Vec::<String>::new());
    }

    #[tokio::test]
    async fn test_breed_seen_bare_and_hyphenated_appears_once() {
        let store = MemoryStore::new(["breeds/husky/a.jpg", "breeds/husky-siberian/b.jpg"]);
        let breeds = list_all_breeds(&store).await.unwrap();
        assert_eq!(breeds.len(), 1);
        assert_eq!(breeds["husky"], vec!["siberian"]);
    }

    #[tokio::test]
    async fn test_list_main_breeds_discards_sub_breeds() {
        let breeds = list_main_breeds(&store()).await.unwrap();
        assert_eq!(breeds.len(), 3);
        for subs in breeds.values() {
            assert!(subs.is_empty());
        }
    }

    #[tokio::test]
    async fn test_list_sub_breeds_filters_client_side() {
        let breeds = list_sub_breeds(&store(), "husky").await.unwrap();
        assert_eq!(breeds.len(), 1);
        assert_eq!(breeds["husky"], vec!["siberian", "alaskan"]);
    }

    #[tokio::test]
    async fn test_list_sub_breeds_unknown_breed_is_empty() {
        let breeds = list_sub_breeds(&store(), "dingo").await.unwrap();
        assert!(breeds.is_empty());
    }

    #[tokio::test]
    async fn test_random_single_breed_comes_from_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = list_random_breeds_with_sub(&store(), &mut rng, 1)
            .await
            .unwrap();
        assert_eq!(picked.len(), 1);
        let all = list_all_breeds(&store()).await.unwrap();
        let (key, subs) = picked.first().unwrap();
        assert_eq!(&all[key], subs);
    }

    #[tokio::test]
    async fn test_random_single_breed_on_empty_catalog_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = list_random_breeds_with_sub(&MemoryStore::empty(), &mut rng, 1)
            .await
            .unwrap();
        assert!(picked.is_empty());
    }

    #[tokio::test]
    async fn test_random_sub_breeds_capped_at_available() {
        let mut rng = StdRng::seed_from_u64(7);
        let subs = list_random_sub_breeds(&store(), &mut rng, "husky", 10)
            .await
            .unwrap();
        let mut sorted = subs.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["alaskan", "siberian"]);
    }

    #[tokio::test]
    async fn test_random_sub_breeds_zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let subs = list_random_sub_breeds(&store(), &mut rng, "husky", 0)
            .await
            .unwrap();
        assert!(subs.is_empty());
    }
}
