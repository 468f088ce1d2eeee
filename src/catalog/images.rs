//! Image key resolution and random image selection.
//!
//! # Design Decisions
//! - No existence check before listing a breed prefix; an unknown breed is
//!   indistinguishable from a breed with zero images and yields an empty
//!   listing.
//! - Random-by-count re-lists the drawn breed on every iteration. That is
//!   O(count) storage calls, bounded by [`RANDOM_IMAGE_COUNT_CAP`], and keeps
//!   each draw against a live listing.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::breeds::{self, BREEDS_PREFIX};
use crate::catalog::sampler;
use crate::storage::{ObjectLister, StorageError};

/// Upper bound on images returned by the random-by-count endpoints; caps the
/// number of storage listings a single request can trigger.
pub const RANDOM_IMAGE_COUNT_CAP: usize = 50;

/// An image key paired with a human-readable alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageWithAlt {
    /// Full object key of the image.
    pub url: String,
    /// Alt text derived from the breed directory name.
    pub alt: String,
}

/// Storage prefix for a breed, optionally narrowed to a sub-breed.
fn breed_prefix(breed1: &str, breed2: Option<&str>) -> String {
    match breed2 {
        Some(sub) if !sub.is_empty() => format!("{BREEDS_PREFIX}{breed1}-{sub}"),
        _ => format!("{BREEDS_PREFIX}{breed1}"),
    }
}

/// All image keys for a breed, in store order.
pub async fn get_breed_images(
    store: &dyn ObjectLister,
    breed1: &str,
    breed2: Option<&str>,
) -> Result<Vec<String>, StorageError> {
    let prefix = breed_prefix(breed1, breed2);
    let label = format!("breed_images:{}", &prefix[BREEDS_PREFIX.len()..]);
    store.list_objects(&prefix, &label).await
}

/// One uniformly-random image for a breed; `None` when the listing is empty.
pub async fn get_breed_images_random<R: Rng>(
    store: &dyn ObjectLister,
    rng: &mut R,
    breed1: &str,
    breed2: Option<&str>,
) -> Result<Option<String>, StorageError> {
    let images = get_breed_images(store, breed1, breed2).await?;
    Ok(images.choose(rng).cloned())
}

/// Up to `count` distinct random images for a breed (shuffled listing,
/// truncated; capped at the available size).
pub async fn get_breed_images_random_count<R: Rng>(
    store: &dyn ObjectLister,
    rng: &mut R,
    breed1: &str,
    breed2: Option<&str>,
    count: usize,
) -> Result<Vec<String>, StorageError> {
    let mut images = get_breed_images(store, breed1, breed2).await?;
    sampler::shuffle(rng, &mut images);
    images.truncate(count);
    Ok(images)
}

/// One random image from one random primary breed.
///
/// Two independent uniform draws: the breed pick is NOT weighted by image
/// count. An empty catalog, or a drawn breed with no images, yields `None`.
pub async fn get_breed_image_random<R: Rng>(
    store: &dyn ObjectLister,
    rng: &mut R,
) -> Result<Option<String>, StorageError> {
    let breeds = breeds::list_main_breeds(store).await?;
    let Some(breed) = sampler::pick_random_key(rng, &breeds).map(str::to_owned) else {
        return Ok(None);
    };
    let images = get_breed_images(store, &breed, None).await?;
    Ok(images.choose(rng).cloned())
}

/// `count` independent random draws (breed, then image), capped at
/// [`RANDOM_IMAGE_COUNT_CAP`]. The same breed or image may repeat; each
/// iteration issues its own listing. Draws landing on an image-less breed
/// contribute nothing.
pub async fn get_breed_image_random_count<R: Rng>(
    store: &dyn ObjectLister,
    rng: &mut R,
    count: usize,
) -> Result<Vec<String>, StorageError> {
    let count = count.min(RANDOM_IMAGE_COUNT_CAP);
    let breeds = breeds::list_main_breeds(store).await?;
    if breeds.is_empty() {
        return Ok(Vec::new());
    }

    let mut images = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(breed) = sampler::pick_random_key(rng, &breeds).map(str::to_owned) else {
            break;
        };
        let listing = get_breed_images(store, &breed, None).await?;
        if let Some(image) = listing.choose(rng) {
            images.push(image.clone());
        }
    }
    Ok(images)
}

/// Pair image keys with alt text derived from their breed directory:
/// `breeds/husky-siberian/c.jpg` → "husky siberian dog".
pub fn with_alt(keys: Vec<String>) -> Vec<ImageWithAlt> {
    keys.into_iter()
        .map(|key| {
            let dir = key.strip_prefix(BREEDS_PREFIX).unwrap_or(&key);
            let breed = dir.split('/').next().unwrap_or(dir);
            let alt = format!("{} dog", breed.replace('-', " "));
            ImageWithAlt { url: key, alt }
        })
        .collect()
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
        ])
    }

    #[tokio::test]
    async fn test_breed_images_in_store_order() {
        let images = get_breed_images(&store(), "boxer", None).await.unwrap();
        assert_eq!(images, vec!["breeds/boxer/a.jpg", "breeds/boxer/b.jpg"]);
    }

    #[tokio::test]
    async fn test_sub_breed_narrows_the_prefix() {
        let images = get_breed_images(&store(), "husky", Some("siberian"))
            .await
            .unwrap();
        assert_eq!(images, vec!["breeds/husky-siberian/c.jpg"]);
    }

    #[tokio::test]
    async fn test_unknown_breed_yields_empty_listing() {
        let images = get_breed_images(&store(), "dingo", None).await.unwrap();
        assert!(images.is_empty());
    }

    #[tokio::test]
    async fn test_random_image_comes_from_the_breed() {
        let mut rng = StdRng::seed_from_u64(11);
        let image = get_breed_images_random(&store(), &mut rng, "boxer", None)
            .await
            .unwrap()
            .unwrap();
        assert!(image.starts_with("breeds/boxer/"));
    }

    #[tokio::test]
    async fn test_random_image_empty_listing_is_none() {
        let mut rng = StdRng::seed_from_u64(11);
        let image = get_breed_images_random(&MemoryStore::empty(), &mut rng, "boxer", None)
            .await
            .unwrap();
        assert_eq!(image, None);
    }

    #[tokio::test]
    async fn test_random_count_returns_min_of_count_and_cap() {
        let mut rng = StdRng::seed_from_u64(5);
        let images = get_breed_image_random_count(&store(), &mut rng, 3)
            .await
            .unwrap();
        assert_eq!(images.len(), 3);

        let images = get_breed_image_random_count(&store(), &mut rng, 200)
            .await
            .unwrap();
        assert_eq!(images.len(), RANDOM_IMAGE_COUNT_CAP);
    }

    #[tokio::test]
    async fn test_random_count_zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(5);
        let images = get_breed_image_random_count(&store(), &mut rng, 0)
            .await
            .unwrap();
        assert!(images.is_empty());
    }

    #[tokio::test]
    async fn test_random_count_empty_catalog_is_empty() {
        let mut rng = StdRng::seed_from_u64(5);
        let images = get_breed_image_random_count(&MemoryStore::empty(), &mut rng, 4)
            .await
            .unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn test_alt_text_uses_breed_directory() {
        let alts = with_alt(vec![
            "breeds/boxer/a.jpg".to_string(),
            "breeds/husky-siberian/c.jpg".to_string(),
        ]);
        assert_eq!(alts[0].alt, "boxer dog");
        assert_eq!(alts[1].alt, "husky siberian dog");
        assert_eq!(alts[1].url, "breeds/husky-siberian/c.jpg");
    }
}
