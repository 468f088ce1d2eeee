//! Endpoint dispatch.
//!
//! # Responsibilities
//! - Translate a matched endpoint + validated params into catalog calls
//! - Convert absence sentinels into not-found responses
//!
//! # Design Decisions
//! - One fresh unseeded StdRng per dispatch; it is Send, so holding it
//!   across listing awaits keeps handler futures spawnable
//! - Storage errors bubble out of dispatch untouched; the server boundary
//!   logs them and renders the generic upstream error

use axum::response::Response;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::{breeds, images};
use crate::http::response;
use crate::routing::{Endpoint, Params};
use crate::storage::{ObjectLister, StorageError};

/// Run the selected endpoint against the store and shape its response.
pub async fn dispatch(
    endpoint: Endpoint,
    params: Params,
    store: &dyn ObjectLister,
) -> Result<Response, StorageError> {
    let mut rng = StdRng::from_entropy();
    let breed1 = params.breed1.as_deref().unwrap_or_default();
    let breed2 = params.breed2.as_deref();
    let count = params.count.unwrap_or(1);

    match endpoint {
        Endpoint::BreedsListAll => {
            let all = breeds::list_all_breeds(store).await?;
            Ok(response::success_map(all))
        }
        Endpoint::BreedsListAllRandom => {
            let picked = breeds::list_random_breeds_with_sub(store, &mut rng, 1).await?;
            if picked.is_empty() {
                return Ok(response::breed_not_found());
            }
            Ok(response::success_map(picked))
        }
        Endpoint::BreedsListAllRandomCount => {
            let picked = breeds::list_random_breeds_with_sub(store, &mut rng, count).await?;
            Ok(response::success_map(picked))
        }
        Endpoint::BreedsList => {
            let main = breeds::list_main_breeds(store).await?;
            Ok(response::success_list(main.keys().cloned().collect()))
        }
        Endpoint::BreedsListRandom => {
            let picked = breeds::list_random_main_breeds(store, &mut rng, 1).await?;
            match picked.keys().next() {
                Some(breed) => Ok(response::success_text(breed)),
                None => Ok(response::breed_not_found()),
            }
        }
        Endpoint::BreedsListRandomCount => {
            let picked = breeds::list_random_main_breeds(store, &mut rng, count).await?;
            Ok(response::success_list(picked.keys().cloned().collect()))
        }
        Endpoint::SubBreedsList => {
            let subs = breeds::list_sub_breeds(store, breed1).await?;
            Ok(response::success_map(subs))
        }
        Endpoint::SubBreedsListRandom => {
            let subs = breeds::list_random_sub_breeds(store, &mut rng, breed1, 1).await?;
            match subs.first() {
                Some(sub) => Ok(response::success_text(sub)),
                None => Ok(response::breed_not_found()),
            }
        }
        Endpoint::SubBreedsListRandomCount => {
            let subs = breeds::list_random_sub_breeds(store, &mut rng, breed1, count).await?;
            Ok(response::success_list(subs))
        }
        Endpoint::ImageRandom => {
            match images::get_breed_image_random(store, &mut rng).await? {
                Some(image) => Ok(response::success_text(&image)),
                None => Ok(response::breed_not_found()),
            }
        }
        Endpoint::ImageRandomCount => {
            let picked = images::get_breed_image_random_count(store, &mut rng, count).await?;
            Ok(response::success_list(picked))
        }
        Endpoint::ImageRandomCountAlt => {
            let picked = images::get_breed_image_random_count(store, &mut rng, count).await?;
            Ok(response::success_alt(images::with_alt(picked)))
        }
        Endpoint::BreedImages => {
            let listing = images::get_breed_images(store, breed1, breed2).await?;
            Ok(response::success_list(listing))
        }
        Endpoint::BreedImageRandom => {
            match images::get_breed_images_random(store, &mut rng, breed1, breed2).await? {
                Some(image) => Ok(response::success_text(&image)),
                None => Ok(response::breed_not_found()),
            }
        }
        Endpoint::BreedImagesRandomCount => {
            let picked =
                images::get_breed_images_random_count(store, &mut rng, breed1, breed2, count)
                    .await?;
            Ok(response::success_list(picked))
        }
        Endpoint::BreedImagesRandomCountAlt => {
            let picked =
                images::get_breed_images_random_count(store, &mut rng, breed1, breed2, count)
                    .await?;
            Ok(response::success_alt(images::with_alt(picked)))
        }
    }
}
