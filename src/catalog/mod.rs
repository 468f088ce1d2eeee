//! Breed catalog subsystem.
//!
//! # Data Flow
//! ```text
//! ObjectLister (one-level prefix listing under "breeds/")
//!     → breeds.rs  (group entries into breed → sub-breed map)
//!     → sampler.rs (uniform key picks, shuffled truncation)
//!     → images.rs  (breed → image keys, random image selection)
//!     → handlers compose results into presenter responses
//! ```
//!
//! # Design Decisions
//! - The store only exposes a generic prefix+delimiter listing; all
//!   breed/sub-breed structure is derived client-side per request.
//! - Nothing is cached between requests. Every call re-derives its view
//!   from a live listing.
//! - BreedMap is insertion-ordered (IndexMap) so listing order and shuffled
//!   order survive into responses.
//! - Sampling functions take the random source as a parameter; production
//!   passes `thread_rng()`, tests pass a seeded StdRng.

pub mod breeds;
pub mod images;
pub mod sampler;

pub use breeds::BreedMap;
pub use images::ImageWithAlt;
