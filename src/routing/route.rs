//! Route templates and the API route table.

/// Names a dynamic segment. The set is closed: route patterns may only
/// capture these three parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamName {
    /// Primary breed, e.g. "boxer".
    Breed1,
    /// Sub-breed qualifier, e.g. "siberian".
    Breed2,
    /// Requested element count; coerced to an integer at dispatch.
    Count,
}

impl ParamName {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "breed1" => Some(Self::Breed1),
            "breed2" => Some(Self::Breed2),
            "count" => Some(Self::Count),
            _ => None,
        }
    }
}

/// One template segment: an exact literal or a named capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment exactly.
    Literal(String),
    /// Always matches; binds the request segment under its name.
    Param(ParamName),
}

/// An ordered segment sequence parsed from a pattern such as
/// `/api/breed/:breed1/images/random/:count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    segments: Vec<Segment>,
}

impl RouteTemplate {
    /// Parse a pattern string. Dynamic segments start with `:`.
    ///
    /// # Panics
    ///
    /// Panics on a capture name outside the closed [`ParamName`] set. The
    /// route table is static, so a bad pattern is a programming error best
    /// caught at startup.
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|token| match token.strip_prefix(':') {
                Some(name) => Segment::Param(
                    ParamName::from_token(name)
                        .unwrap_or_else(|| panic!("unknown route parameter :{name} in {pattern}")),
                ),
                None => Segment::Literal(token.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// The parsed segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Handler selector paired with each template. Double-breed routes reuse the
/// single-breed variants; the bound `breed2` narrows the listing prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Full breed → sub-breed map.
    BreedsListAll,
    /// One random breed with its sub-breeds.
    BreedsListAllRandom,
    /// Shuffled breed map truncated to `:count`.
    BreedsListAllRandomCount,
    /// Primary breed names.
    BreedsList,
    /// One random primary breed name.
    BreedsListRandom,
    /// Random primary breed names truncated to `:count`.
    BreedsListRandomCount,
    /// Sub-breed map for one breed.
    SubBreedsList,
    /// One random sub-breed token.
    SubBreedsListRandom,
    /// Random sub-breed tokens truncated to `:count`.
    SubBreedsListRandomCount,
    /// One random image across all breeds.
    ImageRandom,
    /// `:count` independent random images across all breeds.
    ImageRandomCount,
    /// Same as [`Self::ImageRandomCount`], with alt text.
    ImageRandomCountAlt,
    /// All images of one breed.
    BreedImages,
    /// One random image of one breed.
    BreedImageRandom,
    /// `:count` random images of one breed.
    BreedImagesRandomCount,
    /// Same as [`Self::BreedImagesRandomCount`], with alt text.
    BreedImagesRandomCountAlt,
}

impl Endpoint {
    /// Stable label for logs and metrics.
    pub fn name(self) -> &'static str {
        match self {
            Self::BreedsListAll => "breeds_list_all",
            Self::BreedsListAllRandom => "breeds_list_all_random",
            Self::BreedsListAllRandomCount => "breeds_list_all_random_count",
            Self::BreedsList => "breeds_list",
            Self::BreedsListRandom => "breeds_list_random",
            Self::BreedsListRandomCount => "breeds_list_random_count",
            Self::SubBreedsList => "sub_breeds_list",
            Self::SubBreedsListRandom => "sub_breeds_list_random",
            Self::SubBreedsListRandomCount => "sub_breeds_list_random_count",
            Self::ImageRandom => "image_random",
            Self::ImageRandomCount => "image_random_count",
            Self::ImageRandomCountAlt => "image_random_count_alt",
            Self::BreedImages => "breed_images",
            Self::BreedImageRandom => "breed_image_random",
            Self::BreedImagesRandomCount => "breed_images_random_count",
            Self::BreedImagesRandomCountAlt => "breed_images_random_count_alt",
        }
    }
}

/// A template paired with its endpoint.
#[derive(Debug, Clone)]
pub struct Route {
    /// Path template to match against.
    pub template: RouteTemplate,
    /// Handler behavior selected on match.
    pub endpoint: Endpoint,
}

impl Route {
    fn new(pattern: &str, endpoint: Endpoint) -> Self {
        Self {
            template: RouteTemplate::parse(pattern),
            endpoint,
        }
    }
}

/// The API route table.
///
/// Declaration order is load-bearing: the matcher takes the FIRST route
/// whose segments all match, so literal routes (`.../random`) sit above
/// overlapping dynamic routes (`.../:count`) of the same length. Reordering
/// entries changes the API.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("/api/breeds/list/all", Endpoint::BreedsListAll),
        Route::new("/api/breeds/list/all/random", Endpoint::BreedsListAllRandom),
        Route::new(
            "/api/breeds/list/all/random/:count",
            Endpoint::BreedsListAllRandomCount,
        ),
        Route::new("/api/breeds/list", Endpoint::BreedsList),
        Route::new("/api/breeds/list/random", Endpoint::BreedsListRandom),
        Route::new(
            "/api/breeds/list/random/:count",
            Endpoint::BreedsListRandomCount,
        ),
        Route::new("/api/breed/:breed1/list", Endpoint::SubBreedsList),
        Route::new(
            "/api/breed/:breed1/list/random",
            Endpoint::SubBreedsListRandom,
        ),
        Route::new(
            "/api/breed/:breed1/list/random/:count",
            Endpoint::SubBreedsListRandomCount,
        ),
        Route::new("/api/breeds/image/random", Endpoint::ImageRandom),
        Route::new("/api/breeds/image/random/:count", Endpoint::ImageRandomCount),
        Route::new(
            "/api/breeds/image/random/:count/alt",
            Endpoint::ImageRandomCountAlt,
        ),
        Route::new("/api/breed/:breed1/images", Endpoint::BreedImages),
        Route::new("/api/breed/:breed1/images/random", Endpoint::BreedImageRandom),
        Route::new(
            "/api/breed/:breed1/images/random/:count",
            Endpoint::BreedImagesRandomCount,
        ),
        Route::new(
            "/api/breed/:breed1/images/random/:count/alt",
            Endpoint::BreedImagesRandomCountAlt,
        ),
        Route::new("/api/breed/:breed1/:breed2/images", Endpoint::BreedImages),
        Route::new(
            "/api/breed/:breed1/:breed2/images/random",
            Endpoint::BreedImageRandom,
        ),
        Route::new(
            "/api/breed/:breed1/:breed2/images/random/:count",
            Endpoint::BreedImagesRandomCount,
        ),
        Route::new(
            "/api/breed/:breed1/:breed2/images/random/:count/alt",
            Endpoint::BreedImagesRandomCountAlt,
        ),
    ]
}
