use thiserror::Error;

/// Why a single article request produced no text.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unparseable response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    #[error("catalog is empty")]
    Empty,

    #[error("catalog entry {index} has an empty keyword")]
    EmptyKeyword { index: usize },

    #[error("keyword {keyword:?} would be written outside the output directory")]
    UnsafeKeyword { keyword: String },

    #[error("keywords {first:?} and {second:?} both map to {slug}.html")]
    SlugCollision {
        first: String,
        second: String,
        slug: String,
    },
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("no API key given (set ARTICLEGEN_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("temperature {0} is outside 0.0..=2.0")]
    Temperature(f32),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}
