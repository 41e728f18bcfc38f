//! Shared constants and invariants

/// Refresh the session token this long before its expiry so a request does
/// not go out with a token that dies mid-flight.
pub const TOKEN_REFRESH_BUFFER_MS: i64 = 30 * 1000;

/// How long a successful carousel fetch stays fresh.
pub const CACHE_DURATION_MS: i64 = 5 * 60 * 1000;

pub const DEFAULT_BASE_URL: &str = "https://echo-serv.tbxnet.com";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 15_000;

// API endpoints
pub const AUTH_PATH: &str = "/v1/mobile/auth";
pub const DATA_PATH: &str = "/v1/mobile/data";

/// Subject the auth endpoint expects in the login body.
pub const DEFAULT_AUTH_SUBJECT: &str = "ToolboxMobileTest";

pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

// Carousel kinds the API serves
pub const CAROUSEL_KIND_POSTER: &str = "poster";
pub const CAROUSEL_KIND_THUMB: &str = "thumb";
