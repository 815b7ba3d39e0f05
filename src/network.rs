//! Network defaults for the category snapshot endpoint.

/// Default REST API base URL (the listing tracker's own API proxy).
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Path of the category snapshot endpoint.
pub const CATEGORIES_PATH: &str = "/api/categories";

/// Number of coins requested per category by default.
pub const DEFAULT_CATEGORY_LIMIT: u32 = 10;
