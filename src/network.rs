//! Network constants for the brokerage API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.kite.trade";

/// Value sent in the [`API_VERSION_HEADER`] on every request.
pub const DEFAULT_API_VERSION: &str = "3";

/// Header carrying the API version marker.
pub const API_VERSION_HEADER: &str = "X-Kite-Version";

/// Browser login page for the OAuth-style redirect flow.
pub const DEFAULT_LOGIN_URL: &str = "https://kite.zerodha.com/connect/login";
