//! Bot API path matching.
//!
//! # Responsibilities
//! - Split a request path into its non-empty segments
//! - Recognise the `/bot<token>/<method...>` shape the upstream API expects
//!
//! # Design Decisions
//! - Prefix matching is case-sensitive (`Bot123/...` is rejected)
//! - Empty segments are ignored, so `//bot1//getMe` matches
//! - The token itself is not inspected; the upstream decides whether it is valid

/// Path segment prefix that marks a Bot API call.
pub const BOT_PREFIX: &str = "bot";

/// Non-empty `/`-separated segments of a path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Returns true if the path addresses a Bot API method.
///
/// Requires at least two segments with the first starting with [`BOT_PREFIX`].
pub fn is_bot_api_path(path: &str) -> bool {
    let mut parts = segments(path);
    match (parts.next(), parts.next()) {
        (Some(first), Some(_)) => first.starts_with(BOT_PREFIX),
        _ => false,
    }
}
