//! Identifier-like column name classification.

/// Tokens that mark a column as identifier-like.
const ID_TOKENS: &[&str] = &["id", "key", "uuid"];

/// Whether a column name suggests it holds identifiers.
///
/// Matching is case-insensitive over tokens split on non-alphanumeric
/// separators: a token matches when it equals, starts with, or ends
/// with "id", "key", or "uuid". So `user_id`, `ID`, `product_key`,
/// `uuid4` and `keycode` all match; `name` and `category` do not.
///
/// Kept as a standalone pure function so the matching rules can change
/// without touching the duplicate-counting logic.
#[must_use]
pub fn is_id_like(name: &str) -> bool {
    let lowered = name.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .any(|token| {
            ID_TOKENS
                .iter()
                .any(|t| token == *t || token.starts_with(t) || token.ends_with(t))
        })
}
