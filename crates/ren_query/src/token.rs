//! Tokenization shared by the index builder and the query engine.
//!
//! Both sides must split text the same way or search would miss its own index keys, so this
//! is the single definition: split on non-alphanumeric boundaries, lowercase, and drop tokens
//! shorter than [`MIN_TOKEN_LEN`] to bound index size.

/// Tokens shorter than this never enter the full-text index.
pub const MIN_TOKEN_LEN: usize = 2;

/// Split `text` into lowercased index tokens.
///
/// ## Examples
/// ```rust
/// use ren_query::token::tokens;
///
/// let toks: Vec<String> = tokens("fn rename(old_path: <char>)").collect();
/// assert_eq!(toks, ["fn", "rename", "old", "path", "char"]);
/// ```
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_lowercase)
}

/// Distinct query tokens in first-seen order.
///
/// Repeating a token in a query must not double-count it when scoring, so the query side
/// deduplicates up front.
pub fn distinct_tokens(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for token in tokens(text) {
        if !out.contains(&token) {
            out.push(token);
        }
    }
    out
}
