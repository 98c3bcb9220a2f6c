//! Cache key generators for consistent key naming.

/// Prefix of every album entry.
const ALBUM_PREFIX: &str = "album";

/// Generate a cache key for an album by ID.
#[must_use]
pub fn album_by_id(id: &str) -> String {
    format!("{}:{}", ALBUM_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_by_id_key() {
        assert_eq!(album_by_id("42"), "album:42");
    }

    #[test]
    fn test_key_keeps_id_verbatim() {
        assert_eq!(album_by_id("Abc"), "album:Abc");
    }
}
