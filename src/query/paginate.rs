//! Pure pagination slicing over a resolved key sequence.

/// Slice `keys` to the page window `[(page-1)*page_size, +page_size)`.
///
/// Both ends are clipped to the available length: a page past the end of the
/// sequence yields an empty slice, never an error. `page` is 1-based;
/// callers validate `page >= 1` before slicing (see `SearchOptions`), but a
/// zero page is clamped to the first page rather than underflowing.
pub fn paginate_keys(keys: &[String], page: usize, page_size: usize) -> &[String] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= keys.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(keys.len());
    &keys[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("1_{i}")).collect()
    }

    #[test]
    fn test_first_page() {
        let keys = keys(5);
        assert_eq!(paginate_keys(&keys, 1, 2), &keys[0..2]);
    }

    #[test]
    fn test_middle_page() {
        let keys = keys(5);
        assert_eq!(paginate_keys(&keys, 2, 2), &keys[2..4]);
    }

    #[test]
    fn test_last_page_clipped() {
        let keys = keys(5);
        assert_eq!(paginate_keys(&keys, 3, 2), &keys[4..5]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let keys = keys(5);
        assert!(paginate_keys(&keys, 4, 2).is_empty());
        assert!(paginate_keys(&keys, 100, 2).is_empty());
    }

    #[test]
    fn test_zero_page_size_is_empty() {
        let keys = keys(5);
        assert!(paginate_keys(&keys, 1, 0).is_empty());
    }

    #[test]
    fn test_empty_keys() {
        assert!(paginate_keys(&[], 1, 20).is_empty());
    }

    #[test]
    fn test_zero_page_clamps_to_first() {
        let keys = keys(3);
        assert_eq!(paginate_keys(&keys, 0, 2), &keys[0..2]);
    }

    #[test]
    fn test_page_size_larger_than_sequence() {
        let keys = keys(3);
        assert_eq!(paginate_keys(&keys, 1, 20), &keys[..]);
    }
}
