//! Page slicing over a filtered, sorted record view

/// Returns the slice for a 1-based page: `[(page-1)*size, page*size)`.
///
/// A page past the end yields an empty slice; `page_size == 0` yields an
/// empty slice rather than panicking.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(len / page_size)`, never below 1: an empty result set still has
/// one (empty) page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let items: Vec<u32> = (0..120).collect();
        let page = paginate(&items, 1, 25);
        assert_eq!(page.len(), 25);
        assert_eq!(page[0], 0);
        assert_eq!(page[24], 24);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (0..120).collect();
        let page = paginate(&items, 5, 25);
        assert_eq!(page.len(), 20);
        assert_eq!(page[0], 100);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        assert!(paginate(&items, 99, 25).is_empty());
    }

    #[test]
    fn test_total_pages_ceiling() {
        assert_eq!(total_pages(120, 25), 5);
        assert_eq!(total_pages(100, 25), 4);
        assert_eq!(total_pages(101, 25), 5);
        assert_eq!(total_pages(1, 25), 1);
    }

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0, 25), 1);
    }

    #[test]
    fn test_zero_page_size_is_safe() {
        let items: Vec<u32> = (0..10).collect();
        assert!(paginate(&items, 1, 0).is_empty());
        assert_eq!(total_pages(10, 0), 1);
    }
}
