use std::ops::Range;

/// Number of pages needed for `list` at `page_size` entries per page.
///
/// Returns 0 when either argument is absent or the page size is zero.
pub fn page_count<T>(list: Option<&[T]>, page_size: Option<usize>) -> usize {
    match (list, page_size) {
        (Some(list), Some(size)) if size > 0 => list.len().div_ceil(size),
        _ => 0,
    }
}

/// Same as [`page_count`] when only the length is known.
pub fn page_count_for_len(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Index range of a 1-based page within a list of `len` entries.
///
/// Pages past the end produce an empty range at `len`; page 0 is page 1.
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Slice of `data` shown on a 1-based page.
pub fn page_slice<T>(data: &[T], page: usize, page_size: usize) -> &[T] {
    &data[page_bounds(page, page_size, data.len())]
}

/// Pull a requested page into `1..=max(1, total_pages)`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Summary of one rendered page, for status lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_entries: usize,
}

impl PageInfo {
    pub fn new(current_page: usize, page_size: usize, total_entries: usize) -> Self {
        Self {
            current_page,
            total_pages: page_count_for_len(total_entries, page_size),
            page_size,
            total_entries,
        }
    }

    /// 1-based positions of the first and last entry on the page, if any.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let bounds = page_bounds(self.current_page, self.page_size, self.total_entries);
        if bounds.is_empty() {
            None
        } else {
            Some((bounds.start + 1, bounds.end))
        }
    }

    /// Generate pagination information string
    pub fn summary(&self) -> String {
        if self.total_entries == 0 {
            return "No entries found".to_string();
        }

        match self.item_range() {
            Some((start, end)) => format!(
                "Showing {}-{} of {} entries (Page {} of {})",
                start,
                end,
                self.total_entries,
                self.current_page,
                self.total_pages.max(1)
            ),
            None => format!(
                "Page {} is past the last page ({} of {} entries)",
                self.current_page,
                self.total_pages,
                self.total_entries
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        let list: Vec<u8> = (0..12).collect();
        assert_eq!(page_count(Some(list.as_slice()), Some(10)), 2);
        assert_eq!(page_count(Some(list.as_slice()), Some(12)), 1);
        assert_eq!(page_count(Some(list.as_slice()), Some(5)), 3);
        assert_eq!(page_count(Some(list.as_slice()), Some(1)), 12);
    }

    #[test]
    fn test_page_count_absent_or_zero() {
        let list: Vec<u8> = (0..12).collect();
        let empty: Vec<u8> = Vec::new();
        assert_eq!(page_count(Some(empty.as_slice()), Some(10)), 0);
        assert_eq!(page_count::<u8>(None, Some(10)), 0);
        assert_eq!(page_count(Some(list.as_slice()), None), 0);
        assert_eq!(page_count(Some(list.as_slice()), Some(0)), 0);
        assert_eq!(page_count_for_len(12, 0), 0);
    }

    #[test]
    fn test_page_slice_lengths() {
        let data: Vec<usize> = (1..=12).collect();
        assert_eq!(page_slice(&data, 1, 10), &data[0..10]);
        assert_eq!(page_slice(&data, 2, 10), &[11, 12]);
        assert!(page_slice(&data, 3, 10).is_empty());
        assert!(page_slice(&data, usize::MAX, 10).is_empty());
        assert_eq!(page_slice(&data, 0, 10), &data[0..10]);
    }

    #[test]
    fn test_page_slice_length_formula() {
        let data: Vec<usize> = (0..23).collect();
        for page_size in 1..=25 {
            for page in 1..=30 {
                let expected = page_size
                    .min(data.len().saturating_sub((page - 1) * page_size));
                assert_eq!(
                    page_slice(&data, page, page_size).len(),
                    expected,
                    "page {} size {}",
                    page,
                    page_size
                );
            }
        }
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_page_info_summary() {
        let info = PageInfo::new(2, 10, 12);
        assert_eq!(info.total_pages, 2);
        assert_eq!(info.item_range(), Some((11, 12)));
        assert_eq!(info.summary(), "Showing 11-12 of 12 entries (Page 2 of 2)");

        assert_eq!(PageInfo::new(1, 10, 0).summary(), "No entries found");
        assert_eq!(
            PageInfo::new(5, 10, 12).summary(),
            "Page 5 is past the last page (2 of 12 entries)"
        );
    }
}
