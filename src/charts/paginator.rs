//! Chart pagination
//!
//! Splits an ordered (label, value) sequence into fixed-size pages and
//! tracks which page is shown. Navigation clamps at the ends; there is
//! no wraparound. The page list is rebuilt wholesale whenever the
//! source data changes.

use crate::data::DataPoint;

/// Pagination state for one chart surface.
///
/// Invariant: `0 <= current < max(1, pages.len())`. An empty source
/// still yields one (empty) page so the indicator reads "1 / 1".
#[derive(Debug, Clone)]
pub struct Paginator {
    pages: Vec<Vec<DataPoint>>,
    current: usize,
}

impl Paginator {
    /// Chunk `source` into contiguous pages of at most `page_size`
    /// elements, preserving order, and start on the first page.
    pub fn new(source: Vec<DataPoint>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let pages = if source.is_empty() {
            vec![Vec::new()]
        } else {
            source
                .chunks(page_size)
                .map(|chunk| chunk.to_vec())
                .collect()
        };
        Self { pages, current: 0 }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The page currently shown
    pub fn current_page(&self) -> &[DataPoint] {
        &self.pages[self.current]
    }

    /// Advance one page, clamped to the last valid index. Returns true
    /// when the index changed; calling on the last page is a no-op.
    pub fn next(&mut self) -> bool {
        let target = (self.current + 1).min(self.pages.len() - 1);
        let changed = target != self.current;
        self.current = target;
        changed
    }

    /// Step back one page, clamped to index 0. Returns true when the
    /// index changed; calling on the first page is a no-op.
    pub fn previous(&mut self) -> bool {
        let target = self.current.saturating_sub(1);
        let changed = target != self.current;
        self.current = target;
        changed
    }

    /// Page indicator text, "current / total" with total floored at 1
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.current + 1, self.pages.len().max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(n: usize) -> Vec<DataPoint> {
        (0..n)
            .map(|i| DataPoint::new(format!("c{}", i), i as f64))
            .collect()
    }

    #[test]
    fn pages_partition_source_exactly() {
        for page_size in 1..=7 {
            for len in 0..=20 {
                let source = points(len);
                let paginator = Paginator::new(source.clone(), page_size);

                let rejoined: Vec<DataPoint> = paginator
                    .pages
                    .iter()
                    .flat_map(|p| p.iter().cloned())
                    .collect();
                assert_eq!(rejoined, source, "size {} len {}", page_size, len);

                // All non-last pages are exactly page_size; the last
                // holds the remainder
                if len > 0 {
                    for page in &paginator.pages[..paginator.pages.len() - 1] {
                        assert_eq!(page.len(), page_size);
                    }
                    assert!(paginator.pages.last().unwrap().len() <= page_size);
                }
            }
        }
    }

    #[test]
    fn empty_source_yields_one_empty_page() {
        let paginator = Paginator::new(Vec::new(), 6);
        assert_eq!(paginator.page_count(), 1);
        assert!(paginator.current_page().is_empty());
        assert_eq!(paginator.indicator(), "1 / 1");
    }

    #[test]
    fn fourteen_records_at_six_split_six_six_two() {
        let mut paginator = Paginator::new(points(14), 6);
        let sizes: Vec<usize> = paginator.pages.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![6, 6, 2]);

        // next, next, previous lands on the second page
        assert!(paginator.next());
        assert!(paginator.next());
        assert!(paginator.previous());
        assert_eq!(paginator.current_index(), 1);
        assert_eq!(paginator.indicator(), "2 / 3");
    }

    #[test]
    fn next_is_idempotent_on_last_page() {
        let mut paginator = Paginator::new(points(14), 6);
        paginator.next();
        paginator.next();
        assert_eq!(paginator.current_index(), 2);
        assert!(!paginator.next());
        assert_eq!(paginator.current_index(), 2);
    }

    #[test]
    fn previous_is_idempotent_on_first_page() {
        let mut paginator = Paginator::new(points(3), 6);
        assert!(!paginator.previous());
        assert_eq!(paginator.current_index(), 0);
    }

    #[test]
    fn single_page_navigation_never_moves() {
        let mut paginator = Paginator::new(Vec::new(), 6);
        assert!(!paginator.next());
        assert!(!paginator.previous());
        assert_eq!(paginator.indicator(), "1 / 1");
    }

    #[test]
    fn zero_page_size_is_clamped_to_one() {
        let paginator = Paginator::new(points(3), 0);
        assert_eq!(paginator.page_count(), 3);
    }
}
