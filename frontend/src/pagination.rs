/// Number of pages shown on each side of the current page.
pub const WINDOW_RADIUS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page labels for the pagination bar: first and last page, every page within
/// `radius` of `current`, and a single ellipsis for each gap in between.
pub fn window_of(current: usize, total_pages: usize, radius: usize) -> Vec<PageItem> {
    let low = current.saturating_sub(radius);
    let high = current.saturating_add(radius);
    let mut items = Vec::new();

    for page in 1..=total_pages {
        if page == 1 || page == total_pages || (low..=high).contains(&page) {
            items.push(PageItem::Page(page));
        } else if items.last() != Some(&PageItem::Ellipsis) {
            items.push(PageItem::Ellipsis);
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn empty_when_no_pages() {
        assert!(window_of(1, 0, WINDOW_RADIUS).is_empty());
    }

    #[test]
    fn single_page() {
        assert_eq!(window_of(1, 1, WINDOW_RADIUS), vec![Page(1)]);
    }

    #[test]
    fn small_totals_have_no_gaps() {
        assert_eq!(
            window_of(3, 5, WINDOW_RADIUS),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn gaps_on_both_sides() {
        assert_eq!(
            window_of(10, 20, WINDOW_RADIUS),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn gap_only_after_current_near_start() {
        assert_eq!(
            window_of(1, 10, WINDOW_RADIUS),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn never_two_consecutive_ellipses_and_ends_present() {
        for total in 1..40 {
            for current in 1..=total {
                let items = window_of(current, total, WINDOW_RADIUS);
                assert_eq!(items.first(), Some(&Page(1)));
                assert_eq!(items.last(), Some(&Page(total)));
                assert!(items
                    .windows(2)
                    .all(|pair| !(pair[0] == Ellipsis && pair[1] == Ellipsis)));
                assert!(items.contains(&Page(current)));
            }
        }
    }
}
