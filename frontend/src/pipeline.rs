use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::model::{FilterState, SortDirection, SortField, SortState, Transaction};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageView {
    pub rows: Vec<Transaction>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl PageView {
    /// 1-based, 0 when the page is empty.
    pub fn first_index(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn last_index(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.first_index() + self.rows.len() - 1
        }
    }
}

pub fn derive(
    records: &[Transaction],
    filter: &FilterState,
    sort: SortState,
    page: usize,
    page_size: usize,
) -> PageView {
    let mut filtered: Vec<&Transaction> = records.iter().filter(|r| filter.matches(r)).collect();
    sort_records(&mut filtered, sort);

    let total_count = filtered.len();
    let total_pages = total_pages(total_count, page_size);

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let rows = filtered
        .iter()
        .skip(start)
        .take(page_size)
        .map(|r| (*r).clone())
        .collect();

    PageView {
        rows,
        total_count,
        total_pages,
        page,
        page_size,
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

// Stable in both directions.
pub fn sort_records(records: &mut [&Transaction], sort: SortState) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Transaction, b: &Transaction, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Amount => a.amount.cmp(&b.amount),
        SortField::Category => locale_compare(&a.category, &b.category),
    }
}

/// Case-insensitive ordering with a case-sensitive tie break, so that "food"
/// and "Food" sit together the way a browser collator places them.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

pub fn unique_categories(records: &[Transaction]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
