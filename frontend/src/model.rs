use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One spending record as returned by `GET /get_monthly_spending/`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Date,
    Category,
    Amount,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Date => "Date",
            SortField::Category => "Category",
            SortField::Amount => "Amount",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

/// Optional predicates applied to the record list. `None` means unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<String>,
}

impl FilterState {
    pub fn matches(&self, record: &Transaction) -> bool {
        let after_start = self.start_date.map_or(true, |start| record.date >= start);
        let before_end = self.end_date.map_or(true, |end| record.date <= end);
        let in_category = self
            .category
            .as_deref()
            .map_or(true, |category| record.category == category);
        after_start && before_end && in_category
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.category.is_none()
    }
}

/// A single-field filter update coming from the filter panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterChange {
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    Category(Option<String>),
}

impl FilterChange {
    /// Builds a date change from a raw `<input type="date">` value.
    /// Blank or unparseable input clears the bound.
    pub fn start_date(raw: &str) -> Self {
        FilterChange::StartDate(parse_input_date(raw))
    }

    pub fn end_date(raw: &str) -> Self {
        FilterChange::EndDate(parse_input_date(raw))
    }

    pub fn category(raw: &str) -> Self {
        // Option values are the records' own categories, so compare them verbatim.
        if raw.is_empty() {
            FilterChange::Category(None)
        } else {
            FilterChange::Category(Some(raw.to_string()))
        }
    }
}

fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Server reply to `DELETE /delete_all_transactions/`.
#[derive(Clone, Debug, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: String,
}
