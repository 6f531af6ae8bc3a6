use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_SYMBOL: &str = "$";

/// en-GB style day/month/year.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn format_with_commas(whole: &str) -> String {
    let digits = whole.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}{}{}.{}", sign, symbol, format_with_commas(whole), cents)
}

pub fn format_amount(amount: Decimal) -> String {
    format_currency(amount, CURRENCY_SYMBOL)
}
