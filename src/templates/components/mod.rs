use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod filter_form;
pub mod pagination;
pub mod property_card;

pub use card::card;
pub use error::error_page;
pub use filter_form::filter_form;
pub use pagination::pagination;
pub use property_card::property_card;

pub fn button(label: &str) -> Markup {
    html! {
        button class="btn" type="submit" { (label) }
    }
}

/// Unix seconds as `YYYY-MM-DD` (UTC).
pub fn date(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// `1234567.5` -> `"1,234,567.50"`; whole amounts drop the decimals.
pub fn money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction:02}")
    }
}
