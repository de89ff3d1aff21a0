//! Display formatting for amounts, dates, percentages and deadlines.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use mfuko_config::Config;
use mfuko_core::{days_until, rounded_percent, Clock, CurrencyFormatter, DateFormatter, SystemClock};

/// Largest number of fraction digits shown for an amount.
const MAX_FRACTION_DIGITS: usize = 3;

static DEFAULT_FORMATTER: Lazy<DisplayFormatter> = Lazy::new(DisplayFormatter::default);

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("TZS")
    }
}

/// Separators used when rendering numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Separators for a BCP 47 tag. Unrecognised tags use the en-US convention.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag.split(['-', '_']).next().unwrap_or("").to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "de" | "id" | "it" | "nl" | "pt" | "es" => (',', '.'),
            "fr" => (',', ' '),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

/// Formats values the way the finance screens display them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFormatter {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
}

impl DisplayFormatter {
    pub fn new(currency: CurrencyCode, locale: LocaleConfig) -> Self {
        Self { currency, locale }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CurrencyCode::new(config.currency.as_str()),
            LocaleConfig::for_tag(&config.locale),
        )
    }

    pub fn format_number(&self, value: f64) -> String {
        format_number(&self.locale, value)
    }
}

impl CurrencyFormatter for DisplayFormatter {
    fn format_amount(&self, amount: f64) -> String {
        format!("{} {}", self.currency.as_str(), self.format_number(amount))
    }
}

impl DateFormatter for DisplayFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }

    fn format_month_year(&self, date: NaiveDate) -> String {
        date.format("%B %Y").to_string()
    }
}

/// Renders `value` with grouped thousands and up to three fraction digits, trailing zeros dropped.
pub fn format_number(locale: &LocaleConfig, value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞".into() } else { "∞".into() };
    }

    let (int_part, fraction) = round_half_expand(value.abs(), MAX_FRACTION_DIGITS);
    let fraction = fraction.trim_end_matches('0');
    let int_part = int_part.as_str();

    let mut body = group_digits(int_part, locale.grouping_separator);
    if !fraction.is_empty() {
        body.push(locale.decimal_separator);
        body.push_str(fraction);
    }
    let is_zero = int_part.chars().all(|ch| ch == '0') && fraction.is_empty();
    if value < 0.0 && !is_zero {
        body.insert(0, '-');
    }
    body
}

/// Rounds the shortest decimal form of `value` to `digits` places, ties away from zero.
fn round_half_expand(value: f64, digits: usize) -> (String, String) {
    // Display for f64 never uses exponent notation.
    let shortest = value.to_string();
    let (int_part, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    if fraction.len() <= digits {
        return (int_part.to_string(), fraction.to_string());
    }

    let mut kept: Vec<u8> = int_part.bytes().chain(fraction.bytes().take(digits)).collect();
    if fraction.as_bytes()[digits] >= b'5' {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }
    let split = kept.len() - digits;
    let fraction = String::from_utf8_lossy(&kept[split..]).into_owned();
    let int_part = String::from_utf8_lossy(&kept[..split]).into_owned();
    (int_part, fraction)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.chars().count();
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (len - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// `TZS 10,000`.
pub fn format_currency(amount: f64) -> String {
    DEFAULT_FORMATTER.format_amount(amount)
}

/// `Mar 15, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    DEFAULT_FORMATTER.format_date(date)
}

/// `March 2025`.
pub fn format_month_year(date: NaiveDate) -> String {
    DEFAULT_FORMATTER.format_month_year(date)
}

/// Rounded integer percentage with a `%` suffix; `"0%"` when `total` is zero.
pub fn format_percentage(part: f64, total: f64) -> String {
    format!("{}%", rounded_percent(part, total))
}

/// Countdown label for `target` measured from `now`.
pub fn days_left_label(target: NaiveDate, now: DateTime<Utc>) -> String {
    match days_until(target, now) {
        days if days < 0 => "Expired".into(),
        0 => "Today".into(),
        1 => "1 day left".into(),
        days => format!("{days} days left"),
    }
}

/// Countdown label for `target` against the supplied clock.
pub fn format_days_left_at(target: NaiveDate, clock: &dyn Clock) -> String {
    days_left_label(target, clock.now())
}

/// Countdown label for `target` against the system clock.
pub fn format_days_left(target: NaiveDate) -> String {
    format_days_left_at(target, &SystemClock)
}
