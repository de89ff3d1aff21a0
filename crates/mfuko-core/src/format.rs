use chrono::NaiveDate;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;

    /// Month name and year only, e.g. for budget headers.
    fn format_month_year(&self, date: NaiveDate) -> String;
}
