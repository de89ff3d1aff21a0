use std::fmt;
use std::str::FromStr;

use mfuko_domain::{FinancialTip, TagParseError, TipCategory};

/// Category chip on the tips screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipFilter {
    All,
    Category(TipCategory),
}

impl TipFilter {
    pub fn matches(self, tip: &FinancialTip) -> bool {
        match self {
            TipFilter::All => true,
            TipFilter::Category(category) => tip.category == category,
        }
    }

    pub fn label(self) -> String {
        match self {
            TipFilter::All => "All".into(),
            TipFilter::Category(category) => category.label(),
        }
    }
}

impl fmt::Display for TipFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TipFilter::All => f.write_str("all"),
            TipFilter::Category(category) => write!(f, "{category}"),
        }
    }
}

/// Accepts `all` or a tip category tag, case-insensitively.
impl FromStr for TipFilter {
    type Err = TagParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(TipFilter::All);
        }
        value.parse().map(TipFilter::Category)
    }
}

pub struct TipService;

impl TipService {
    pub fn unread(tips: &[FinancialTip]) -> Vec<&FinancialTip> {
        tips.iter().filter(|tip| !tip.is_read).collect()
    }

    /// Picks an unread tip using `seed`, falling back to the first tip when all are read.
    pub fn featured(tips: &[FinancialTip], seed: u64) -> Option<&FinancialTip> {
        let unread = Self::unread(tips);
        if unread.is_empty() {
            return tips.first();
        }
        let index = (seed % unread.len() as u64) as usize;
        unread.get(index).copied()
    }

    /// `All` followed by each category present, in first-appearance order.
    pub fn filters(tips: &[FinancialTip]) -> Vec<TipFilter> {
        let mut filters = vec![TipFilter::All];
        for tip in tips {
            let filter = TipFilter::Category(tip.category);
            if !filters.contains(&filter) {
                filters.push(filter);
            }
        }
        filters
    }

    pub fn filter(tips: &[FinancialTip], filter: TipFilter) -> Vec<&FinancialTip> {
        tips.iter().filter(|tip| filter.matches(tip)).collect()
    }

    /// `"1 tip available"` or `"<n> tips available"`.
    pub fn count_label(count: usize) -> String {
        if count == 1 {
            "1 tip available".into()
        } else {
            format!("{count} tips available")
        }
    }
}
