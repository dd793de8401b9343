//! Display formatting for prices (Indonesian rupiah conventions).
//!
//! `.` groups thousands and `,` separates decimals. Formatting never feeds
//! back into the stored price.

use core::str::FromStr;

use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use shopfront_core::DomainError;

use crate::product::Price;

/// How many fractional digits a price is shown with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceStyle {
    /// `1.234,50`
    #[default]
    TwoDecimals,
    /// `1.235` (rounded)
    Whole,
}

impl PriceStyle {
    fn fraction_digits(self) -> u32 {
        match self {
            PriceStyle::TwoDecimals => 2,
            PriceStyle::Whole => 0,
        }
    }
}

impl FromStr for PriceStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "two_decimals" => Ok(PriceStyle::TwoDecimals),
            "whole" => Ok(PriceStyle::Whole),
            other => Err(DomainError::validation(format!(
                "price style must be one of: two_decimals, whole (got {other:?})"
            ))),
        }
    }
}

pub fn format_price(price: Price, style: PriceStyle) -> String {
    let dp = style.fraction_digits();
    // Exact binary value, so ties are real ties (12.125, 2.5).
    let Some(exact) = Decimal::from_f64_retain(price.value()) else {
        // Above Decimal::MAX (~7.9e28): shown ungrouped.
        return format!("{:.*}", dp as usize, price.value());
    };
    let rounded = exact.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);

    let Some(whole) = rounded.trunc().to_u128() else {
        return format!("{:.*}", dp as usize, rounded);
    };
    let mut out = whole.to_formatted_string(&Locale::id);
    if dp > 0 {
        let fixed = format!("{:.*}", dp as usize, rounded);
        if let Some((_, frac)) = fixed.split_once('.') {
            out.push(',');
            out.push_str(frac);
        }
    }
    out
}

/// `format_price` with the currency prefix, e.g. `Rp 12,50`.
pub fn format_rupiah(price: Price, style: PriceStyle) -> String {
    format!("Rp {}", format_price(price, style))
}
