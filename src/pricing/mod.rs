// src/pricing/mod.rs
//
// Price/margin reconciliation: the calculations behind the price-update
// dialog. Margin is profit as a percentage of the selling price.

pub mod draft;

pub use draft::{
    DraftState, PriceDraft, PricePreview, ProductSnapshot, SubmitError, UpdateSellingPrice,
};

/// Margins below this percentage fall in the low-margin warning band.
pub const LOW_MARGIN_THRESHOLD: f64 = 10.0;

/// One-click margin shortcuts offered next to the price field, in percent.
pub const QUICK_MARGIN_PRESETS: [f64; 7] = [10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0];

#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A margin of 100% or more has no finite selling price.
    InvalidMargin(f64),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::InvalidMargin(m) => {
                write!(f, "target margin {}% must be below 100%", m)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Display classification of a margin percentage. Not an error condition,
/// only a hint for how the number should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginBand {
    Loss,
    Low,
    Healthy,
}

impl MarginBand {
    pub fn classify(margin_percent: f64) -> Self {
        if margin_percent < 0.0 {
            MarginBand::Loss
        } else if margin_percent < LOW_MARGIN_THRESHOLD {
            MarginBand::Low
        } else {
            MarginBand::Healthy
        }
    }
}

/// Selling price that achieves `margin_percent` on top of `purchase_price`.
///
/// `price = purchase / (1 - margin/100)`. Rejects margins at or above 100%,
/// where the formula degenerates to infinite or negative prices.
pub fn selling_price_from_margin(
    purchase_price: f64,
    margin_percent: f64,
) -> Result<f64, PricingError> {
    if margin_percent >= 100.0 {
        return Err(PricingError::InvalidMargin(margin_percent));
    }
    Ok(purchase_price / (1.0 - margin_percent / 100.0))
}

/// Margin percentage of `selling_price` over `purchase_price`.
/// Returns 0 for non-positive selling prices instead of dividing by zero.
pub fn compute_margin(purchase_price: f64, selling_price: f64) -> f64 {
    if selling_price > 0.0 {
        (selling_price - purchase_price) / selling_price * 100.0
    } else {
        0.0
    }
}

/// Profit per unit. Negative when selling below cost.
pub fn compute_profit(purchase_price: f64, selling_price: f64) -> f64 {
    selling_price - purchase_price
}

/// Round to 2 decimals for display and persisted prices.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn margin_of_known_scenario() {
        // purchase 80, selling 100 -> 20% margin, 20.00 profit
        assert!(approx_eq(compute_margin(80.0, 100.0), 20.0));
        assert!(approx_eq(compute_profit(80.0, 100.0), 20.0));
    }

    #[test]
    fn margin_zero_for_non_positive_selling_price() {
        assert_eq!(compute_margin(50.0, 0.0), 0.0);
        assert_eq!(compute_margin(50.0, -3.0), 0.0);
        assert_eq!(compute_margin(0.0, 0.0), 0.0);
    }

    #[test]
    fn price_from_margin_known_scenario() {
        // purchase 80 at 25% margin -> 106.67 after rounding
        let price = selling_price_from_margin(80.0, 25.0).unwrap();
        assert!(approx_eq(round2(price), 106.67));
    }

    #[test]
    fn price_from_margin_rejects_100_percent_and_above() {
        assert_eq!(
            selling_price_from_margin(80.0, 100.0),
            Err(PricingError::InvalidMargin(100.0))
        );
        assert_eq!(
            selling_price_from_margin(80.0, 150.0),
            Err(PricingError::InvalidMargin(150.0))
        );
    }

    #[test]
    fn margin_round_trips_through_derived_price() {
        for purchase in [0.5, 12.0, 80.0, 999.99] {
            for margin in [0.0, 5.0, 10.0, 25.0, 33.3, 50.0, 99.0] {
                let price = selling_price_from_margin(purchase, margin).unwrap();
                let back = compute_margin(purchase, price);
                assert!(
                    (back - margin).abs() < 1e-6,
                    "purchase {} margin {} came back as {}",
                    purchase,
                    margin,
                    back
                );
            }
        }
    }

    #[test]
    fn loss_scenario_classified_as_loss() {
        // purchase 50, selling 40 -> -10.00 profit, loss band
        let margin = compute_margin(50.0, 40.0);
        assert!(approx_eq(compute_profit(50.0, 40.0), -10.0));
        assert_eq!(MarginBand::classify(margin), MarginBand::Loss);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(MarginBand::classify(-0.01), MarginBand::Loss);
        assert_eq!(MarginBand::classify(0.0), MarginBand::Low);
        assert_eq!(MarginBand::classify(9.99), MarginBand::Low);
        assert_eq!(MarginBand::classify(10.0), MarginBand::Healthy);
        assert_eq!(MarginBand::classify(55.0), MarginBand::Healthy);
    }

    #[test]
    fn presets_are_ordered_and_all_valid() {
        let mut prev = 0.0;
        for preset in QUICK_MARGIN_PRESETS {
            assert!(preset > prev);
            assert!(selling_price_from_margin(100.0, preset).is_ok());
            prev = preset;
        }
    }
}
