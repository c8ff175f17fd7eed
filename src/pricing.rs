//! Discount and purchase calculations
//!
//! A class listing carries any number of discount entries. Only active
//! entries count, and the single best rate is applied to the base price.

use serde::{Deserialize, Serialize};

/// A discount offered on a class listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountInfo {
    /// Short label shown on the card (e.g. "얼리버드")
    #[serde(default)]
    pub label: String,
    /// Discount rate in percent
    pub rate: u32,
    /// Inactive entries are listed but never applied
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl DiscountInfo {
    pub fn new(label: impl Into<String>, rate: u32, is_active: bool) -> Self {
        Self {
            label: label.into(),
            rate,
            is_active,
        }
    }
}

/// Outcome of applying the best active discount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountQuote {
    pub original_price: i64,
    pub discounted_price: i64,
    /// The entry that was applied, `None` when nothing was active
    pub applied: Option<DiscountInfo>,
}

impl DiscountQuote {
    /// Effective rate in percent (0 without a discount)
    pub fn rate(&self) -> u32 {
        self.applied.as_ref().map(|d| d.rate.min(100)).unwrap_or(0)
    }

    pub fn has_discount(&self) -> bool {
        self.applied.is_some()
    }

    /// Amount saved in won
    pub fn savings(&self) -> i64 {
        self.original_price - self.discounted_price
    }
}

/// Apply the highest active discount to a base price
///
/// Ties keep the first entry with the maximum rate. The result is rounded
/// half-up to the won; rates above 100 are treated as 100.
pub fn calculate_discount_price(base_price: i64, discounts: &[DiscountInfo]) -> DiscountQuote {
    let best = discounts
        .iter()
        .filter(|d| d.is_active)
        .fold(None::<&DiscountInfo>, |best, d| match best {
            Some(b) if b.rate >= d.rate => Some(b),
            _ => Some(d),
        });

    match best {
        Some(discount) => {
            let rate = i128::from(discount.rate.min(100));
            // half-up rounding, in i128 so the product cannot overflow
            let scaled = (i128::from(base_price) * (100 - rate) + 50).div_euclid(100);
            let discounted_price = i64::try_from(scaled).unwrap_or(base_price);

            DiscountQuote {
                original_price: base_price,
                discounted_price,
                applied: Some(discount.clone()),
            }
        }
        None => DiscountQuote {
            original_price: base_price,
            discounted_price: base_price,
            applied: None,
        },
    }
}

// ============================================
// Purchase box
// ============================================

/// Quantity selector and total for the product purchase box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseBox {
    unit_price: i64,
    shipping: i64,
    quantity: u32,
}

impl PurchaseBox {
    /// Start with a quantity of one
    pub fn new(unit_price: i64, shipping: i64) -> Self {
        Self {
            unit_price,
            shipping,
            quantity: 1,
        }
    }

    /// Builder method: set quantity (at least 1)
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increase(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Decrease the quantity, never below one
    pub fn decrease(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    pub fn can_decrease(&self) -> bool {
        self.quantity > 1
    }

    pub fn subtotal(&self) -> i64 {
        self.unit_price.saturating_mul(i64::from(self.quantity))
    }

    /// Subtotal plus shipping
    pub fn total(&self) -> i64 {
        self.subtotal().saturating_add(self.shipping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_active_discount_applies() {
        let discounts = vec![
            DiscountInfo::new("조기 신청", 10, true),
            DiscountInfo::new("단체", 25, true),
        ];

        let quote = calculate_discount_price(200_000, &discounts);
        assert_eq!(quote.discounted_price, 150_000);
        assert_eq!(quote.applied.as_ref().unwrap().rate, 25);
        assert_eq!(quote.rate(), 25);
        assert_eq!(quote.savings(), 50_000);
    }

    #[test]
    fn test_no_active_discount() {
        let discounts = vec![DiscountInfo::new("종료된 할인", 50, false)];

        let quote = calculate_discount_price(200_000, &discounts);
        assert_eq!(quote.discounted_price, 200_000);
        assert!(quote.applied.is_none());
        assert_eq!(quote.rate(), 0);

        let quote = calculate_discount_price(200_000, &[]);
        assert_eq!(quote.discounted_price, 200_000);
        assert!(!quote.has_discount());
    }

    #[test]
    fn test_inactive_higher_rate_ignored() {
        let discounts = vec![
            DiscountInfo::new("a", 40, false),
            DiscountInfo::new("b", 15, true),
        ];

        let quote = calculate_discount_price(100_000, &discounts);
        assert_eq!(quote.discounted_price, 85_000);
        assert_eq!(quote.applied.unwrap().label, "b");
    }

    #[test]
    fn test_tie_keeps_first() {
        let discounts = vec![
            DiscountInfo::new("first", 20, true),
            DiscountInfo::new("second", 20, true),
        ];

        let quote = calculate_discount_price(50_000, &discounts);
        assert_eq!(quote.applied.unwrap().label, "first");
    }

    #[test]
    fn test_rounding_to_won() {
        // 33,333 * 0.85 = 28,333.05
        let quote = calculate_discount_price(33_333, &[DiscountInfo::new("x", 15, true)]);
        assert_eq!(quote.discounted_price, 28_333);

        // 999 * 0.5 = 499.5 rounds up
        let quote = calculate_discount_price(999, &[DiscountInfo::new("x", 50, true)]);
        assert_eq!(quote.discounted_price, 500);
    }

    #[test]
    fn test_rate_over_hundred_clamps() {
        let quote = calculate_discount_price(10_000, &[DiscountInfo::new("x", 150, true)]);
        assert_eq!(quote.discounted_price, 0);
        assert_eq!(quote.rate(), 100);
    }

    #[test]
    fn test_huge_price_does_not_overflow() {
        let quote = calculate_discount_price(i64::MAX, &[DiscountInfo::new("x", 10, true)]);
        assert!(quote.discounted_price < i64::MAX);
        assert!(quote.discounted_price > i64::MAX / 10 * 8);

        let quote = calculate_discount_price(i64::MAX, &[DiscountInfo::new("x", 0, true)]);
        assert_eq!(quote.discounted_price, i64::MAX);

        let purchase = PurchaseBox::new(i64::MAX, 3_000).with_quantity(2);
        assert_eq!(purchase.total(), i64::MAX);
    }

    #[test]
    fn test_purchase_box() {
        let mut purchase = PurchaseBox::new(57_200, 3_000);
        assert_eq!(purchase.total(), 60_200);

        purchase.decrease();
        assert_eq!(purchase.quantity(), 1);
        assert!(!purchase.can_decrease());

        purchase.increase();
        purchase.increase();
        assert_eq!(purchase.quantity(), 3);
        assert_eq!(purchase.total(), 57_200 * 3 + 3_000);

        let purchase = PurchaseBox::new(1_000, 0).with_quantity(0);
        assert_eq!(purchase.quantity(), 1);
    }
}
