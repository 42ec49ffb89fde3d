//! Percentage discount.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discount {
    pub discount_amount: f64,
    pub final_price: f64,
    pub savings: f64,
}

pub fn compute_discount(price: f64, percent: f64) -> Discount {
    let discount_amount = price * percent / 100.0;
    Discount {
        discount_amount,
        final_price: price - discount_amount,
        savings: discount_amount,
    }
}

/// Whether the result panel is worth showing.
pub fn has_result(price: f64, percent: f64) -> bool {
    price > 0.0 && percent > 0.0
}
