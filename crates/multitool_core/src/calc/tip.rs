//! Tip splitting.

/// Quick-pick tip percentages.
pub const PRESET_TIP_PERCENTAGES: [u32; 5] = [10, 15, 18, 20, 25];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipInput {
    pub bill: f64,
    pub tip_percent: f64,
    pub people: u32,
}

impl Default for TipInput {
    fn default() -> Self {
        Self {
            bill: 0.0,
            tip_percent: 15.0,
            people: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipBreakdown {
    pub tip_amount: f64,
    pub total: f64,
    pub per_person: f64,
    pub tip_per_person: f64,
}

/// Splits bill plus tip; fewer than one person counts as one.
pub fn compute_tip(input: &TipInput) -> TipBreakdown {
    let people = f64::from(input.people.max(1));
    let tip_amount = input.bill * input.tip_percent / 100.0;
    let total = input.bill + tip_amount;
    TipBreakdown {
        tip_amount,
        total,
        per_person: total / people,
        tip_per_person: tip_amount / people,
    }
}
