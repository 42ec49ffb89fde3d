//! Equated monthly installment for an amortizing loan.
//!
//! `emi = P * r * (1 + r)^n / ((1 + r)^n - 1)` with `r` the monthly rate
//! and `n` the number of monthly payments. It is evaluated as
//! `P * r / (1 - (1 + r)^-n)`, which stays finite for very long tenures.

/// Longest tenure, in months, that [`amortization_schedule`] will expand.
pub const MAX_SCHEDULE_MONTHS: f64 = 1200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmiInput {
    pub principal: f64,
    /// Annual interest rate in percent.
    pub annual_rate_percent: f64,
    pub years: f64,
}

impl EmiInput {
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 12.0 / 100.0
    }

    pub fn months(&self) -> f64 {
        self.years * 12.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmiBreakdown {
    pub monthly_payment: f64,
    pub total_amount: f64,
    pub total_interest: f64,
}

/// Returns `None` when principal, rate or tenure is not positive, or when
/// the totals do not fit in an `f64`.
pub fn compute_emi(input: &EmiInput) -> Option<EmiBreakdown> {
    let principal = input.principal;
    let rate = input.monthly_rate();
    let months = input.months();
    if !(principal > 0.0 && rate > 0.0 && months > 0.0) {
        return None;
    }

    let discount = (1.0 + rate).powf(-months);
    let monthly_payment = principal * rate / (1.0 - discount);
    let total_amount = monthly_payment * months;
    if !(monthly_payment.is_finite() && total_amount.is_finite()) {
        return None;
    }
    Some(EmiBreakdown {
        monthly_payment,
        total_amount,
        total_interest: total_amount - principal,
    })
}

/// One month of an amortization table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationRow {
    /// One-based payment number.
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

/// Month-by-month split of each installment into interest and principal.
///
/// Fractional tenures are rounded up to whole months; the final row absorbs
/// rounding so the balance ends at zero. Tenures longer than
/// [`MAX_SCHEDULE_MONTHS`] yield `None`.
pub fn amortization_schedule(input: &EmiInput) -> Option<Vec<AmortizationRow>> {
    if input.months() > MAX_SCHEDULE_MONTHS {
        return None;
    }
    let breakdown = compute_emi(input)?;
    let rate = input.monthly_rate();
    let months = input.months().ceil() as u32;

    let mut balance = input.principal;
    let mut rows = Vec::with_capacity(months as usize);
    for month in 1..=months {
        let interest = balance * rate;
        let mut principal = breakdown.monthly_payment - interest;
        if month == months || principal > balance {
            principal = balance;
        }
        balance -= principal;
        rows.push(AmortizationRow {
            month,
            payment: principal + interest,
            interest,
            principal,
            balance,
        });
    }
    Some(rows)
}
