//! Closed-form amortization formulas
//!
//! All three take a principal, a monthly rate (annual rate already divided
//! by 12) and a term in months. Nothing here guards against a zero rate:
//! the division yields NaN or infinity and that value is returned as is.

/// Fixed monthly payment that repays `principal` over `term_months`
///
/// `P * r / (1 - (1 + r)^-n)`
pub fn loan_payment(principal: f64, monthly_rate: f64, term_months: f64) -> f64 {
    principal * (monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-term_months)))
}

/// Amount accumulated by depositing `deposit` every month
///
/// `|d * (1 - (1 + r)^n) / r|`. The raw expression is negative for positive
/// rates, hence the absolute value.
pub fn savings_goal(deposit: f64, monthly_rate: f64, term_months: f64) -> f64 {
    (deposit * ((1.0 - (1.0 + monthly_rate).powf(term_months)) / monthly_rate)).abs()
}

/// Monthly deposit required to accumulate `goal`
///
/// `|g * r / (1 - (1 + r)^n)|`, the inverse of [`savings_goal`].
pub fn future_value_deposit(goal: f64, monthly_rate: f64, term_months: f64) -> f64 {
    (goal * (monthly_rate / (1.0 - (1.0 + monthly_rate).powf(term_months)))).abs()
}
