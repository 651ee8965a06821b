//! Input limit listing

use crate::config::Limits;

/// Format the limits as an aligned two-column listing
pub fn format_limits(limits: &Limits) -> String {
    let rows = [
        ("Loan amount", limits.max_loan_amount),
        ("Savings goal", limits.max_goal_amount),
        ("Monthly deposit", limits.max_monthly_deposit),
        ("Annual rate", limits.max_annual_rate),
        ("Term (months)", limits.max_term_months),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut output = String::new();
    output.push_str("Input limits (each value must be at least 0 and below its maximum)\n");
    output.push_str(&format!("{:-<width$}\n", "", width = label_width + 14));
    for (label, max) in rows {
        output.push_str(&format!(
            "{:<label_width$}  {:>12}\n",
            label,
            max,
            label_width = label_width,
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_limits() {
        let output = format_limits(&Limits::default());
        assert!(output.contains("Loan amount"));
        assert!(output.contains("1000000"));
        assert!(output.contains("Term (months)"));
        assert!(output.contains("120"));
        assert_eq!(output.lines().count(), 7);
    }
}
