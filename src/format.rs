//! Display helpers shared by the API views: peso amounts, pay period labels
//! and short notes explaining how each contribution was derived.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::contribution::{ContributionBreakdown, ContributionRules, Scheme};
use crate::money::Rate;

/// `₱1,234,567.89`; negative amounts as `-₱1,234.50`.
pub fn format_peso(amount: Decimal) -> String {
    peso_with_places(amount, 2)
}

/// `₱20,000`, rounded to whole pesos.
pub fn format_peso_whole(amount: Decimal) -> String {
    peso_with_places(amount, 0)
}

fn peso_with_places(amount: Decimal, places: u32) -> String {
    let mut rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{}₱{}.{}", sign, grouped, f),
        None => format!("{}₱{}", sign, grouped),
    }
}

/// `0.9044` becomes `90.44%`.
pub fn format_percentage(fraction: Decimal) -> String {
    let mut pct = (fraction * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    pct.rescale(2);
    format!("{}%", pct)
}

fn rate_percent(rate: Rate, places: u32) -> String {
    let mut pct = rate
        .as_percent()
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    pct.rescale(places);
    pct.to_string()
}

fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// `November, 2025` for a whole calendar month, `Nov 1 - 15, 2025` otherwise.
pub fn format_pay_period(start: NaiveDate, end: NaiveDate) -> String {
    let full_month = start.day() == 1 && last_day_of_month(start) == Some(end);
    if full_month {
        start.format("%B, %Y").to_string()
    } else {
        format!("{} - {}", start.format("%b %-d"), end.format("%-d, %Y"))
    }
}

/// Short explanation of how a breakdown's employee share was derived.
pub fn basis_note(breakdown: &ContributionBreakdown, rules: &ContributionRules) -> Option<String> {
    match breakdown.scheme {
        Scheme::Sss => breakdown.employee_rate.map(|rate| {
            format!(
                "{}% of MSC ({})",
                rate_percent(rate, 1),
                format_peso_whole(breakdown.base.amount())
            )
        }),
        Scheme::PhilHealth => Some(match breakdown.employee_rate {
            Some(rate) => format!(
                "{}% of ({})",
                rate_percent(rate, 1),
                format_peso(breakdown.base.amount())
            ),
            None if breakdown.base <= rules.philhealth.floor_ceiling => format!(
                "Fixed Premium (Basis <= {})",
                format_peso_whole(rules.philhealth.floor_ceiling.amount())
            ),
            None => format!(
                "Fixed Premium (Basis > {})",
                format_peso(rules.philhealth.rated_ceiling.amount())
            ),
        }),
        Scheme::PagIbig => breakdown
            .employee_rate
            .filter(|rate| *rate > Rate::ZERO)
            .map(|rate| format!("{}% Contribution", rate_percent(rate, 0))),
    }
}
