use chrono::Timelike;

use super::super::domain::Receipt;
use super::{ScoreComponent, ScoringError, ScoringRule};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
/// Exclusive bounds, as minutes past midnight.
const AFTERNOON_START: u32 = 14 * 60;
const AFTERNOON_END: u32 = 16 * 60;
/// `ceil(price * 0.2)` is `ceil(cents / 500)`.
const CENTS_PER_DESCRIPTION_POINT: u64 = 500;

pub(crate) fn score_receipt(receipt: &Receipt) -> Result<Vec<ScoreComponent>, ScoringError> {
    Ok(vec![
        retailer_name(receipt),
        round_dollar_total(receipt),
        quarter_multiple_total(receipt),
        item_pairs(receipt)?,
        description_length(receipt)?,
        odd_purchase_day(receipt),
        afternoon_purchase(receipt),
    ])
}

fn retailer_name(receipt: &Receipt) -> ScoreComponent {
    let alphanumeric = receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as u64;

    ScoreComponent {
        rule: ScoringRule::RetailerName,
        points: alphanumeric,
        notes: format!(
            "{alphanumeric} alphanumeric character(s) in '{}'",
            receipt.retailer
        ),
    }
}

fn round_dollar_total(receipt: &Receipt) -> ScoreComponent {
    let round = receipt.total.cents() % 100 == 0;
    ScoreComponent {
        rule: ScoringRule::RoundDollarTotal,
        points: if round { ROUND_DOLLAR_POINTS } else { 0 },
        notes: if round {
            format!("total {} has no cents", receipt.total)
        } else {
            format!("total {} is not a round dollar amount", receipt.total)
        },
    }
}

fn quarter_multiple_total(receipt: &Receipt) -> ScoreComponent {
    let multiple = receipt.total.cents() % 25 == 0;
    ScoreComponent {
        rule: ScoringRule::QuarterMultipleTotal,
        points: if multiple { QUARTER_MULTIPLE_POINTS } else { 0 },
        notes: if multiple {
            format!("total {} is a multiple of 0.25", receipt.total)
        } else {
            format!("total {} is not a multiple of 0.25", receipt.total)
        },
    }
}

fn item_pairs(receipt: &Receipt) -> Result<ScoreComponent, ScoringError> {
    let pairs = (receipt.items.len() / 2) as u64;
    let points = pairs
        .checked_mul(POINTS_PER_ITEM_PAIR)
        .ok_or(ScoringError::Overflow {
            rule: ScoringRule::ItemPairs,
        })?;

    Ok(ScoreComponent {
        rule: ScoringRule::ItemPairs,
        points,
        notes: format!("{pairs} pair(s) across {} item(s)", receipt.items.len()),
    })
}

fn description_length(receipt: &Receipt) -> Result<ScoreComponent, ScoringError> {
    let mut points: u64 = 0;
    let mut qualifying = 0usize;

    for item in &receipt.items {
        let len = item.trimmed_description_len();
        if len == 0 || len % 3 != 0 {
            continue;
        }

        qualifying += 1;
        points = points
            .checked_add(item.price.cents().div_ceil(CENTS_PER_DESCRIPTION_POINT))
            .ok_or(ScoringError::Overflow {
                rule: ScoringRule::DescriptionLength,
            })?;
    }

    Ok(ScoreComponent {
        rule: ScoringRule::DescriptionLength,
        points,
        notes: format!("{qualifying} item description(s) with a length divisible by 3"),
    })
}

fn odd_purchase_day(receipt: &Receipt) -> ScoreComponent {
    let day = receipt.purchase_date.day;
    let odd = day % 2 == 1;
    ScoreComponent {
        rule: ScoringRule::OddPurchaseDay,
        points: if odd { ODD_DAY_POINTS } else { 0 },
        notes: format!("purchased on day {day}"),
    }
}

fn afternoon_purchase(receipt: &Receipt) -> ScoreComponent {
    let time = receipt.purchase_time;
    let minute_of_day = time.hour() * 60 + time.minute();
    let within = minute_of_day > AFTERNOON_START && minute_of_day < AFTERNOON_END;

    ScoreComponent {
        rule: ScoringRule::AfternoonPurchase,
        points: if within { AFTERNOON_POINTS } else { 0 },
        notes: format!("purchased at {}", time.format("%H:%M")),
    }
}
