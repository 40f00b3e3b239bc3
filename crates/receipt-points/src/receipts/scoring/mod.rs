mod rules;

use serde::Serialize;

use super::domain::{Points, Receipt};

/// The individual checks that contribute to a receipt's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl ScoringRule {
    pub fn label(&self) -> &'static str {
        match self {
            ScoringRule::RetailerName => "Retailer name",
            ScoringRule::RoundDollarTotal => "Round dollar total",
            ScoringRule::QuarterMultipleTotal => "Quarter multiple total",
            ScoringRule::ItemPairs => "Item pairs",
            ScoringRule::DescriptionLength => "Description length",
            ScoringRule::OddPurchaseDay => "Odd purchase day",
            ScoringRule::AfternoonPurchase => "Afternoon purchase",
        }
    }
}

/// Points awarded by one rule, kept so a score can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub rule: ScoringRule,
    pub points: u64,
    pub notes: String,
}

/// Composite score and the per-rule trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub total: Points,
    pub components: Vec<ScoreComponent>,
}

impl PointsBreakdown {
    pub fn points_for(&self, rule: ScoringRule) -> u64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .sum()
    }
}

/// A point total that cannot be represented. Validated receipts only reach this with
/// amounts near the `u64` cents limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("points overflow while applying rule '{}'", .rule.label())]
    Overflow { rule: ScoringRule },
}

/// Apply every rule to a validated receipt and sum the contributions.
pub fn score(receipt: &Receipt) -> Result<PointsBreakdown, ScoringError> {
    let components = rules::score_receipt(receipt)?;

    let mut total: u64 = 0;
    for component in &components {
        total = total
            .checked_add(component.points)
            .ok_or(ScoringError::Overflow {
                rule: component.rule,
            })?;
    }

    Ok(PointsBreakdown {
        total: Points(total),
        components,
    })
}
