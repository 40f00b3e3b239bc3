use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use super::domain::{Amount, Item, PurchaseDate, Receipt};

static RETAILER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+$").expect("retailer pattern compiles"));

static PURCHASE_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

static PURCHASE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d$").expect("time pattern compiles")
});

static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d{2}$").expect("amount pattern compiles"));

static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s\-]+$").expect("description pattern compiles"));

/// Reason a document was refused before scoring. The display strings are part of the public
/// HTTP contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReceiptRejection {
    #[error("receipt has not correct type")]
    NotAnObject,
    #[error("retailer name is not correct")]
    InvalidRetailer,
    #[error("purchase date is not correct")]
    InvalidPurchaseDate,
    #[error("purchase time is not correct")]
    InvalidPurchaseTime,
    #[error("receipt total is not correct")]
    InvalidTotal,
    #[error("receipt items are not correct")]
    InvalidItems,
}

/// Verdict returned by [`validate`] and [`is_receipt_id_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

impl From<ReceiptRejection> for ValidationResult {
    fn from(rejection: ReceiptRejection) -> Self {
        Self::invalid(rejection.to_string())
    }
}

/// Check a document without keeping the typed receipt.
pub fn validate(document: &Value) -> ValidationResult {
    match parse_receipt(document) {
        Ok(_) => ValidationResult::valid(),
        Err(rejection) => rejection.into(),
    }
}

/// Turn an untyped document into a [`Receipt`].
///
/// Fields are checked in a fixed order (retailer, purchase date, purchase time, total, items)
/// and the first failure is returned.
pub fn parse_receipt(document: &Value) -> Result<Receipt, ReceiptRejection> {
    let Value::Object(fields) = document else {
        return Err(ReceiptRejection::NotAnObject);
    };

    let retailer = matching_str(fields, "retailer", &RETAILER_PATTERN)
        .ok_or(ReceiptRejection::InvalidRetailer)?;
    let purchase_date = matching_str(fields, "purchaseDate", &PURCHASE_DATE_PATTERN)
        .and_then(PurchaseDate::parse)
        .ok_or(ReceiptRejection::InvalidPurchaseDate)?;
    let purchase_time = matching_str(fields, "purchaseTime", &PURCHASE_TIME_PATTERN)
        .and_then(parse_time)
        .ok_or(ReceiptRejection::InvalidPurchaseTime)?;
    let total = matching_str(fields, "total", &AMOUNT_PATTERN)
        .and_then(Amount::parse)
        .ok_or(ReceiptRejection::InvalidTotal)?;
    let items = fields
        .get("items")
        .and_then(parse_items)
        .ok_or(ReceiptRejection::InvalidItems)?;

    Ok(Receipt {
        retailer: retailer.to_string(),
        purchase_date,
        purchase_time,
        total,
        items,
    })
}

/// Lookup keys only need to be present; unknown and malformed keys are both "not found".
pub fn is_receipt_id_valid(id: &str) -> ValidationResult {
    if id.trim().is_empty() {
        ValidationResult::invalid("receipt id is not correct")
    } else {
        ValidationResult::valid()
    }
}

fn matching_str<'a>(fields: &'a Map<String, Value>, key: &str, pattern: &Regex) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| pattern.is_match(value))
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let (hour, minute) = raw.split_once(':')?;
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

fn parse_items(value: &Value) -> Option<Vec<Item>> {
    let entries = value.as_array().filter(|entries| !entries.is_empty())?;
    entries.iter().map(parse_item).collect()
}

fn parse_item(entry: &Value) -> Option<Item> {
    let fields = entry.as_object()?;
    let short_description = matching_str(fields, "shortDescription", &DESCRIPTION_PATTERN)?;
    let price = matching_str(fields, "price", &AMOUNT_PATTERN).and_then(Amount::parse)?;

    Some(Item {
        short_description: short_description.to_string(),
        price,
    })
}
