use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded income or expense event.
///
/// The `id` is the creation-time timestamp in milliseconds and never
/// changes; rows are read-only after creation except for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub description: String,
    #[serde(with = "iso_datetime")]
    pub date: NaiveDateTime,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            kind,
            category: category.into(),
            amount,
            description: description.into(),
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Parses the ISO-8601 shapes found in stored documents: full RFC 3339
/// with `Z` or an offset, a naive datetime, or a bare date.
pub fn parse_iso_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0)
}

mod iso_datetime {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&date.format("%Y-%m-%dT%H:%M:%S%.3f").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(de)?;
        super::parse_iso_datetime(&raw)
            .ok_or_else(|| de::Error::custom(format!("unparseable date `{}`", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
        let back: TransactionKind = serde_json::from_str("\"income\"").unwrap();
        assert_eq!(back, TransactionKind::Income);
    }

    #[test]
    fn parses_rfc3339_naive_and_bare_dates() {
        for raw in [
            "2024-03-05T12:30:00.000Z",
            "2024-03-05T12:30:00",
            "2024-03-05",
        ] {
            let parsed = parse_iso_datetime(raw).expect(raw);
            assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        }
        assert!(parse_iso_datetime("not-a-date").is_none());
    }

    #[test]
    fn deserializing_a_record_keeps_the_stored_fields() {
        let json = r#"{
            "id": 1709640000000,
            "type": "expense",
            "category": "Food",
            "amount": 250.0,
            "description": "groceries",
            "date": "2024-03-05T12:00:00.000Z"
        }"#;
        let txn: Transaction = serde_json::from_str(json).expect("valid record");
        assert_eq!(txn.id, 1709640000000);
        assert!(txn.is_expense());
        assert_eq!(txn.category, "Food");
    }
}
