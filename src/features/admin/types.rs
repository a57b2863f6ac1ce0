//! Record kinds, generic admin records, and the per-kind column sets.
//!
//! Records are server-defined JSON objects kept verbatim (field order included)
//! so that whatever the backend returns is what the dialog shows and what a save
//! sends back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

const MISSING: &str = "N/A";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Users,
    Submissions,
    Payments,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::Users,
        RecordKind::Submissions,
        RecordKind::Payments,
    ];

    /// Path segment used in `/admin/{kind}`.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Users => "users",
            RecordKind::Submissions => "submissions",
            RecordKind::Payments => "payments",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RecordKind::Users => "Users",
            RecordKind::Submissions => "Submissions",
            RecordKind::Payments => "Payments",
        }
    }

    pub fn collection_path(self) -> String {
        format!("/admin/{}", self.as_str())
    }

    pub fn record_path(self, id: &str) -> String {
        format!("/admin/{}/{}", self.as_str(), id.trim())
    }

    /// Payments are view-only.
    pub fn can_edit(self) -> bool {
        matches!(self, RecordKind::Users | RecordKind::Submissions)
    }

    pub fn can_delete(self) -> bool {
        matches!(self, RecordKind::Users)
    }

    pub fn columns(self) -> &'static [Column] {
        match self {
            RecordKind::Users => USER_COLUMNS,
            RecordKind::Submissions => SUBMISSION_COLUMNS,
            RecordKind::Payments => PAYMENT_COLUMNS,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            RecordKind::Users => 0,
            RecordKind::Submissions => 1,
            RecordKind::Payments => 2,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row as the backend sent it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Identifier rendered as text; numeric ids are accepted.
    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    /// Non-empty display text of a field; `None` for missing, null, or blank.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(display_value)
            .filter(|text| !text.trim().is_empty())
    }

    /// Display text of a field, empty for missing or null.
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(display_value).unwrap_or_default()
    }

    /// All fields in server order with their display text.
    pub fn fields(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), display_value(value)))
    }

    /// Replaces an existing field from user input. The `id` field and unknown
    /// keys are left alone. Numbers and booleans keep their type when the text
    /// still parses as one; a null field left empty stays null.
    pub fn set_text(&mut self, key: &str, text: &str) -> bool {
        if key == "id" {
            return false;
        }
        let Some(current) = self.0.get_mut(key) else {
            return false;
        };
        *current = coerce(current, text);
        true
    }
}

/// Dialog label for a field key: underscores become spaces, upper-cased.
pub fn field_label(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn coerce(current: &Value, text: &str) -> Value {
    match current {
        Value::Null if text.is_empty() => Value::Null,
        Value::Number(_) => parse_number(text)
            .map_or_else(|| Value::String(text.to_string()), Value::Number),
        Value::Bool(_) => match text.trim() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(text.to_string()),
        },
        _ => Value::String(text.to_string()),
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Some(Number::from(integer));
    }
    trimmed.parse::<f64>().ok().and_then(Number::from_f64)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Badge { label: String, tone: Tone },
}

/// One table column: its header and how a record renders into it.
#[derive(Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub cell: fn(&Record) -> Cell,
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column").field("header", &self.header).finish()
    }
}

const USER_COLUMNS: &[Column] = &[
    Column {
        header: "ID",
        cell: |r| raw(r, "id"),
    },
    Column {
        header: "Email",
        cell: |r| raw(r, "email"),
    },
    Column {
        header: "Name",
        cell: |r| or_missing(r, "name"),
    },
    Column {
        header: "State",
        cell: |r| or_missing(r, "state"),
    },
    Column {
        header: "Registration Date",
        cell: |r| date(r, "created_at"),
    },
    Column {
        header: "Status",
        cell: active_badge,
    },
];

const SUBMISSION_COLUMNS: &[Column] = &[
    Column {
        header: "ID",
        cell: |r| raw(r, "id"),
    },
    Column {
        header: "User Email",
        cell: |r| raw(r, "user_email"),
    },
    Column {
        header: "Form Type",
        cell: |r| raw(r, "form_type"),
    },
    Column {
        header: "Status",
        cell: |r| status_badge(r, "submitted"),
    },
    Column {
        header: "Submission Date",
        cell: |r| date(r, "submission_date"),
    },
    Column {
        header: "Tax Owed",
        cell: |r| money(r, "tax_owed"),
    },
];

const PAYMENT_COLUMNS: &[Column] = &[
    Column {
        header: "ID",
        cell: |r| raw(r, "id"),
    },
    Column {
        header: "User Email",
        cell: |r| raw(r, "user_email"),
    },
    Column {
        header: "Amount",
        cell: |r| money(r, "amount"),
    },
    Column {
        header: "Payment Method",
        cell: |r| upper(r, "payment_method"),
    },
    Column {
        header: "Status",
        cell: |r| status_badge(r, "completed"),
    },
    Column {
        header: "Payment Date",
        cell: |r| date(r, "payment_date"),
    },
    Column {
        header: "Transaction ID",
        cell: |r| raw(r, "transaction_id"),
    },
];

fn raw(record: &Record, key: &str) -> Cell {
    Cell::Text(record.text(key).unwrap_or_default())
}

fn or_missing(record: &Record, key: &str) -> Cell {
    Cell::Text(record.text(key).unwrap_or_else(|| MISSING.to_string()))
}

fn upper(record: &Record, key: &str) -> Cell {
    Cell::Text(record.text(key).unwrap_or_default().to_uppercase())
}

/// Calendar date of an ISO-8601 timestamp (`2024-04-15T10:00:00Z` → `2024-04-15`).
fn date(record: &Record, key: &str) -> Cell {
    let text = record
        .text(key)
        .and_then(|value| {
            value
                .split(['T', ' '])
                .next()
                .map(str::to_string)
                .filter(|day| !day.is_empty())
        })
        .unwrap_or_else(|| MISSING.to_string());
    Cell::Text(text)
}

/// Dollar amount with two decimals; missing or unparsable values show `$0.00`.
fn money(record: &Record, key: &str) -> Cell {
    let amount = match record.get(key) {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .unwrap_or(0.0);
    Cell::Text(format!("${amount:.2}"))
}

fn active_badge(record: &Record) -> Cell {
    let active = match record.get("is_active") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text == "true",
        _ => false,
    };
    if active {
        Cell::Badge {
            label: "Active".to_string(),
            tone: Tone::Success,
        }
    } else {
        Cell::Badge {
            label: "Inactive".to_string(),
            tone: Tone::Neutral,
        }
    }
}

fn status_badge(record: &Record, success_value: &str) -> Cell {
    let status = record.text("status").unwrap_or_else(|| MISSING.to_string());
    let tone = if status == success_value {
        Tone::Success
    } else {
        Tone::Warning
    };
    Cell::Badge {
        label: status,
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).expect("object")
    }

    fn cells(kind: RecordKind, record: &Record) -> Vec<Cell> {
        kind.columns().iter().map(|column| (column.cell)(record)).collect()
    }

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    #[test]
    fn kind_paths_and_capabilities() {
        assert_eq!(RecordKind::Users.collection_path(), "/admin/users");
        assert_eq!(RecordKind::Submissions.record_path(" 7 "), "/admin/submissions/7");
        assert!(RecordKind::Users.can_delete());
        assert!(!RecordKind::Submissions.can_delete());
        assert!(RecordKind::Submissions.can_edit());
        assert!(!RecordKind::Payments.can_edit());
        assert!(!RecordKind::Payments.can_delete());
    }

    #[test]
    fn user_row_fills_missing_fields() {
        let user = record(json!({
            "id": 3,
            "email": "a@b.test",
            "name": null,
            "created_at": "2024-04-15T10:00:00Z",
            "is_active": true
        }));

        assert_eq!(
            cells(RecordKind::Users, &user),
            vec![
                text("3"),
                text("a@b.test"),
                text("N/A"),
                text("N/A"),
                text("2024-04-15"),
                Cell::Badge {
                    label: "Active".to_string(),
                    tone: Tone::Success
                },
            ]
        );
    }

    #[test]
    fn submission_row_formats_money_and_status() {
        let submission = record(json!({
            "id": "s-1",
            "user_email": "a@b.test",
            "form_type": "1040",
            "status": "draft",
            "submission_date": "2024-03-01 08:00:00"
        }));

        let row = cells(RecordKind::Submissions, &submission);
        assert_eq!(
            row[3],
            Cell::Badge {
                label: "draft".to_string(),
                tone: Tone::Warning
            }
        );
        assert_eq!(row[4], text("2024-03-01"));
        assert_eq!(row[5], text("$0.00"));
    }

    #[test]
    fn payment_row_formats_amount_and_method() {
        let payment = record(json!({
            "id": 9,
            "user_email": "a@b.test",
            "amount": 12.5,
            "payment_method": "card",
            "status": "completed",
            "payment_date": "2024-05-02T00:00:00",
            "transaction_id": "tx-1"
        }));

        let row = cells(RecordKind::Payments, &payment);
        assert_eq!(row[2], text("$12.50"));
        assert_eq!(row[3], text("CARD"));
        assert_eq!(
            row[4],
            Cell::Badge {
                label: "completed".to_string(),
                tone: Tone::Success
            }
        );
        assert_eq!(row[6], text("tx-1"));
    }

    #[test]
    fn fields_keep_server_order() {
        let user = record(json!({"id": 1, "zeta": "z", "alpha": null}));
        let keys: Vec<_> = user.fields().map(|(key, _)| key.to_string()).collect();
        assert_eq!(keys, vec!["id", "zeta", "alpha"]);
        assert_eq!(user.fields().nth(2).map(|(_, value)| value), Some(String::new()));
        assert_eq!(user.display("id"), "1");
        assert_eq!(user.display("alpha"), "");
        assert_eq!(user.display("missing"), "");
    }

    #[test]
    fn set_text_protects_id_and_keeps_types() {
        let mut user = record(json!({
            "id": 1,
            "age": 30,
            "is_active": false,
            "name": null,
            "state": "CA"
        }));

        assert!(!user.set_text("id", "2"));
        assert!(!user.set_text("unknown", "x"));
        assert!(user.set_text("age", "31"));
        assert!(user.set_text("is_active", "true"));
        assert!(user.set_text("name", ""));
        assert!(user.set_text("state", "NY"));

        assert_eq!(
            serde_json::to_value(&user).expect("serialize"),
            json!({"id": 1, "age": 31, "is_active": true, "name": null, "state": "NY"})
        );

        assert!(user.set_text("age", "thirty"));
        assert_eq!(user.get("age"), Some(&json!("thirty")));
    }

    #[test]
    fn field_label_uppercases_and_spaces() {
        assert_eq!(field_label("tax_owed"), "TAX OWED");
        assert_eq!(field_label("id"), "ID");
    }
}
