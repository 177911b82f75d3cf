//! Client-side descriptors for the backend's CRUD resources.
//!
//! The backend owns every record shape; the UI only needs enough structure to
//! render tables and forms. A record is therefore an ordered field map of
//! JSON values, and each resource carries a static [`ResourceSchema`] that
//! drives the generic table, form and hook.

use indexmap::IndexMap;
use serde_json::Value;

/// One row as returned by the backend, fields in response order.
pub type Record = IndexMap<String, Value>;

/// Raw form input keyed by field key, before validation.
pub type Draft = IndexMap<&'static str, String>;

/// Primary key of a record. The backend sends it either as a JSON number or
/// as a numeric string.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::FromStr,
    derive_more::Into,
    serde::Serialize,
    serde::Deserialize,
)]
#[display("{_0}")]
pub struct RecordId(i64);

impl RecordId {
    pub const fn new(id: i64) -> Self {
        RecordId(id)
    }
}

/// Extracts the primary key from a record, if the backend sent one.
pub fn record_id(record: &Record) -> Option<RecordId> {
    match record.get("id")? {
        Value::Number(n) => n.as_i64().map(RecordId),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Integer,
    Decimal,
    Boolean,
    Select(&'static [&'static str]),
    /// Server-owned timestamp (RFC 3339). Displayed, never edited.
    DateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Whether the field appears in create/edit forms. The primary key and
    /// server-owned timestamps are display-only.
    pub editable: bool,
}

impl FieldDef {
    pub const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FieldDef {
            key,
            label,
            kind,
            required: true,
            editable: true,
        }
    }

    pub const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FieldDef {
            key,
            label,
            kind,
            required: false,
            editable: true,
        }
    }

    pub const fn readonly(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FieldDef {
            key,
            label,
            kind,
            required: false,
            editable: false,
        }
    }
}

/// Static description of one backend resource: where it lives and which
/// fields the UI shows. One `const` per entity, instantiating the generic
/// page/table/form/hook quadruple.
#[derive(Debug, PartialEq, Eq)]
pub struct ResourceSchema {
    /// Collection segment under the API base URL, e.g. `categories`.
    pub path: &'static str,
    /// Plural heading, e.g. `Categories`.
    pub title: &'static str,
    /// Singular noun for buttons and toasts, e.g. `Category`.
    pub singular: &'static str,
    pub fields: &'static [FieldDef],
}

impl ResourceSchema {
    pub fn editable_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.editable)
    }
}

/// Validation failure for a single form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub key: &'static str,
    pub message: String,
}

/// Parses a raw form draft into a typed record. Any missing required field or
/// unparsable value fails the whole draft; callers must not submit anything
/// until this returns `Ok`.
pub fn validate(schema: &ResourceSchema, draft: &Draft) -> Result<Record, Vec<FieldError>> {
    let mut record = Record::new();
    let mut errors = Vec::new();
    for field in schema.editable_fields() {
        let raw = draft.get(field.key).map(String::as_str).unwrap_or("");
        let raw = raw.trim();
        if raw.is_empty() {
            if field.required {
                errors.push(FieldError {
                    key: field.key,
                    message: "required".to_string(),
                });
            } else if field.kind == FieldKind::Boolean {
                // an unchecked checkbox submits nothing
                record.insert(field.key.to_string(), Value::Bool(false));
            }
            continue;
        }
        match parse_value(field.kind, raw) {
            Ok(value) => {
                record.insert(field.key.to_string(), value);
            }
            Err(message) => errors.push(FieldError {
                key: field.key,
                message,
            }),
        }
    }
    if errors.is_empty() {
        Ok(record)
    } else {
        Err(errors)
    }
}

fn parse_value(kind: FieldKind, raw: &str) -> Result<Value, String> {
    match kind {
        FieldKind::Text | FieldKind::LongText => Ok(Value::String(raw.to_string())),
        FieldKind::Integer => raw
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| "must be a whole number".to_string()),
        FieldKind::Decimal => {
            let number = raw
                .parse::<f64>()
                .map_err(|_| "must be a number".to_string())?;
            serde_json::Number::from_f64(number)
                .map(Value::Number)
                .ok_or_else(|| "must be a finite number".to_string())
        }
        FieldKind::Boolean => match raw {
            "true" | "on" | "1" => Ok(Value::Bool(true)),
            "false" | "off" | "0" => Ok(Value::Bool(false)),
            _ => Err("must be a boolean".to_string()),
        },
        FieldKind::Select(options) => {
            if options.contains(&raw) {
                Ok(Value::String(raw.to_string()))
            } else {
                Err(format!("must be one of: {}", options.join(", ")))
            }
        }
        FieldKind::DateTime => Err("is set by the server".to_string()),
    }
}

/// Seeds a form draft from an existing record for editing.
pub fn draft_from_record(schema: &ResourceSchema, record: &Record) -> Draft {
    let mut draft = Draft::new();
    for field in schema.editable_fields() {
        let raw = match record.get(field.key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            // nested structures are backend-owned; show them verbatim
            Some(other) => other.to_string(),
        };
        draft.insert(field.key, raw);
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_SCHEMA: ResourceSchema = ResourceSchema {
        path: "widgets",
        title: "Widgets",
        singular: "Widget",
        fields: &[
            FieldDef::readonly("id", "ID", FieldKind::Integer),
            FieldDef::required("name", "Name", FieldKind::Text),
            FieldDef::required("count", "Count", FieldKind::Integer),
            FieldDef::optional("price", "Price", FieldKind::Decimal),
            FieldDef::optional("active", "Active", FieldKind::Boolean),
            FieldDef::required("size", "Size", FieldKind::Select(&["small", "large"])),
            FieldDef::readonly("created_at", "Created", FieldKind::DateTime),
        ],
    };

    fn full_draft() -> Draft {
        Draft::from_iter([
            ("name", "Towel".to_string()),
            ("count", "3".to_string()),
            ("price", "9.50".to_string()),
            ("active", "true".to_string()),
            ("size", "small".to_string()),
        ])
    }

    #[test]
    fn valid_draft_produces_typed_record() {
        let record = validate(&TEST_SCHEMA, &full_draft()).unwrap();
        assert_eq!(record.get("name"), Some(&json!("Towel")));
        assert_eq!(record.get("count"), Some(&json!(3)));
        assert_eq!(record.get("price"), Some(&json!(9.5)));
        assert_eq!(record.get("active"), Some(&json!(true)));
        assert_eq!(record.get("size"), Some(&json!("small")));
        // display-only fields never end up in the payload
        assert!(!record.contains_key("id"));
        assert!(!record.contains_key("created_at"));
    }

    #[test]
    fn missing_required_field_blocks_the_draft() {
        let mut draft = full_draft();
        draft.insert("name", "   ".to_string());
        let errors = validate(&TEST_SCHEMA, &draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, "name");
        assert_eq!(errors[0].message, "required");
    }

    #[test]
    fn unparsable_values_are_reported_per_field() {
        let mut draft = full_draft();
        draft.insert("count", "three".to_string());
        draft.insert("price", "a lot".to_string());
        let errors = validate(&TEST_SCHEMA, &draft).unwrap_err();
        let keys: Vec<_> = errors.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["count", "price"]);
    }

    #[test]
    fn unknown_select_option_is_rejected() {
        let mut draft = full_draft();
        draft.insert("size", "medium".to_string());
        let errors = validate(&TEST_SCHEMA, &draft).unwrap_err();
        assert_eq!(errors[0].key, "size");
        assert!(errors[0].message.contains("small, large"));
    }

    #[test]
    fn absent_checkbox_defaults_to_false() {
        let mut draft = full_draft();
        draft.swap_remove("active");
        let record = validate(&TEST_SCHEMA, &draft).unwrap();
        assert_eq!(record.get("active"), Some(&json!(false)));
    }

    #[test]
    fn absent_optional_field_is_omitted() {
        let mut draft = full_draft();
        draft.insert("price", String::new());
        let record = validate(&TEST_SCHEMA, &draft).unwrap();
        assert!(!record.contains_key("price"));
    }

    #[test]
    fn record_id_accepts_number_and_numeric_string() {
        let record = Record::from_iter([("id".to_string(), json!(7))]);
        assert_eq!(record_id(&record), Some(RecordId::new(7)));
        let record = Record::from_iter([("id".to_string(), json!("42"))]);
        assert_eq!(record_id(&record), Some(RecordId::new(42)));
        let record = Record::from_iter([("name".to_string(), json!("no id"))]);
        assert_eq!(record_id(&record), None);
    }

    #[test]
    fn draft_round_trips_editable_fields() {
        let record = Record::from_iter([
            ("id".to_string(), json!(1)),
            ("name".to_string(), json!("Towel")),
            ("count".to_string(), json!(3)),
            ("price".to_string(), json!(9.5)),
            ("active".to_string(), json!(true)),
            ("size".to_string(), json!("small")),
            ("created_at".to_string(), json!("2026-01-01T00:00:00Z")),
        ]);
        let draft = draft_from_record(&TEST_SCHEMA, &record);
        assert_eq!(draft.get("name").unwrap(), "Towel");
        assert_eq!(draft.get("count").unwrap(), "3");
        assert!(!draft.contains_key("id"));
        assert!(!draft.contains_key("created_at"));
        assert!(validate(&TEST_SCHEMA, &draft).is_ok());
    }
}
