//! Generic list table: one row per record, edit/delete actions per row.
//! Purely presentational; every mutation goes back to the page through
//! callbacks. Row content is computed by [`build_rows`] so it can be tested
//! off-browser.

use crate::schema::{FieldDef, FieldKind, Record, RecordId, ResourceSchema, record_id};
use crate::util::time::relative_time;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::rc::Rc;
use yew::prelude::*;
use yewprint::Icon;

#[derive(Properties, PartialEq)]
pub struct ResourceTableProps {
    pub schema: &'static ResourceSchema,
    pub records: Rc<Vec<Record>>,
    pub on_edit: Callback<Record>,
    pub on_delete: Callback<RecordId>,
}

#[derive(Debug, PartialEq)]
pub(crate) struct CellModel {
    pub text: String,
    /// Absolute timestamp behind a relative display.
    pub title: Option<String>,
    pub numeric: bool,
}

#[derive(Debug, PartialEq)]
pub(crate) struct RowModel {
    pub key: String,
    pub id: Option<RecordId>,
    pub cells: Vec<CellModel>,
}

/// One [`RowModel`] per record, in the order the backend sent them.
pub(crate) fn build_rows(
    schema: &ResourceSchema,
    records: &[Record],
    now: DateTime<Utc>,
) -> Vec<RowModel> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let id = record_id(record);
            let key = id
                .map(|id| id.to_string())
                .unwrap_or_else(|| format!("row-{idx}"));
            let cells = schema
                .fields
                .iter()
                .map(|field| cell(field, record.get(field.key), now))
                .collect();
            RowModel { key, id, cells }
        })
        .collect()
}

fn cell(field: &FieldDef, value: Option<&Value>, now: DateTime<Utc>) -> CellModel {
    let numeric = matches!(field.kind, FieldKind::Integer | FieldKind::Decimal);
    let (text, title) = match (field.kind, value) {
        (_, None) | (_, Some(Value::Null)) => (String::new(), None),
        (FieldKind::Boolean, Some(Value::Bool(b))) => {
            (if *b { "Yes" } else { "No" }.to_string(), None)
        }
        (FieldKind::DateTime, Some(Value::String(raw))) => {
            match DateTime::parse_from_rfc3339(raw) {
                Ok(then) => (
                    relative_time(then.with_timezone(&Utc), now),
                    Some(raw.clone()),
                ),
                Err(_) => (raw.clone(), None),
            }
        }
        (FieldKind::Decimal, Some(Value::Number(n))) => {
            (format!("{:.2}", n.as_f64().unwrap_or_default()), None)
        }
        (_, Some(Value::String(s))) => (s.clone(), None),
        (_, Some(Value::Number(n))) => (n.to_string(), None),
        (_, Some(other)) => (other.to_string(), None),
    };
    CellModel {
        text,
        title,
        numeric,
    }
}

#[function_component(ResourceTable)]
pub fn resource_table(
    ResourceTableProps {
        schema,
        records,
        on_edit,
        on_delete,
    }: &ResourceTableProps,
) -> Html {
    if records.is_empty() {
        return html! {
            <p class="table-empty">{ format!("No {} yet.", schema.title.to_lowercase()) }</p>
        };
    }

    let rows = build_rows(schema, records, Utc::now())
        .into_iter()
        .zip(records.iter())
        .map(|(row, record)| {
            let edit = {
                let on_edit = on_edit.clone();
                let record = record.clone();
                Callback::from(move |_| on_edit.emit(record.clone()))
            };
            let delete = row.id.map(|id| {
                let on_delete = on_delete.clone();
                Callback::from(move |_| on_delete.emit(id))
            });

            html! {
                <tr key={row.key.clone()}>
                    { for row.cells.into_iter().map(|cell| {
                        let class = classes!(cell.numeric.then_some("number"));
                        html! {
                            <td {class}>
                                if let Some(title) = cell.title {
                                    <span {title}>{ cell.text }</span>
                                } else {
                                    { cell.text }
                                }
                            </td>
                        }
                    })}
                    <td class="row-actions">
                        <button title="Edit" onclick={edit} disabled={row.id.is_none()}>
                            <Icon icon={Icon::Edit} />
                        </button>
                        if let Some(delete) = delete {
                            <button title="Delete" onclick={delete}>
                                <Icon icon={Icon::Trash} />
                            </button>
                        } else {
                            <button title="Delete" disabled={true}>
                                <Icon icon={Icon::Trash} />
                            </button>
                        }
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    html! {
        <table class="resource-list">
            <thead>
                <tr>
                    { for schema.fields.iter().map(|field| {
                        let class = matches!(field.kind, FieldKind::Integer | FieldKind::Decimal)
                            .then_some("number");
                        html! { <th class={classes!(class)}>{ field.label }</th> }
                    })}
                    <th class="row-actions"></th>
                </tr>
            </thead>
            <tbody>
                { rows }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_SCHEMA: ResourceSchema = ResourceSchema {
        path: "payments",
        title: "Payments",
        singular: "Payment",
        fields: &[
            FieldDef::readonly("id", "ID", FieldKind::Integer),
            FieldDef::required("amount", "Amount", FieldKind::Decimal),
            FieldDef::readonly("paid_at", "Paid", FieldKind::DateTime),
        ],
    };

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-29T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn payment(id: i64, amount: f64) -> Record {
        Record::from_iter([
            ("id".to_string(), json!(id)),
            ("amount".to_string(), json!(amount)),
            ("paid_at".to_string(), json!("2026-08-29T10:00:00Z")),
        ])
    }

    #[test]
    fn one_row_per_record_in_response_order() {
        let records = vec![payment(3, 10.0), payment(1, 25.5), payment(7, 8.0)];
        let rows = build_rows(&TEST_SCHEMA, &records, now());
        assert_eq!(rows.len(), 3);
        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["3", "1", "7"]);
        assert!(rows.iter().all(|r| r.cells.len() == TEST_SCHEMA.fields.len()));
    }

    #[test]
    fn rows_track_the_current_list() {
        let mut records = vec![payment(3, 10.0), payment(7, 8.0)];
        assert!(
            build_rows(&TEST_SCHEMA, &records, now())
                .iter()
                .any(|r| r.id == Some(RecordId::new(7)))
        );
        // the refreshed list after `DELETE /payments/7` no longer contains it
        records.retain(|r| record_id(r) != Some(RecordId::new(7)));
        let rows = build_rows(&TEST_SCHEMA, &records, now());
        assert_eq!(rows.len(), 1);
        assert!(rows.iter().all(|r| r.id != Some(RecordId::new(7))));
    }

    #[test]
    fn cells_format_by_field_kind() {
        let rows = build_rows(&TEST_SCHEMA, &[payment(1, 9.5)], now());
        let cells = &rows[0].cells;
        assert_eq!(cells[0].text, "1");
        assert!(cells[0].numeric);
        assert_eq!(cells[1].text, "9.50");
        assert_eq!(cells[2].text, "2 hours ago");
        assert_eq!(cells[2].title.as_deref(), Some("2026-08-29T10:00:00Z"));
    }

    #[test]
    fn records_without_an_id_get_positional_keys() {
        let record = Record::from_iter([("amount".to_string(), json!(5.0))]);
        let rows = build_rows(&TEST_SCHEMA, &[record], now());
        assert_eq!(rows[0].key, "row-0");
        assert_eq!(rows[0].id, None);
        // the id cell is simply empty
        assert_eq!(rows[0].cells[0].text, "");
    }
}
