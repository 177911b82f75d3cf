//! Generic create/edit form driven by a resource schema. Validation runs on
//! submit; the `on_submit` callback only ever fires with a fully validated
//! record, so no request can be issued for an invalid draft.

use crate::schema::{self, Draft, FieldDef, FieldError, FieldKind, Record, ResourceSchema};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResourceFormProps {
    pub schema: &'static ResourceSchema,
    /// Record being edited, or `None` when creating.
    #[prop_or_default]
    pub initial: Option<Record>,
    pub on_submit: Callback<Record>,
    pub on_cancel: Callback<()>,
}

#[function_component(ResourceForm)]
pub fn resource_form(
    ResourceFormProps {
        schema,
        initial,
        on_submit,
        on_cancel,
    }: &ResourceFormProps,
) -> Html {
    let draft = {
        let schema = *schema;
        let initial = initial.clone();
        use_state(move || match &initial {
            Some(record) => schema::draft_from_record(schema, record),
            None => Draft::new(),
        })
    };
    let errors = use_state(Vec::<FieldError>::new);

    let onsubmit = {
        let schema = *schema;
        let draft = draft.clone();
        let errors = errors.clone();
        let on_submit = on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match schema::validate(schema, &draft) {
                Ok(record) => {
                    errors.set(Vec::new());
                    on_submit.emit(record);
                }
                Err(validation_errors) => errors.set(validation_errors),
            }
        })
    };

    let oncancel = {
        let on_cancel = on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <form class="resource-form" {onsubmit}>
            { for schema.editable_fields().map(|field| {
                let value = draft.get(field.key).cloned().unwrap_or_default();
                let error = errors.iter().find(|e| e.key == field.key);
                field_row(field, value, error, &draft)
            })}
            <div class="form-actions">
                <button type="submit">
                    { if initial.is_some() { "Save" } else { "Create" } }
                </button>
                <button type="button" onclick={oncancel}>{"Cancel"}</button>
            </div>
        </form>
    }
}

fn field_row(
    field: &FieldDef,
    value: String,
    error: Option<&FieldError>,
    draft: &UseStateHandle<Draft>,
) -> Html {
    let key = field.key;
    let set = {
        let draft = draft.clone();
        Callback::from(move |raw: String| {
            let mut next = (*draft).clone();
            next.insert(key, raw);
            draft.set(next);
        })
    };

    let input = match field.kind {
        FieldKind::Text => text_input("text", value, set),
        FieldKind::Integer => text_input("number", value, set),
        FieldKind::Decimal => {
            let oninput = on_input(set);
            html! {
                <input type="number" step="0.01" {value} {oninput} />
            }
        }
        FieldKind::LongText => {
            let oninput = Callback::from(move |e: InputEvent| {
                let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                set.emit(textarea.value());
            });
            html! { <textarea rows="3" {value} {oninput} /> }
        }
        FieldKind::Boolean => {
            let checked = value == "true";
            let onchange = Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                set.emit(input.checked().to_string());
            });
            html! { <input type="checkbox" {checked} {onchange} /> }
        }
        FieldKind::Select(options) => {
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                set.emit(select.value());
            });
            html! {
                <select {onchange}>
                    <option value="" selected={value.is_empty()} disabled={true}>
                        {"Select…"}
                    </option>
                    { for options.iter().map(|option| html! {
                        <option value={*option} selected={value == *option}>{ *option }</option>
                    })}
                </select>
            }
        }
        // never editable, kept out of forms by the schema
        FieldKind::DateTime => html! {},
    };

    html! {
        <label class={classes!("form-field", error.map(|_| "form-field-invalid"))}>
            <span class="form-label">
                { field.label }
                if field.required {
                    <span class="form-required">{"*"}</span>
                }
            </span>
            { input }
            if let Some(error) = error {
                <span class="form-error">{ &error.message }</span>
            }
        </label>
    }
}

fn text_input(input_type: &'static str, value: String, set: Callback<String>) -> Html {
    let oninput = on_input(set);
    html! { <input type={input_type} {value} {oninput} /> }
}

fn on_input(set: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        set.emit(input.value());
    })
}
