//! Generic CRUD page: heading, table in a capped scroll region, and a modal
//! create/edit form. One instance per entity, parametrized by schema.

use crate::api::ApiError;
use crate::components::notification::ToastContext;
use crate::components::resource_form::ResourceForm;
use crate::components::resource_table::ResourceTable;
use crate::hooks::use_resource;
use crate::schema::{Record, RecordId, ResourceSchema, record_id};
use yew::prelude::*;
use yewprint::Icon;

#[derive(Properties, PartialEq)]
pub struct ResourcePageProps {
    pub schema: &'static ResourceSchema,
}

#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(Record),
}

#[function_component(ResourcePage)]
pub fn resource_page(ResourcePageProps { schema }: &ResourcePageProps) -> Html {
    let schema = *schema;
    let resource = use_resource(schema);
    let editor = use_state(|| Editor::Closed);
    let toasts = use_context::<ToastContext>().expect("inside <ToastProvider>");

    let on_new = {
        let editor = editor.clone();
        Callback::from(move |_| editor.set(Editor::Create))
    };
    let on_edit = {
        let editor = editor.clone();
        Callback::from(move |record: Record| editor.set(Editor::Edit(record)))
    };
    let on_cancel = {
        let editor = editor.clone();
        Callback::from(move |()| editor.set(Editor::Closed))
    };
    let on_refresh = {
        let resource = resource.clone();
        Callback::from(move |_| resource.refresh())
    };

    let on_submit = {
        let resource = resource.clone();
        let editor = editor.clone();
        let toasts = toasts.clone();
        let singular = schema.singular;
        Callback::from(move |record: Record| {
            match &*editor {
                Editor::Create => resource.create(
                    record,
                    done_toast(
                        toasts.clone(),
                        format!("{singular} created"),
                        format!("Creating {singular} failed"),
                    ),
                ),
                Editor::Edit(original) => {
                    if let Some(id) = record_id(original) {
                        resource.update(
                            id,
                            record,
                            done_toast(
                                toasts.clone(),
                                format!("{singular} updated"),
                                format!("Updating {singular} failed"),
                            ),
                        );
                    }
                }
                Editor::Closed => {}
            }
            editor.set(Editor::Closed);
        })
    };

    let on_delete = {
        let resource = resource.clone();
        let toasts = toasts.clone();
        let singular = schema.singular;
        Callback::from(move |id: RecordId| {
            if !gloo::dialogs::confirm(&format!("Delete this {}?", singular.to_lowercase())) {
                return;
            }
            resource.delete(
                id,
                done_toast(
                    toasts.clone(),
                    format!("{singular} deleted"),
                    format!("Deleting {singular} failed"),
                ),
            );
        })
    };

    let body = if let Some(records) = resource.records() {
        html! {
            <ResourceTable
                schema={schema}
                {records}
                {on_edit}
                {on_delete}
            />
        }
    } else if resource.loading() {
        html! { <p>{"Loading..."}</p> }
    } else {
        html! {}
    };

    let editor_view = match &*editor {
        Editor::Closed => html! {},
        Editor::Create => modal(
            format!("New {}", schema.singular),
            html! {
                <ResourceForm
                    schema={schema}
                    on_submit={on_submit.clone()}
                    on_cancel={on_cancel.clone()}
                />
            },
        ),
        Editor::Edit(record) => modal(
            format!("Edit {}", schema.singular),
            html! {
                <ResourceForm
                    schema={schema}
                    initial={record.clone()}
                    on_submit={on_submit.clone()}
                    on_cancel={on_cancel.clone()}
                />
            },
        ),
    };

    html! {
        <>
            <div class="page-header">
                <h3>{ schema.title }</h3>
                <div class="page-actions">
                    <button onclick={on_refresh} disabled={resource.loading()}>
                        <Icon icon={Icon::Refresh} />{" Refresh"}
                    </button>
                    <button onclick={on_new}>
                        <Icon icon={Icon::Plus} />{ format!(" New {}", schema.singular) }
                    </button>
                </div>
            </div>
            if let Some(error) = resource.error() {
                <div class="error-banner">{ error.to_string() }</div>
            }
            <div class="page-scroll">
                { body }
            </div>
            { editor_view }
        </>
    }
}

fn done_toast(
    toasts: ToastContext,
    success: String,
    failure: String,
) -> Callback<Result<(), ApiError>> {
    Callback::from(move |result: Result<(), ApiError>| match result {
        Ok(()) => toasts.success(success.clone()),
        Err(err) => toasts.error(format!("{failure}: {err}")),
    })
}

fn modal(title: String, content: Html) -> Html {
    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h4>{ title }</h4>
                { content }
            </div>
        </div>
    }
}
