use crate::components::resource_page::ResourcePage;
use crate::hooks::{UseResourceHandle, use_resource};
use crate::schema::{FieldDef, FieldKind, ResourceSchema};
use yew::prelude::*;

pub const STAFF: ResourceSchema = ResourceSchema {
    path: "staff",
    title: "Staff",
    singular: "Staff",
    fields: &[
        FieldDef::readonly("id", "ID", FieldKind::Integer),
        FieldDef::required("name", "Name", FieldKind::Text),
        FieldDef::required("email", "Email", FieldKind::Text),
        FieldDef::required(
            "specialty",
            "Specialty",
            FieldKind::Select(&["massage", "facial", "body treatment"]),
        ),
        FieldDef::optional("active", "Active", FieldKind::Boolean),
    ],
};

#[hook]
pub fn use_staff() -> UseResourceHandle {
    use_resource(&STAFF)
}

#[function_component(StaffPage)]
pub fn staff_page() -> Html {
    html! { <ResourcePage schema={&STAFF} /> }
}
