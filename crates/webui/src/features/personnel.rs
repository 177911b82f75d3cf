use crate::components::resource_page::ResourcePage;
use crate::hooks::{UseResourceHandle, use_resource};
use crate::schema::{FieldDef, FieldKind, ResourceSchema};
use yew::prelude::*;

pub const PERSONNEL: ResourceSchema = ResourceSchema {
    path: "personnel",
    title: "Personnel",
    singular: "Personnel",
    fields: &[
        FieldDef::readonly("id", "ID", FieldKind::Integer),
        FieldDef::required("name", "Name", FieldKind::Text),
        FieldDef::optional("phone", "Phone", FieldKind::Text),
        FieldDef::required(
            "role",
            "Role",
            FieldKind::Select(&["reception", "maintenance", "management"]),
        ),
        FieldDef::readonly("hired_at", "Hired", FieldKind::DateTime),
    ],
};

#[hook]
pub fn use_personnel() -> UseResourceHandle {
    use_resource(&PERSONNEL)
}

#[function_component(PersonnelPage)]
pub fn personnel_page() -> Html {
    html! { <ResourcePage schema={&PERSONNEL} /> }
}
