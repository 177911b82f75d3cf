use crate::components::resource_page::ResourcePage;
use crate::hooks::{UseResourceHandle, use_resource};
use crate::schema::{FieldDef, FieldKind, ResourceSchema};
use yew::prelude::*;

pub const SERVICE: ResourceSchema = ResourceSchema {
    path: "services",
    title: "Services",
    singular: "Service",
    fields: &[
        FieldDef::readonly("id", "ID", FieldKind::Integer),
        FieldDef::required("name", "Name", FieldKind::Text),
        FieldDef::required("category", "Category", FieldKind::Text),
        FieldDef::required("duration_minutes", "Duration (min)", FieldKind::Integer),
        FieldDef::required("price", "Price", FieldKind::Decimal),
        FieldDef::optional("active", "Active", FieldKind::Boolean),
    ],
};

#[hook]
pub fn use_service() -> UseResourceHandle {
    use_resource(&SERVICE)
}

#[function_component(ServicePage)]
pub fn service_page() -> Html {
    html! { <ResourcePage schema={&SERVICE} /> }
}
