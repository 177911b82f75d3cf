use crate::components::resource_page::ResourcePage;
use crate::hooks::{UseResourceHandle, use_resource};
use crate::schema::{FieldDef, FieldKind, ResourceSchema};
use yew::prelude::*;

pub const CATEGORY: ResourceSchema = ResourceSchema {
    path: "categories",
    title: "Categories",
    singular: "Category",
    fields: &[
        FieldDef::readonly("id", "ID", FieldKind::Integer),
        FieldDef::required("name", "Name", FieldKind::Text),
        FieldDef::optional("description", "Description", FieldKind::LongText),
    ],
};

#[hook]
pub fn use_category() -> UseResourceHandle {
    use_resource(&CATEGORY)
}

#[function_component(CategoryPage)]
pub fn category_page() -> Html {
    html! { <ResourcePage schema={&CATEGORY} /> }
}
