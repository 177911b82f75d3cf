use crate::components::resource_page::ResourcePage;
use crate::hooks::{UseResourceHandle, use_resource};
use crate::schema::{FieldDef, FieldKind, ResourceSchema};
use yew::prelude::*;

pub const PRODUCT: ResourceSchema = ResourceSchema {
    path: "products",
    title: "Products",
    singular: "Product",
    fields: &[
        FieldDef::readonly("id", "ID", FieldKind::Integer),
        FieldDef::required("name", "Name", FieldKind::Text),
        FieldDef::required("price", "Price", FieldKind::Decimal),
        FieldDef::required("stock", "Stock", FieldKind::Integer),
    ],
};

#[hook]
pub fn use_product() -> UseResourceHandle {
    use_resource(&PRODUCT)
}

#[function_component(ProductPage)]
pub fn product_page() -> Html {
    html! { <ResourcePage schema={&PRODUCT} /> }
}
