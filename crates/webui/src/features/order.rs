use crate::components::resource_page::ResourcePage;
use crate::hooks::{UseResourceHandle, use_resource};
use crate::schema::{FieldDef, FieldKind, ResourceSchema};
use yew::prelude::*;

pub const ORDER: ResourceSchema = ResourceSchema {
    path: "orders",
    title: "Orders",
    singular: "Order",
    fields: &[
        FieldDef::readonly("id", "ID", FieldKind::Integer),
        FieldDef::required("customer", "Customer", FieldKind::Text),
        FieldDef::required("service", "Service", FieldKind::Text),
        FieldDef::required(
            "status",
            "Status",
            FieldKind::Select(&["pending", "confirmed", "completed", "cancelled"]),
        ),
        FieldDef::required("total", "Total", FieldKind::Decimal),
        FieldDef::readonly("created_at", "Created", FieldKind::DateTime),
    ],
};

#[hook]
pub fn use_order() -> UseResourceHandle {
    use_resource(&ORDER)
}

#[function_component(OrderPage)]
pub fn order_page() -> Html {
    html! { <ResourcePage schema={&ORDER} /> }
}
