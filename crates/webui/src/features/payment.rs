use crate::components::resource_page::ResourcePage;
use crate::hooks::{UseResourceHandle, use_resource};
use crate::schema::{FieldDef, FieldKind, ResourceSchema};
use yew::prelude::*;

pub const PAYMENT: ResourceSchema = ResourceSchema {
    path: "payments",
    title: "Payments",
    singular: "Payment",
    fields: &[
        FieldDef::readonly("id", "ID", FieldKind::Integer),
        FieldDef::required("order_id", "Order", FieldKind::Integer),
        FieldDef::required("amount", "Amount", FieldKind::Decimal),
        FieldDef::required("method", "Method", FieldKind::Select(&["cash", "card", "transfer"])),
        FieldDef::readonly("paid_at", "Paid", FieldKind::DateTime),
    ],
};

#[hook]
pub fn use_payment() -> UseResourceHandle {
    use_resource(&PAYMENT)
}

#[function_component(PaymentPage)]
pub fn payment_page() -> Html {
    html! { <ResourcePage schema={&PAYMENT} /> }
}
