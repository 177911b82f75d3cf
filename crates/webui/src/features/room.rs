use crate::components::resource_page::ResourcePage;
use crate::hooks::{UseResourceHandle, use_resource};
use crate::schema::{FieldDef, FieldKind, ResourceSchema};
use yew::prelude::*;

pub const ROOM: ResourceSchema = ResourceSchema {
    path: "rooms",
    title: "Rooms",
    singular: "Room",
    fields: &[
        FieldDef::readonly("id", "ID", FieldKind::Integer),
        FieldDef::required("name", "Name", FieldKind::Text),
        FieldDef::required("capacity", "Capacity", FieldKind::Integer),
        FieldDef::optional("notes", "Notes", FieldKind::LongText),
        FieldDef::optional("active", "Active", FieldKind::Boolean),
    ],
};

#[hook]
pub fn use_room() -> UseResourceHandle {
    use_resource(&ROOM)
}

#[function_component(RoomPage)]
pub fn room_page() -> Html {
    html! { <ResourcePage schema={&ROOM} /> }
}
