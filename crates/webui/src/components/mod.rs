pub mod not_found;
pub mod notification;
pub mod resource_form;
pub mod resource_page;
pub mod resource_table;
