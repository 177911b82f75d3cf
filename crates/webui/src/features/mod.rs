//! One module per backend resource, each exposing its schema, page component
//! and hook. This is the public surface the router consumes.

pub mod category;
pub mod order;
pub mod payment;
pub mod personnel;
pub mod product;
pub mod room;
pub mod service;
pub mod staff;

pub use category::{CATEGORY, CategoryPage, use_category};
pub use order::{ORDER, OrderPage, use_order};
pub use payment::{PAYMENT, PaymentPage, use_payment};
pub use personnel::{PERSONNEL, PersonnelPage, use_personnel};
pub use product::{PRODUCT, ProductPage, use_product};
pub use room::{ROOM, RoomPage, use_room};
pub use service::{SERVICE, ServicePage, use_service};
pub use staff::{STAFF, StaffPage, use_staff};

use crate::schema::ResourceSchema;

/// Every resource, in nav order.
pub const ALL: &[&ResourceSchema] = &[
    &ORDER, &PAYMENT, &CATEGORY, &SERVICE, &ROOM, &PRODUCT, &STAFF, &PERSONNEL,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use std::collections::HashSet;

    #[test]
    fn schemas_are_well_formed() {
        assert_eq!(ALL.len(), 8);
        let mut paths = HashSet::new();
        for schema in ALL {
            assert!(!schema.path.is_empty());
            assert!(
                paths.insert(schema.path),
                "duplicate path {:?}",
                schema.path
            );
            let mut keys = HashSet::new();
            for field in schema.fields {
                assert!(
                    keys.insert(field.key),
                    "{}: duplicate field {:?}",
                    schema.path,
                    field.key
                );
            }
        }
    }

    #[test]
    fn primary_keys_and_timestamps_are_never_editable() {
        for schema in ALL {
            for field in schema.fields {
                if field.key == "id" || field.kind == FieldKind::DateTime {
                    assert!(
                        !field.editable,
                        "{}: field {:?} must be display-only",
                        schema.path, field.key
                    );
                }
            }
        }
    }

    #[test]
    fn select_fields_have_options() {
        for schema in ALL {
            for field in schema.fields {
                if let FieldKind::Select(options) = field.kind {
                    assert!(!options.is_empty(), "{}: {}", schema.path, field.key);
                }
            }
        }
    }
}
