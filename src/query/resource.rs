//! Resource descriptors binding an entity type to its endpoints, sort fields
//! and filter schema.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::category::Category;
use crate::domain::order::Order;
use crate::domain::product::Product;
use crate::domain::types::ResourceId;
use crate::domain::user::User;
use crate::domain::variant::Variant;
use crate::domain::vendor::Vendor;
use crate::query::filters::{
    CategoryFilters, OrderFilters, ProductFilters, ResourceFilters, UserFilters, VariantFilters,
    VendorFilters,
};

/// A browsable collection exposed by the backend.
pub trait Resource: Send + Sync + 'static {
    type Item: Clone + Debug + Serialize + DeserializeOwned + Send + Sync;
    type Filters: ResourceFilters;

    /// Collection name, also the first path segment of its endpoints.
    const NAME: &'static str;
    /// Fields the listing endpoint can sort by.
    const SORT_FIELDS: &'static [&'static str];
    const DEFAULT_SORT_FIELD: &'static str;

    fn list_path() -> String {
        format!("/{}", Self::NAME)
    }

    fn detail_path(id: &ResourceId) -> String {
        format!("/{}/{}", Self::NAME, id)
    }

    /// Canonical spelling of `field` if it is a declared sort field.
    fn sort_field(field: &str) -> Option<&'static str> {
        Self::SORT_FIELDS.iter().copied().find(|known| *known == field)
    }
}

macro_rules! resource {
    ($marker:ident, $item:ty, $filters:ty, $name:literal, [$($field:literal),+], $default:literal) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $marker;

        impl Resource for $marker {
            type Item = $item;
            type Filters = $filters;

            const NAME: &'static str = $name;
            const SORT_FIELDS: &'static [&'static str] = &[$($field),+];
            const DEFAULT_SORT_FIELD: &'static str = $default;
        }
    };
}

resource!(
    Products,
    Product,
    ProductFilters,
    "products",
    ["name", "price", "stock", "createdAt"],
    "createdAt"
);
resource!(
    Orders,
    Order,
    OrderFilters,
    "orders",
    ["orderNumber", "total", "status", "createdAt"],
    "createdAt"
);
resource!(
    Users,
    User,
    UserFilters,
    "users",
    ["name", "email", "createdAt"],
    "createdAt"
);
resource!(
    Categories,
    Category,
    CategoryFilters,
    "categories",
    ["name", "createdAt"],
    "name"
);
resource!(
    Vendors,
    Vendor,
    VendorFilters,
    "vendors",
    ["storeName", "productCount", "createdAt"],
    "storeName"
);
resource!(
    Variants,
    Variant,
    VariantFilters,
    "variants",
    ["sku", "price", "stock"],
    "sku"
);
