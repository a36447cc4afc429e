//! Closed, per-resource filter schemas.
//!
//! Each listing accepts a fixed set of filter keys with typed values. Filters
//! are read from a [`QueryState`] at the codec boundary; values that do not
//! parse are dropped so a hand-edited URL still renders.

use std::fmt::Debug;
use std::str::FromStr;

use crate::domain::types::{
    CategoryStatus, OrderStatus, PaymentStatus, ProductStatus, ResourceId, UserRole, VendorStatus,
};
use crate::query::QueryState;

/// Typed view over the resource-specific part of a [`QueryState`].
pub trait ResourceFilters: Clone + Debug + Default + PartialEq + Send + Sync {
    /// Query-string keys owned by this schema.
    const KEYS: &'static [&'static str];

    /// Reads the filters from `state`, ignoring values that do not parse.
    fn from_state(state: &QueryState) -> Self;

    /// Backend request parameters for the filters that are set.
    fn to_params(&self) -> Vec<(&'static str, String)>;

    /// Whether `value` is a valid value for `key`.
    fn accepts(key: &str, value: &str) -> bool;
}

fn parse_filter<T: FromStr>(state: &QueryState, key: &str) -> Option<T> {
    let raw = state.get(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::debug!("Dropping invalid `{key}` filter value {raw:?}");
            None
        }
    }
}

macro_rules! filter_schema {
    ($name:ident, $doc:expr, { $($field:ident : $ty:ty => $key:literal),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: Option<$ty>,)+
        }

        impl ResourceFilters for $name {
            const KEYS: &'static [&'static str] = &[$($key),+];

            fn from_state(state: &QueryState) -> Self {
                Self {
                    $($field: parse_filter(state, $key),)+
                }
            }

            fn to_params(&self) -> Vec<(&'static str, String)> {
                let mut params = Vec::new();
                $(
                    if let Some(value) = &self.$field {
                        params.push(($key, value.to_string()));
                    }
                )+
                params
            }

            fn accepts(key: &str, value: &str) -> bool {
                match key {
                    $($key => value.parse::<$ty>().is_ok(),)+
                    _ => false,
                }
            }
        }
    };
}

filter_schema!(ProductFilters, "Filters accepted by the products listing.", {
    status: ProductStatus => "status",
});

filter_schema!(OrderFilters, "Filters accepted by the orders listing.", {
    status: OrderStatus => "status",
    payment_status: PaymentStatus => "paymentStatus",
});

filter_schema!(UserFilters, "Filters accepted by the users listing.", {
    role: UserRole => "role",
});

filter_schema!(VendorFilters, "Filters accepted by the vendors listing.", {
    status: VendorStatus => "status",
});

filter_schema!(CategoryFilters, "Filters accepted by the categories listing.", {
    status: CategoryStatus => "status",
});

filter_schema!(VariantFilters, "Filters accepted by the variants listing.", {
    product: ResourceId => "product",
});
