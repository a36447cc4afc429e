//! Strongly-typed value objects used by domain entities and query filters.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, closed sets
//! of status values) so that once a value reaches the domain layer it can be
//! treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value is not one of the accepted variants.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Identifier assigned by the backend to any resource record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId(String);

impl ResourceId {
    /// Trims the identifier and rejects blank values.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ResourceId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ResourceId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ResourceId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceId> for String {
    fn from(value: ResourceId) -> Self {
        value.0
    }
}

impl FromStr for ResourceId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Macro to generate closed string enums that travel through query strings
/// and backend payloads using their lowercase wire value.
macro_rules! string_enum {
    ($name:ident, $doc:expr, { $($variant:ident => $value:literal),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation used in query strings and payloads.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($value => Ok($name::$variant),)+
                    other => Err(TypeConstraintError::InvalidValue(other.to_string())),
                }
            }
        }
    };
}

string_enum!(SortOrder, "Direction applied to the `sort_by` field.", {
    Asc => "asc",
    Desc => "desc",
});

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

string_enum!(ProductStatus, "Publication state of a product.", {
    Active => "active",
    Inactive => "inactive",
    Draft => "draft",
});

string_enum!(OrderStatus, "Fulfilment state of an order.", {
    Pending => "pending",
    Processing => "processing",
    Shipped => "shipped",
    Delivered => "delivered",
    Cancelled => "cancelled",
});

string_enum!(PaymentStatus, "Payment state of an order.", {
    Pending => "pending",
    Paid => "paid",
    Failed => "failed",
    Refunded => "refunded",
});

string_enum!(UserRole, "Role granted to a platform user.", {
    Admin => "admin",
    Vendor => "vendor",
    Customer => "customer",
});

string_enum!(VendorStatus, "Approval state of a vendor store.", {
    Active => "active",
    Pending => "pending",
    Suspended => "suspended",
});

string_enum!(CategoryStatus, "Visibility of a category in the storefront.", {
    Active => "active",
    Inactive => "inactive",
});
