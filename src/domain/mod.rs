//! Resource entities as returned by the backend listing and detail endpoints.

pub mod category;
pub mod order;
pub mod product;
pub mod search;
pub mod types;
pub mod user;
pub mod variant;
pub mod vendor;
