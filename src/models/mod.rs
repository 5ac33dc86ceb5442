//! # Entity Models
//!
//! SeaORM entity models for the Rentdesk schema: units and their tenants,
//! reported issues, landlords, and the associative tables linking them.

pub mod demo_name;
pub mod holds;
pub mod issue;
pub mod landlord;
pub mod resides_by;
pub mod resolves;
pub mod unit;
