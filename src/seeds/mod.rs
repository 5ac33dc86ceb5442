//! # Seed Data
//!
//! Startup seeding routines.

pub mod demo;

pub use demo::seed_demo_names;
