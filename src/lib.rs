//! # Rentdesk Library
//!
//! This library provides the core functionality for the Rentdesk issue
//! tracker: configuration, database access, repositories, HTTP handlers,
//! and server setup.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod pages;
pub mod repositories;
pub mod seeds;
pub mod server;
pub use migration;
