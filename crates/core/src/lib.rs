//! Domain types and pure logic for the articles service.
//!
//! This crate has no internal dependencies so the validation and
//! display helpers can be shared by the persistence and HTTP layers.

pub mod article;
pub mod error;
pub mod types;
