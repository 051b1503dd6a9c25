//! Testing infrastructure for the hotel workspace.
//!
//! - `TestWorld`: fluent setup of storage, clock and pages
//! - `fixtures`: sample users, rooms and a booking builder
//! - `assertions`: helpers for inspecting rendered markup

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::BookingBuilder;
pub use world::{FailingRepository, TestWorld};
