//! Domain layer - Core entity, wire shapes and mapping.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The service crate stores [`User`] values and exposes them over HTTP as
//! [`UserResponse`].

pub mod mapper;
pub mod user;

pub use user::{User, UserRequest, UserResponse};
