//! Groups module - domain models for savings groups.

mod groups_model;

pub use groups_model::{slugify, Group, NewGroup};
