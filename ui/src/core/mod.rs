//! Platform-agnostic page logic.

pub mod selection;
