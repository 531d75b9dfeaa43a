//! Reactive UI: contexts, components and pages

pub mod auth;
pub mod background;
pub mod checkout;
pub mod common;
pub mod icon;
pub mod layout;
pub mod pages;
pub mod theme;

pub use icon::{Icon, icons};
