//! Shared page state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landmark engine lives in one non-`Send` slot shared by every component;
//! components read a plain snapshot of it and write through [`atlas::AtlasHandle`].

pub mod atlas;
pub mod page;
