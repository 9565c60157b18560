//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the [`crate::state::page::PageView`] snapshot and the form
//! controller signal from context, and route every change through
//! [`crate::state::atlas::AtlasHandle`].

pub mod confirm_dialog;
pub mod landmark_form;
pub mod landmark_list;
pub mod map_host;
pub mod notice_bar;
