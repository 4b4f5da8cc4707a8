//! Tab views. Each is a pure function of the application state.

pub mod group_tab;
pub mod overview;
