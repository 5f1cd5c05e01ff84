//! Stats page logic: tab selection, provider state, refresh control and the
//! pure view resolver the Dioxus components render from.

pub mod refresh;
pub mod state;
pub mod tab;
pub mod view;
