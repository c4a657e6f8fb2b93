//! Terminal front end: the navigation shell, the auth screens and the event
//! loop that drives them.

pub mod app;
pub mod auth_form;
pub mod drawer;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod shell;
pub mod side_menu;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
