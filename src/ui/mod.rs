pub mod app;
pub mod browser;
pub mod events;
pub mod footer;
pub mod grid;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod pagination;
pub mod plain;
pub mod popup;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
