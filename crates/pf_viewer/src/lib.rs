pub mod app;
pub mod command_sender;
pub mod layout;
mod theme;
mod ui;
