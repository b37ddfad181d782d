pub mod app;
pub mod bindings;
pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod filter;
pub mod net;
pub mod render;
pub mod session;
pub mod view;
