pub mod api;
pub mod args;
pub mod config;
pub mod keychain;
pub mod sweep;
