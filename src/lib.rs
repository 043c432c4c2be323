pub mod account;
pub mod cli;
pub mod config;
pub mod contact;
pub mod delete;
pub mod folder;
pub mod logging;
pub mod repository;
pub mod settings;
pub mod store;
