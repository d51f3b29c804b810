pub mod cli;
pub mod command;
pub mod config;
pub mod fs;
pub mod installer;
pub mod logging;
pub mod module;
pub mod package;
pub mod package_manager;
