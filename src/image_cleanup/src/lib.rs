/// lib.rs
//
pub mod cleanup;
pub mod cli;
pub mod config;
pub mod constants;
pub mod images;
pub mod logging;
pub mod runtime;
