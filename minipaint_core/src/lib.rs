extern crate log;

pub mod commands;
pub mod history;
pub mod models;
pub mod paint;
pub mod utils;
