pub mod config;
pub mod db;
pub mod format;
pub mod models;
pub mod services;
