pub mod api;
pub mod core;
pub mod db;
pub mod export;
pub mod models;
