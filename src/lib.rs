//! REST backend for managing projects, tasks and notes on SQLite.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
