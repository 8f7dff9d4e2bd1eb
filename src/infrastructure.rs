pub mod auth;
pub mod db;
pub mod telemetry;
pub mod utils;
pub mod web;
