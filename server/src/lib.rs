pub mod auth;
pub mod catalog;
pub mod config;
pub mod handlers;
pub mod models;
pub mod nav;
pub mod review;
pub mod routes;
pub mod state;
pub mod utils;
pub mod wizard;
