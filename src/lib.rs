#![allow(non_snake_case, clippy::upper_case_acronyms)]

use lazy_static::lazy_static;

pub mod config_handler;
pub mod db;
pub mod models;
pub mod league_service;
pub mod logo_service;
pub mod render_service;
pub mod api;

use config_handler::Config;

lazy_static! {
    pub static ref CONFIG: Config = config_handler::get_config();
}
