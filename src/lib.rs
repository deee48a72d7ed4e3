// snap2sabre - Flight screenshot to Sabre GDS air segment converter
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod inference;
pub mod metrics;
pub mod sabre;
pub mod server;
pub mod utils;
pub mod vision;
