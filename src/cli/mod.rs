// CLI module for snap2sabre
// Author: kelexine (https://github.com/kelexine)

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// snap2sabre - Flight screenshot to Sabre GDS air segment converter
#[derive(Parser, Debug)]
#[command(name = "snap2sabre", version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ~/.snap2sabre/config.toml)
    #[arg(short, long, env = "SNAP2SABRE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides server.port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Args {
    /// Apply command-line overrides on top of loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
