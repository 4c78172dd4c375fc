//! Server configuration from command-line flags and environment variables.

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "In-memory todo API")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Runtime environment; demo data is only seeded in development
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = Environment::Development)]
    pub environment: Environment,

    /// Log filter directives, e.g. `info,todo_server=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn seeds_demo_data(self) -> bool {
        self == Environment::Development
    }
}
