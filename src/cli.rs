//! CLI 模块

use clap::Parser;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(version)]
#[command(about = "Terminal client for the task-manager API")]
pub struct Cli {
    /// Override the API server URL (defaults to config, then http://localhost:8080)
    #[arg(long)]
    pub server: Option<String>,
}
