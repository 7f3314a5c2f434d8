use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "mentor-chat",
    version,
    about = "Terminal chat client for the CodeMentor interview assistant"
)]
pub struct Cli {
    /// Backend base URL; overrides the config file
    #[arg(long)]
    pub backend_url: Option<String>,
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,
}
