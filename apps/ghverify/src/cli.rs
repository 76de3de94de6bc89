//! Command line interface definition

use clap::Parser;
use ghverify_config::constants;
use ghverify_types::ColorChoice;
use std::path::PathBuf;

/// ghverify - check that a file in a GitHub repository holds the expected text
#[derive(Parser)]
#[command(name = "ghverify")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check that a file in a GitHub repository holds the expected text")]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Where the run's inputs come from
#[derive(Parser, Debug, Clone, Default)]
pub struct InputArgs {
    /// Env file holding MCP_GITHUB_TOKEN and GITHUB_EVAL_ORG [default: .env]
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Expectation file (YAML) [default: answer_config.yaml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base URL, for GitHub Enterprise hosts
    #[arg(long, value_name = "URL", env = constants::API_URL_VAR)]
    pub api_url: Option<String>,
}

/// Output and logging controls
#[derive(Parser)]
pub struct GlobalArgs {
    /// Print the report as JSON instead of progress lines
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,

    /// Color output control
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,
}
