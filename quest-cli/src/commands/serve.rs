//! Quest serve command for running the questionnaire server
//!
//! The serve command runs the quest server which provides the JSON API for
//! starting sessions, walking the question bank, and querying progress,
//! review, and suggested actions.

use anyhow::Result;
use clap::Args;
use tracing::info;

use quest_server::{QuestServer, ServerConfig};

/// Default port for the quest server
pub const DEFAULT_PORT: u16 = 7780;
/// Default host for the quest server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = ServerConfig::new(args.host.clone(), args.port);

    info!("Starting quest server on {}", config.addr());

    let server = QuestServer::new(config);
    server.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ServeArgs,
    }

    #[test]
    fn serve_args_defaults() {
        let cli = TestCli::parse_from(["quest"]);
        assert_eq!(cli.args.port, DEFAULT_PORT);
        assert_eq!(cli.args.host, DEFAULT_HOST);
    }

    #[test]
    fn serve_args_overrides() {
        let cli = TestCli::parse_from(["quest", "--host", "0.0.0.0", "--port", "9000"]);
        assert_eq!(cli.args.port, 9000);
        assert_eq!(cli.args.host, "0.0.0.0");
    }
}
