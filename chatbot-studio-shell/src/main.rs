//! Chatbot Studio - Main entry point
//!
//! Parses command-line arguments and starts the editor.
//!
//! # Usage
//!
//! ```bash
//! chatbot-studio --help                      # Show help
//! chatbot-studio --title "Support Bot"       # Override the initial title
//! chatbot-studio --log-level debug           # Enable debug logging
//! ```

mod app;
mod cli;

pub use cli::Args;

use clap::Parser;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Configure logging based on CLI args
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_filter()),
    )
    .init();

    log::info!("Starting Chatbot Studio");
    log::debug!("CLI args: {:?}", args);

    // Store args for the app to pick up its initial settings
    app::set_cli_args(args);

    // Start the application
    app::app_main();
}
