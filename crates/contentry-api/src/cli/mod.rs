//! CLI command definitions and dispatch for the `ctry` binary.
//!
//! Uses clap derive macros for argument parsing. Two user-facing flows
//! (`ctry chat`, `ctry generate`) plus a status dashboard and the REST
//! server.

pub mod chat;
pub mod generate;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use contentry_types::content::{Platform, Tone};

/// Chat with a hosted model and generate marketing content.
#[derive(Parser)]
#[command(name = "ctry", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Generate ready-to-publish content from topic, platform, audience, and tone.
    #[command(alias = "gen")]
    Generate {
        /// Content topic (prompted interactively if omitted).
        #[arg(long)]
        topic: Option<String>,

        /// Target platform: blog-post, tweet, instagram, linkedin.
        #[arg(long)]
        platform: Option<Platform>,

        /// Intended audience (prompted interactively if omitted).
        #[arg(long)]
        audience: Option<String>,

        /// Tone of voice: informative, professional, friendly, playful, persuasive.
        #[arg(long)]
        tone: Option<Tone>,
    },

    /// Show configuration and credential status.
    Status,

    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
