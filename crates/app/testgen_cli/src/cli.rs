use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use testgen_core::models::{Priority, TestType};

/// Generate API/UI tests from requirements or OpenAPI documents.
#[derive(Parser, Debug)]
#[command(name = "testgen", version, about)]
pub struct Cli {
    /// Backend base URL.
    #[arg(
        long,
        global = true,
        env = "TESTGEN_API_BASE_URL",
        default_value = "http://localhost:8000"
    )]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "TESTGEN_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    /// File holding the bearer token (defaults to the platform config dir).
    #[arg(long, global = true, env = "TESTGEN_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// Debug logging with timestamps.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the endpoints of an OpenAPI document.
    Endpoints {
        /// OpenAPI file (.json, .yaml, .yml).
        file: PathBuf,

        /// Print descriptors as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check that a document has `openapi`, `info` and `paths`.
    Check {
        /// OpenAPI file (.json, .yaml, .yml).
        file: PathBuf,
    },

    /// Generate a test case from a requirements description.
    Testcase(TestcaseArgs),

    /// Generate an autotest for one endpoint of an OpenAPI document.
    Autotest(AutotestArgs),

    /// Validate generated test code.
    Validate {
        /// File containing the code to validate.
        file: PathBuf,
    },

    /// Show backend usage metrics.
    Metrics {
        /// Summary window in hours.
        #[arg(long, default_value_t = 24)]
        hours: u32,

        /// Print the Prometheus exposition text only.
        #[arg(long)]
        prometheus: bool,
    },

    /// Check backend health.
    Health,

    /// Built-in demo scenarios.
    Demo {
        #[command(subcommand)]
        command: DemoCommands,
    },

    /// Manage the stored bearer token.
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Print version.
    Version,
}

#[derive(Args, Debug)]
pub struct TestcaseArgs {
    /// Test type: `api` or `ui`.
    #[arg(long = "type", default_value = "api")]
    pub test_type: TestType,

    /// Requirements text.
    #[arg(long, conflicts_with = "requirements_file")]
    pub requirements: Option<String>,

    /// Read the requirements text from a file.
    #[arg(long)]
    pub requirements_file: Option<PathBuf>,

    /// Optional OpenAPI document to attach.
    #[arg(long)]
    pub spec: Option<PathBuf>,

    /// Test case priority.
    #[arg(long)]
    pub priority: Option<Priority>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct AutotestArgs {
    /// OpenAPI file (.json, .yaml, .yml).
    pub file: PathBuf,

    /// Endpoint to target: a key (`get:/users`), a route (`GET /users`)
    /// or a 1-based row number from `testgen endpoints`.
    #[arg(long, short)]
    pub endpoint: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Write the generated code to this file (or into this directory).
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Strip markdown code fences from the generated code.
    #[arg(long)]
    pub strip_fences: bool,
}

#[derive(Subcommand, Debug)]
pub enum DemoCommands {
    /// List demo scenarios.
    List,

    /// Generate a test case for a demo scenario.
    Run {
        /// Demo key (see `testgen demo list`).
        key: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Store a bearer token.
    Set { token: String },

    /// Remove the stored token.
    Clear,
}
