use std::path::PathBuf;
use structopt::StructOpt;

use ssm_shapes::ShapeKind;

#[derive(StructOpt, Debug)]
#[structopt(name = "ssm_shapes",
    about = "AWS SSM Shapes - Inspect Systems Manager shapes and redact sensitive fields from their JSON, written in Rust."
)]
pub struct Opt {
    /// Pretty-print JSON output
    #[structopt(short = "p", long = "pretty")]
    pub pretty: bool,
    /// Quiet Mode => Only Errors and Command Output
    #[structopt(short = "q", long = "quiet")]
    pub quiet: bool,
    /// Verbose logging, repeat for more (-vv)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    pub verbose: u8,
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(StructOpt, Debug)]
pub enum Command {
    /// List Known Shapes
    #[structopt(name = "list-shapes", visible_alias = "ls")]
    ListShapes {
        /// Only shapes of this kind (request, result, structure, exception)
        #[structopt(short = "k", long = "kind")]
        kind: Option<ShapeKind>,
    },
    /// Describe a Shape's Redaction Plan
    #[structopt(name = "describe", visible_alias = "d")]
    Describe {
        /// Shape Name
        shape: String,
    },
    /// Redact - Read <input> as <shape> JSON and write the log-safe copy to <output> or STDOUT
    #[structopt(name = "redact", visible_alias = "r")]
    Redact {
        /// Shape Name
        shape: String,
        /// Input JSON file, stdin if not present
        #[structopt(parse(from_os_str))]
        input: Option<PathBuf>,
        /// Output JSON file, stdout if not present
        #[structopt(parse(from_os_str))]
        output: Option<PathBuf>,
    },
    /// List Enumerations, or the Values of One
    #[structopt(name = "enums", visible_alias = "e")]
    Enums {
        /// Enumeration Name
        name: Option<String>,
    },
    /// Decode a Service Error Body by Discriminant and Print its Redacted Summary
    #[structopt(name = "error", visible_alias = "err")]
    Error {
        /// Error type, as sent by the service (namespace and URI are stripped)
        discriminant: String,
        /// Input JSON file, stdin if not present
        #[structopt(parse(from_os_str))]
        input: Option<PathBuf>,
    },
}
