use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use serde_json::{json, Value};
use structopt::StructOpt;
use tracing::{debug, error, info};

use ssm_shapes::{
    logging, FilterSensitiveLog, Redaction, ShapeError, ShapeRegistry, SsmServiceError,
};

use args::*;

mod args;

/// AWS SSM Shapes
/// Command Line
/// --pretty, -p => Pretty-print JSON output
/// --quiet, -q => Only errors and command output
/// --verbose, -v => More logging, repeatable
/// list-shapes, ls [--kind KIND] => Lists known shapes
/// describe, d SHAPE => Redaction plan of a shape
/// redact, r SHAPE [IN.json] [OUT.json] => Redact a JSON document of SHAPE
/// enums, e [NAME] => Known enumeration values
/// error, err DISCRIMINANT [IN.json] => Decode a service error body
fn main() {
    let clap_options = Opt::clap().get_matches_safe();

    // Help and version exit with 0, usage errors with 1
    let matches = match clap_options {
        Ok(matches) => matches,
        Err(err) => err.exit(),
    };

    let options = Opt::from_clap(&matches);
    logging::init(options.quiet, options.verbose);

    let registry = ShapeRegistry::ssm();
    if let Err(err) = run(&options, &registry) {
        error!("{}", err);
        process::exit(1)
    }
}

fn run(options: &Opt, registry: &ShapeRegistry) -> Result<(), ShapeError> {
    match options.cmd {
        Command::ListShapes { kind } => {
            let names: Vec<&str> = match kind {
                Some(kind) => registry.of_kind(kind).map(|e| e.name).collect(),
                None => registry.shapes().map(|e| e.name).collect(),
            };
            debug!(count = names.len(), "listing shapes");
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for name in names {
                writeln!(out, "{}", name)?;
            }
        }
        Command::Describe { ref shape } => {
            let entry = registry.lookup(shape)?;
            let plan = json!({
                "Name": entry.name,
                "Kind": entry.kind.as_str(),
                "Fault": entry.fault.map(|f| f.as_str()),
                "Masked": entry.fields_with(Redaction::Mask),
                "Delegated": entry.fields_with(Redaction::Delegate),
                "Retained": entry.fields_with(Redaction::Retain),
            });
            write_json(&plan, None, options.pretty)?;
        }
        Command::Redact { ref shape, ref input, ref output } => {
            let document = read_json(shape, input.as_ref().map(|p| p.as_path()))?;
            let redacted = registry.redact_json(shape, document)?;
            write_json(&redacted, output.as_ref().map(|p| p.as_path()), options.pretty)?;
            info!(shape = shape.as_str(), "document redacted");
        }
        Command::Enums { ref name } => match name {
            Some(name) => {
                let entry = registry.lookup_enum(name)?;
                write_json(&json!(entry.values), None, options.pretty)?;
            }
            None => {
                let all: serde_json::Map<String, Value> = registry
                    .enums()
                    .map(|e| (e.name.to_owned(), json!(e.values)))
                    .collect();
                write_json(&Value::Object(all), None, options.pretty)?;
            }
        },
        Command::Error { ref discriminant, ref input } => {
            let body = read_input(input.as_ref().map(|p| p.as_path()))?;
            let err = SsmServiceError::from_json(discriminant, &body)?.filter_sensitive_log();
            let summary = json!({
                "Discriminant": err.discriminant(),
                "Fault": err.fault().as_str(),
                "Message": err.message(),
            });
            write_json(&summary, None, options.pretty)?;
        }
    }
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String, ShapeError> {
    let mut buffer = String::new();
    match input {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            File::open(path)?.read_to_string(&mut buffer)?;
        }
        None => {
            debug!("reading stdin");
            io::stdin().read_to_string(&mut buffer)?;
        }
    }
    Ok(buffer)
}

fn read_json(shape: &str, input: Option<&Path>) -> Result<Value, ShapeError> {
    let raw = read_input(input)?;
    serde_json::from_str(&raw).map_err(|cause| ShapeError::Decode {
        shape: shape.to_owned(),
        cause,
    })
}

fn render(value: &Value, pretty: bool) -> Result<String, ShapeError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|cause| ShapeError::Encode {
        shape: "output".to_owned(),
        cause,
    })
}

fn write_json(value: &Value, output: Option<&Path>, pretty: bool) -> Result<(), ShapeError> {
    let rendered = render(value, pretty)?;
    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{}", rendered)?;
            debug!(path = %path.display(), "output written");
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
