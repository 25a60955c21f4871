use morph_chart::trace::{TraceScript, replay};
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
}

fn main() {
    let _ = morph_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let script = TraceScript::from_json_str(&raw).map_err(|err| err.to_string())?;
    let payload = replay(&script)
        .and_then(|output| output.to_json_pretty())
        .map_err(|err| err.to_string())?;
    fs::write(&args.output, payload)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    match (input, output) {
        (Some(input), Some(output)) => Ok(CliArgs { input, output }),
        _ => Err("usage: morph_trace_tool --input <path> --output <path>".to_owned()),
    }
}
