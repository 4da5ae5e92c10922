mod request;

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use tracing::info;

use fractile_render::{write_png, FrameRenderer, PixelBuffer};

use request::RenderRequest;

const USAGE: &str = "usage: fractile [REQUEST.json] [-o OUT.png]";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read request: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed request: {0}")]
    Request(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] fractile_core::CoreError),

    #[error(transparent)]
    Render(#[from] fractile_render::RenderError),
}

struct Args {
    request_path: Option<PathBuf>,
    output_path: PathBuf,
}

fn parse_args(argv: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut request_path = None;
    let mut output_path = PathBuf::from("fractal.png");
    let mut argv = argv;
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                output_path = argv
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| CliError::Usage(format!("{arg} needs a path")))?;
            }
            "-h" | "--help" => return Err(CliError::Usage(String::new())),
            _ if arg.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown flag {arg}")));
            }
            _ if request_path.is_none() => request_path = Some(PathBuf::from(arg)),
            _ => return Err(CliError::Usage(format!("unexpected argument {arg}"))),
        }
    }
    Ok(Args {
        request_path,
        output_path,
    })
}

fn run() -> Result<(), CliError> {
    let args = parse_args(std::env::args().skip(1))?;

    // No request file means an all-defaults request.
    let request = match &args.request_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => RenderRequest::default(),
    };
    let (config, coloring) = request.into_parts()?;

    info!(
        width = config.width_px,
        height = config.height_px,
        max_iterations = config.max_iterations,
        map = config.map.label(),
        "rendering"
    );

    let renderer = FrameRenderer::new(config, coloring);
    let mut buffer = PixelBuffer::new(config.width_px, config.height_px);
    renderer.render(&mut buffer)?;

    write_png(&buffer, &args.output_path, renderer.config())?;
    info!(path = %args.output_path.display(), "wrote image");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(msg)) if msg.is_empty() => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Err(err @ CliError::Usage(_)) => {
            eprintln!("fractile: {err}\n{USAGE}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("fractile: {err}");
            ExitCode::FAILURE
        }
    }
}
