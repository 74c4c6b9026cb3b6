#![deny(unsafe_code)]
//! CLI binary for huewheel.
//!
//! Subcommands:
//! - `convert <color>` — print a color, optionally in another format
//! - `inspect <color>` — print its hue, saturation and luminosity
//! - `lighten`, `darken`, `saturate`, `desaturate`, `hue-rotate`,
//!   `grayscale`, `complement`, `invert` — manipulate a color and print it
//!   in the format it was given in
//! - `names` — print the known color names

mod error;

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use huewheel_core::names;
use huewheel_core::{ColorHandle, Format, Rendered, RenderOptions};
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "huewheel", about = "Convert and adjust hex, RGB(A) and HSL(A) colors")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Print hex colors without the leading '#'.
    #[arg(long, global = true)]
    no_prefix: bool,

    /// Render options as a JSON object (e.g. '{"hex_prefix": false}').
    #[arg(long, global = true)]
    options: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a color, converted to another format if requested.
    Convert {
        /// Hex, rgb()/rgba(), hsl()/hsla() or a CSS color name.
        color: String,

        /// Output format (hex, rgba, hsla). Defaults to the input's format.
        #[arg(long)]
        to: Option<String>,
    },
    /// Print the hue, saturation and luminosity of a color.
    Inspect { color: String },
    /// Raise lightness by an amount in [0, 1].
    Lighten {
        color: String,
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },
    /// Lower lightness by an amount in [0, 1].
    Darken {
        color: String,
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },
    /// Raise saturation by an amount in [0, 1].
    Saturate {
        color: String,
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },
    /// Lower saturation by an amount in [0, 1].
    Desaturate {
        color: String,
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },
    /// Rotate the hue by a number of degrees.
    HueRotate {
        color: String,
        #[arg(allow_hyphen_values = true)]
        degrees: i32,
    },
    /// Remove all saturation.
    Grayscale { color: String },
    /// Rotate the hue by 180 degrees.
    Complement { color: String },
    /// Invert each RGB channel.
    Invert { color: String },
    /// List known color names.
    Names,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Convert { .. } => "convert",
            Command::Inspect { .. } => "inspect",
            Command::Lighten { .. } => "lighten",
            Command::Darken { .. } => "darken",
            Command::Saturate { .. } => "saturate",
            Command::Desaturate { .. } => "desaturate",
            Command::HueRotate { .. } => "hue-rotate",
            Command::Grayscale { .. } => "grayscale",
            Command::Complement { .. } => "complement",
            Command::Invert { .. } => "invert",
            Command::Names => "names",
        }
    }
}

fn render_options(cli: &Cli) -> Result<RenderOptions, CliError> {
    let mut options = match &cli.options {
        Some(json) => RenderOptions::from_json(json)?,
        None => RenderOptions::default(),
    };
    if cli.no_prefix {
        options.hex_prefix = false;
    }
    Ok(options)
}

fn parse_format(name: &str) -> Result<Format, CliError> {
    Format::from_name(name).map_err(|e| {
        CliError::Input(format!(
            "{e} (expected one of: {})",
            Format::list_names().join(", ")
        ))
    })
}

/// What a command produced, before it is printed.
#[derive(Debug, PartialEq)]
enum Output {
    Color(Rendered),
    Inspection {
        format: Format,
        hue: u16,
        saturation: f64,
        luminosity: f64,
        hex: Rendered,
    },
    Names,
}

/// Runs one command against a fresh handle.
fn execute(handle: &mut ColorHandle, command: &Command) -> Result<Output, CliError> {
    let rendered = match command {
        Command::Names => return Ok(Output::Names),
        Command::Inspect { color } => {
            let hue = handle.hue(Some(color.as_str().into()))?;
            return Ok(Output::Inspection {
                format: handle.render().format(),
                hue,
                saturation: handle.saturation(None)?,
                luminosity: handle.luminosity(None)?,
                hex: handle.render_in(Format::Hex),
            });
        }
        Command::Convert { color, to } => {
            handle.set_color(color.as_str())?;
            match to {
                Some(name) => handle.render_in(parse_format(name)?),
                None => handle.render(),
            }
        }
        Command::Lighten { color, amount } => handle.lighten(*amount, Some(color.as_str().into()))?,
        Command::Darken { color, amount } => handle.darken(*amount, Some(color.as_str().into()))?,
        Command::Saturate { color, amount } => {
            handle.saturate(*amount, Some(color.as_str().into()))?
        }
        Command::Desaturate { color, amount } => {
            handle.desaturate(*amount, Some(color.as_str().into()))?
        }
        Command::HueRotate { color, degrees } => {
            handle.hue_rotate(*degrees, Some(color.as_str().into()))?
        }
        Command::Grayscale { color } => handle.grayscale(Some(color.as_str().into()))?,
        Command::Complement { color } => handle.complement(Some(color.as_str().into()))?,
        Command::Invert { color } => handle.invert(Some(color.as_str().into()))?,
    };
    Ok(Output::Color(rendered))
}

fn run(cli: Cli) -> Result<(), CliError> {
    let options = render_options(&cli)?;
    tracing::debug!(command = cli.command.name(), ?options, "running");

    let mut handle = ColorHandle::with_options(options);
    match execute(&mut handle, &cli.command)? {
        Output::Names => {
            if cli.json {
                let entries: serde_json::Map<String, serde_json::Value> = names::list_names()
                    .filter_map(|name| {
                        names::lookup_named_color(name).map(|hex| (name.to_string(), hex.into()))
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for name in names::list_names() {
                    println!("{name}");
                }
            }
        }
        Output::Inspection {
            format,
            hue,
            saturation,
            luminosity,
            hex,
        } => {
            if cli.json {
                let info = serde_json::json!({
                    "format": format,
                    "hue": hue,
                    "saturation": saturation,
                    "luminosity": luminosity,
                    "hex": hex,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("format:     {format}");
                println!("hue:        {hue}");
                println!("saturation: {saturation}");
                println!("luminosity: {luminosity}");
                println!("hex:        {hex}");
            }
        }
        Output::Color(rendered) => {
            if cli.json {
                let info = serde_json::json!({
                    "command": cli.command.name(),
                    "format": rendered.format(),
                    "result": rendered,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{rendered}");
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
