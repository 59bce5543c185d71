//! heap-layout CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use heap_layout::{ChartOptions, DEMO_VALUES, LayoutConfig, render_values};

/// Lay out a binary min-heap as a tree and print the chart JSON.
#[derive(Parser, Debug)]
#[command(
    name = "heap-layout",
    version = env!("HEAP_LAYOUT_VERSION"),
    about = "Binary min-heap to tree layout (chart JSON output)"
)]
struct Cli {
    /// Input file with the values (reads stdin if no input is given)
    input: Option<String>,

    /// Inline value list, e.g. "9, 86, 1, 2"
    #[arg(long = "values", conflicts_with_all = ["input", "demo"])]
    values: Option<String>,

    /// Use the built-in demo sequence
    #[arg(long = "demo", conflicts_with = "input")]
    demo: bool,

    /// Horizontal distance between offsets
    #[arg(long = "step-x", default_value_t = 10.0, allow_negative_numbers = true, value_parser = finite_f64)]
    step_x: f64,

    /// Vertical distance between depths
    #[arg(long = "step-y", default_value_t = 10.0, allow_negative_numbers = true, value_parser = finite_f64)]
    step_y: f64,

    #[arg(long = "origin-x", default_value_t = 200.0, allow_negative_numbers = true, value_parser = finite_f64)]
    origin_x: f64,

    #[arg(long = "origin-y", default_value_t = 200.0, allow_negative_numbers = true, value_parser = finite_f64)]
    origin_y: f64,

    /// Spatial index cell size
    #[arg(long = "spacing", default_value_t = 1.0, value_parser = positive_f64)]
    spacing: f64,

    /// Shift applied per collision probe
    #[arg(long = "probe-step", default_value_t = 10.0, value_parser = positive_f64)]
    probe_step: f64,

    /// Horizontal probes before moving one row down (unbounded if omitted)
    #[arg(long = "probe-limit")]
    probe_limit: Option<usize>,

    /// Node symbol size
    #[arg(long = "symbol-size", default_value_t = 20)]
    symbol_size: u32,

    /// Chart title
    #[arg(long = "title", default_value = "heap graph")]
    title: String,

    /// Chart layout mode (force, none, circular)
    #[arg(long = "layout", default_value = "force")]
    layout: String,

    /// Force-layout repulsion
    #[arg(long = "repulsion", default_value_t = 100.0, value_parser = finite_f64)]
    repulsion: f64,

    /// Disable pan/zoom in the chart
    #[arg(long = "no-roam")]
    no_roam: bool,

    /// Pretty-print the JSON
    #[arg(long = "pretty")]
    pretty: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn positive_f64(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("must be a positive number, got {v}"))
    }
}

fn finite_f64(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("must be a finite number, got {v}"))
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Read input from --values, --demo, file or stdin
    let text = if let Some(ref values) = cli.values {
        values.clone()
    } else if cli.demo {
        DEMO_VALUES
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    } else if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let config = LayoutConfig {
        step_x: cli.step_x,
        step_y: cli.step_y,
        origin_x: cli.origin_x,
        origin_y: cli.origin_y,
        spacing: cli.spacing,
        probe_step: cli.probe_step,
        probe_limit: cli.probe_limit,
        symbol_size: cli.symbol_size,
    };
    let options = ChartOptions {
        title: cli.title.clone(),
        layout: cli.layout.clone(),
        roam: !cli.no_roam,
        repulsion: cli.repulsion,
    };

    let rendered = match render_values(&text, &config, &options, cli.pretty) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    info!(bytes = rendered.len(), "chart rendered");

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
