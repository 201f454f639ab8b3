//! camdkit CLI - Generate example clips, print schemas and validate documents.

use anyhow::{bail, Context};
use camdkit::io::{read_document, to_string, write_document};
use camdkit::params::new_uuid_urn;
use camdkit::prelude::*;
use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const VERSION_INFO: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CAMDKIT_GIT_REVISION"),
    ", built ",
    env!("CAMDKIT_BUILD_DATE"),
    " ",
    env!("CAMDKIT_BUILD_TIME"),
    ")"
);

const PROTOCOL: &str = "OpenTrackIO_0.1.0";

/// Camera tracking metadata tool
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbosity: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build, validate and print an example clip
    Example {
        /// Number of frames in the clip
        #[arg(short = 'n', long = "frames", value_name = "N", default_value_t = 3)]
        frames: usize,

        /// Print only this frame (0-based) as a single-frame document
        #[arg(long = "frame", value_name = "INDEX")]
        frame: Option<usize>,

        /// Write to a file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Compact output instead of pretty-printed
        #[arg(long = "compact")]
        compact: bool,
    },

    /// Print the JSON Schema of a clip document
    Schema {
        /// Schema of a single frame instead of a whole clip
        #[arg(long = "static")]
        frame: bool,

        /// Write to a file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Decode and validate a document
    Validate {
        /// Document to check
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// The document is a single frame
        #[arg(long = "frame")]
        frame: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity, cli.quiet);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Install the fmt subscriber. `RUST_LOG` overrides the flags.
fn init_logging(verbosity: u8, quiet: bool) {
    let level = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Example { frames, frame, output, compact } => {
            cmd_example(frames, frame, output.as_deref(), !compact)
        }
        Command::Schema { frame, output } => cmd_schema(frame, output.as_deref()),
        Command::Validate { file, frame } => cmd_validate(&file, frame),
    }
}

fn emit(document: &JsonValue, output: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            write_document(path, document, pretty)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "document written");
        }
        None => println!("{}", to_string(document, pretty)?),
    }
    Ok(())
}

// ============================================================================
// example
// ============================================================================

fn cmd_example(frames: usize, frame: Option<usize>, output: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    if frames == 0 {
        bail!("an example clip needs at least one frame");
    }
    if let Some(index) = frame {
        if index >= frames {
            bail!("frame {} out of range (clip has {} frames)", index, frames);
        }
    }

    let clip = example_clip(frames);
    clip.validate().context("example clip is invalid")?;
    debug!(frames, "example clip built");

    let document = match frame {
        Some(index) => clip.extract(index).to_json()?,
        None => clip.to_json()?,
    };
    emit(&document, output, pretty)
}

/// A tracked camera dollying along X for `frames` frames at 24 fps.
fn example_clip(frames: usize) -> Clip {
    let mut clip = Clip::new();

    clip.set_duration(Rational::new(frames as i64, 24));
    clip.set_capture_fps(Rational::whole(24));
    clip.set_active_sensor_physical_dimensions(Dimensions::new(36000, 24000));
    clip.set_camera_make("Mo-Sys");
    clip.set_camera_model("StarTracker Max");
    clip.set_camera_firmware("3289");
    clip.set_camera_serial_number("1234567890A");
    clip.set_lens_make("Cooke");
    clip.set_lens_model("S7/i");
    clip.set_iso(800);
    clip.set_anamorphic_squeeze(200);
    clip.set_shutter_angle(180_000);

    // Every frame gets the same timing apart from its own counters
    let base_seconds: i64 = 1_718_806_000;
    let indices = 0..frames as i64;
    let mut sync = Synchronization::new(24.0, true, SynchronizationSource::Ptp);
    sync.ptp_master = Some("00:11:22:33:44:55".to_string());
    sync.ptp_domain = Some(1);

    clip.set_packet_id(indices.clone().map(|_| new_uuid_urn()));
    clip.set_protocol(indices.clone().map(|_| PROTOCOL.to_string()));
    clip.set_timing_mode(indices.clone().map(|_| "internal".to_string()));
    clip.set_timing_sequence_number(indices.clone());
    clip.set_timing_frame_rate(indices.clone().map(|_| 24.0));
    clip.set_timing_timestamp(indices.clone().map(|i| {
        Timestamp::new(base_seconds + i / 24, (i % 24) * 1_000_000_000 / 24)
    }));
    clip.set_timing_timecode(indices.clone().map(|i| {
        Timecode::new(1, 0, (i / 24) % 60, i % 24, TimecodeFormat::Fps24)
    }));
    clip.set_timing_synchronization(indices.clone().map(|_| sync.clone()));
    clip.set_t_number(indices.clone().map(|_| 2800));
    clip.set_focal_length(indices.clone().map(|_| 35));
    clip.set_focus_position(indices.clone().map(|i| 2000 + 10 * i));
    clip.set_lens_encoders(indices.clone().map(|i| {
        let focus = (i as f64 / frames as f64).min(1.0);
        Encoders::new(Some(focus), Some(0.5), None)
    }));
    clip.set_transforms(indices.map(|i| {
        vec![Transform::new(
            Vector3::new(0.1 * i as f64, 0.0, 1.5),
            Rotator3::new(0.0, -5.0, 0.0),
        )
        .with_name("Camera")]
    }));

    clip
}

// ============================================================================
// schema
// ============================================================================

fn cmd_schema(frame: bool, output: Option<&Path>) -> anyhow::Result<()> {
    let schema = if frame {
        Clip::make_static_json_schema()
    } else {
        Clip::make_json_schema()
    };
    emit(&schema, output, true)
}

// ============================================================================
// validate
// ============================================================================

fn cmd_validate(file: &Path, frame: bool) -> anyhow::Result<()> {
    let document = read_document(file).with_context(|| format!("reading {}", file.display()))?;
    let clip = if frame {
        Clip::from_frame_json(&document)
    } else {
        Clip::from_json(&document)
    }
    .with_context(|| format!("decoding {}", file.display()))?;

    match clip.validate() {
        Ok(()) => {
            println!("{}: valid ({} frames)", file.display(), clip.len_frames());
            Ok(())
        }
        Err(Error::Validation { failures }) => {
            for failure in &failures {
                println!("{}: invalid {}", file.display(), failure);
            }
            bail!("{} invalid value(s)", failures.len());
        }
        Err(e) => Err(e.into()),
    }
}
