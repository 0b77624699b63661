use std::path::{Path, PathBuf};

use clap::Parser;
use image::ImageReader;

#[cfg(not(feature = "tracing"))]
use log::LevelFilter;
use log::{info, warn};

use tailtrack::adapt::{filtered_to_gray, frame_view};
use tailtrack::{TailTrackConfig, TailTrackReport, TailTracker};

/// Track a tail bending angle on a single video frame.
#[derive(Parser, Debug)]
#[command(name = "tailtrack", version, about)]
struct Args {
    /// Path to the JSON tracking config.
    config: PathBuf,

    /// Override the report output path from the config.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the normalized and smoothed frame to this path.
    #[arg(long)]
    filtered: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    #[cfg(not(feature = "tracing"))]
    {
        let level = match args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        tailtrack::core::init_with_level(level)?;
    }

    #[cfg(feature = "tracing")]
    {
        tracing_log::LogTracer::init()?;
        tailtrack::core::init_tracing(false);
        if args.verbose > 0 {
            info!("verbosity flags are ignored under tracing; set RUST_LOG instead");
        }
    }

    run(&args)
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(args)))]
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = TailTrackConfig::load_json(&args.config)?;
    let tracker = TailTracker::new(cfg.params)?;

    let img = load_image(Path::new(&cfg.image_path))?;
    let frame = frame_view(&img);
    info!("loaded frame {}x{}", frame.width, frame.height);

    let mut report = TailTrackReport::new(&cfg, &args.config);
    match tracker.track(&frame) {
        Ok(Some(result)) => {
            info!(
                "tail angle {:.4} rad over {} points",
                result.angle,
                result.points.len()
            );
            report.set_result(result);
        }
        Ok(None) => warn!("tracker is not configured; no result"),
        Err(err) => {
            warn!("tracking failed: {err}");
            report.set_error(&err);
        }
    }

    if let Some(path) = &args.filtered {
        write_filtered(&tracker, &frame, path);
    }

    let out_path = args.output.clone().unwrap_or_else(|| cfg.output_path());
    report.write_json(&out_path)?;
    println!("wrote report JSON to {}", out_path.display());
    Ok(())
}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "info", skip(image_path))
)]
fn load_image(image_path: &Path) -> Result<image::GrayImage, Box<dyn std::error::Error>> {
    Ok(ImageReader::open(image_path)?.decode()?.to_luma8())
}

fn write_filtered(tracker: &TailTracker, frame: &tailtrack::FrameView<'_>, path: &Path) {
    let buf = match tracker.preprocess(frame) {
        Ok(buf) => buf,
        Err(err) => {
            warn!("cannot compute filtered frame: {err}");
            return;
        }
    };
    match filtered_to_gray(&buf) {
        Some(img) => match img.save(path) {
            Ok(()) => info!("wrote filtered frame to {}", path.display()),
            Err(err) => warn!("cannot write filtered frame: {err}"),
        },
        None => warn!("filtered frame dimensions do not fit an image"),
    }
}
