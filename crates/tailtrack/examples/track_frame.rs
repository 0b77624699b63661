use std::{env, fs, path::PathBuf};

use serde::Serialize;

use tailtrack::{FrameView, PixelCoords, TailTracker, TrackResult};

#[cfg(not(feature = "tracing"))]
use std::str::FromStr;

#[cfg(not(feature = "tracing"))]
use log::{info, LevelFilter};

#[cfg(feature = "tracing")]
use tracing::info;

#[cfg(feature = "tracing")]
use tailtrack::core::init_tracing;
#[cfg(not(feature = "tracing"))]
use tailtrack::core::init_with_level;

#[derive(Debug, Serialize)]
struct ExampleReport {
    width: usize,
    height: usize,
    result: Option<TrackResult>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    let log_level = LevelFilter::from_str("info").unwrap_or(LevelFilter::Info);
    #[cfg(not(feature = "tracing"))]
    init_with_level(log_level)?;
    #[cfg(not(feature = "tracing"))]
    info!("Logger initialized");

    #[cfg(feature = "tracing")]
    init_tracing(false);

    run()
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = (160, 120);
    let pixels = draw_tail_frame(width, height);
    let frame = FrameView {
        width,
        height,
        data: &pixels,
    };

    let tracker = TailTracker::from_points(
        PixelCoords { x: 20, y: 60 },
        PixelCoords { x: 140, y: 60 },
        10,
    )?;
    let result = tracker.track(&frame)?;

    match &result {
        Some(res) => info!(
            "tail angle {:.4} rad over {} points",
            res.angle,
            res.points.len()
        ),
        None => info!("tracker not configured"),
    }

    let report = ExampleReport {
        width,
        height,
        result,
    };
    write_report(env::args().nth(1).as_deref(), report)
}

/// Light background with a dark horizontal tail band through the middle.
fn draw_tail_frame(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = vec![210u8; width * height];
    for y in 58..=62 {
        for x in 12..=148 {
            pixels[y * width + x] = 40;
        }
    }
    pixels
}

fn write_report(
    path: Option<&str>,
    report: ExampleReport,
) -> Result<(), Box<dyn std::error::Error>> {
    let out_path = path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tmpdata/track_frame_report.json"));
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&out_path, json)?;
    println!("wrote report JSON to {}", out_path.display());
    Ok(())
}
