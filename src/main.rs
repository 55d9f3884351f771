// In src/main.rs

//! Headless driver: replays a JSON script of session inputs and writes the
//! final pixel buffer as a binary PPM.
//!
//! Usage: `linecanvas <script.json> <out.ppm> [config.json]`

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::{debug, info};

use linecanvas::{Config, DrawingSession, PixelBuffer, SessionAction, SessionInput, CONFIG};

/// Main entry point for the `linecanvas` driver.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (script_path, out_path, config_path) = match args.as_slice() {
        [script, out] => (PathBuf::from(script), PathBuf::from(out), None),
        [script, out, config] => (
            PathBuf::from(script),
            PathBuf::from(out),
            Some(PathBuf::from(config)),
        ),
        _ => bail!("usage: linecanvas <script.json> <out.ppm> [config.json]"),
    };

    // --- Configuration ---
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => CONFIG.clone(),
    };
    info!(
        "Configuration loaded ({}).",
        config_path
            .as_deref()
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string())
    );

    let inputs = load_script(&script_path)?;
    info!("Replaying {} inputs from {}", inputs.len(), script_path.display());

    let mut session = DrawingSession::new(&config);
    let mut redraws = 0usize;
    for input in inputs {
        if let Some(SessionAction::RequestRedraw) = session.interpret_input(input) {
            redraws += 1;
        }
    }
    debug!("Script requested {} redraws", redraws);

    write_ppm(session.buffer(), &out_path)?;
    info!(
        "Wrote {}x{} image to {}",
        session.buffer().width(),
        session.buffer().height(),
        out_path.display()
    );
    Ok(())
}

fn load_script(path: &Path) -> anyhow::Result<Vec<SessionInput>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse script {}", path.display()))
}

fn write_ppm(buffer: &PixelBuffer, path: &Path) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let header = format!("P6\n{} {}\n255\n", buffer.width(), buffer.height());
    out.write_all(header.as_bytes())
        .and_then(|()| out.write_all(&buffer.to_rgb_bytes()))
        .and_then(|()| out.flush())
        .with_context(|| format!("Failed to write PPM to {}", path.display()))
}
