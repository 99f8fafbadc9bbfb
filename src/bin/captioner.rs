use std::path::PathBuf;

use clap::Parser;

/// Fetch a remote image and overlay a centered bottom caption.
#[derive(Parser, Debug)]
#[command(name = "captioner", version)]
struct Cli {
    /// Source image URL (http or https).
    url: String,

    /// Caption text to overlay. May be empty; an empty caption still draws
    /// the padding-only background box.
    text: String,

    /// Output image path; the extension selects the encoder (e.g. `.png`).
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let written = captioner::caption(&cli.url, &cli.text, &cli.out)?;
    eprintln!("wrote {}", written.display());
    Ok(())
}
