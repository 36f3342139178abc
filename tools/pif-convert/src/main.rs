// Command-line converter between ordinary image files and PIF

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pif::{analyze, consts::FILE_EXTENSION, PifDecoder, PifEncoder, PifImage};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Convert images to and from the PIF canonical Huffman format")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a PNG/JPEG/... image into a PIF file
    Encode {
        /// Source image, any format the image crate reads
        input: PathBuf,
        /// Destination; ".pif" is appended when missing
        output: PathBuf,
        /// Build channel codebooks on a single thread
        #[arg(long)]
        serial: bool,
    },
    /// Expand a PIF file into an ordinary image file
    Decode {
        input: PathBuf,
        /// Destination, format chosen from its extension
        output: PathBuf,
    },
    /// Print per-channel frequencies and codes of an image
    Stats {
        /// A PIF file or any image the image crate reads
        input: PathBuf,
        /// Print every symbol instead of the channel summary only
        #[arg(long)]
        symbols: bool,
    },
}

fn is_pif(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(FILE_EXTENSION))
}

fn with_pif_extension(path: PathBuf) -> PathBuf {
    if is_pif(&path) {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".");
        name.push(FILE_EXTENSION);
        PathBuf::from(name)
    }
}

fn load_raster(path: &Path) -> Result<PifImage> {
    if is_pif(path) {
        return PifDecoder::new()
            .decode_file(path)
            .with_context(|| format!("Failed decoding {}", path.display()));
    }

    let rgb = image::open(path)
        .with_context(|| format!("Could not read image {}", path.display()))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(PifImage::from_rgb8(width, height, rgb.as_raw())?)
}

fn encode(input: &Path, output: PathBuf, serial: bool) -> Result<()> {
    let raster = load_raster(input)?;
    let output = with_pif_extension(output);

    let start = Instant::now();
    let options = pif::EncoderOptions::new().parallel(!serial);
    PifEncoder::new(options)
        .encode_file(&raster, &output)
        .with_context(|| format!("Failed writing {}", output.display()))?;
    let elapsed = start.elapsed();

    let size = std::fs::metadata(&output)?.len();
    let raw = raster.pixel_count() as u64 * 3;
    println!(
        "{} -> {}: {}x{}, {} bytes ({:.1}% of raw RGB) in {:.2?}",
        input.display(),
        output.display(),
        raster.width(),
        raster.height(),
        size,
        100.0 * size as f64 / raw as f64,
        elapsed
    );
    Ok(())
}

fn decode(input: &Path, output: &Path) -> Result<()> {
    if is_pif(output) {
        bail!("Refusing to write decoded pixels to a .{} file", FILE_EXTENSION);
    }

    let raster = PifDecoder::new()
        .decode_file(input)
        .with_context(|| format!("Failed decoding {}", input.display()))?;
    let rgb = image::RgbImage::from_raw(raster.width(), raster.height(), raster.to_rgb8())
        .context("Decoded pixel buffer does not match its dimensions")?;
    rgb.save(output)
        .with_context(|| format!("Failed writing {}", output.display()))?;

    println!(
        "{} -> {}: {}x{}",
        input.display(),
        output.display(),
        raster.width(),
        raster.height()
    );
    Ok(())
}

fn stats(input: &Path, symbols: bool) -> Result<()> {
    let raster = load_raster(input)?;
    println!("{}: {}x{}", input.display(), raster.width(), raster.height());

    for report in analyze(&raster)? {
        println!(
            "{:>5}: {:>3} symbols, {:>10} bits, {:.3} bits/sample",
            report.channel,
            report.distinct_symbols(),
            report.encoded_bits,
            report.bits_per_sample()
        );
        if symbols {
            println!("  {:>5} {:>10}  {:<24} {:<24}", "value", "frequency", "initial", "canonical");
            for row in &report.symbols {
                println!(
                    "  {:>5} {:>10}  {:<24} {:<24}",
                    row.symbol, row.frequency, row.initial_code, row.canonical_code
                );
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    match args.command {
        Command::Encode {
            input,
            output,
            serial,
        } => encode(&input, output, serial),
        Command::Decode { input, output } => decode(&input, &output),
        Command::Stats { input, symbols } => stats(&input, symbols),
    }
}
