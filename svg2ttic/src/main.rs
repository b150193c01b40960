//! binary icon converter
//!
//! Takes an SVG drawing and converts it to a TTIC icon. Without an output
//! file the drawing is only checked for conversion errors.

use std::path::PathBuf;

use clap::Parser;
use svg2ttic::{convert_file, ConvertOptions};
use write_icons::{ReservedNames, BOUNDS_TITLE, HIDDEN_PREFIX};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The input SVG file.
    input: PathBuf,

    /// The output icon file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log progress messages
    #[arg(short, long)]
    verbose: bool,

    /// Groups whose title starts with this prefix are not drawn
    #[arg(long, default_value = HIDDEN_PREFIX)]
    hidden_prefix: String,

    /// The title of the group whose rectangle bounds the icon
    #[arg(long, default_value = BOUNDS_TITLE)]
    bounds_title: String,
}

fn main() {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let options = ConvertOptions {
        reserved: ReservedNames {
            hidden_prefix: args.hidden_prefix,
            bounds_title: args.bounds_title,
        },
    };
    if let Err(e) = convert_file(&args.input, args.output.as_deref(), &options) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
