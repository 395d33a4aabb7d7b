use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use text_davinci::models::SelectionPolicy;
use text_davinci::{Config, TextOptions};

#[derive(Parser, Debug)]
#[command(
    name = "textdavinci",
    version,
    about = "Draws your sketch/image using characters in a text file"
)]
struct Args {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    /// Character to draw white pixels [default: " "]
    #[arg(short, long)]
    white_char: Option<String>,

    /// Character to draw black pixels [default: "⠢"]
    #[arg(short, long)]
    black_char: Option<String>,

    /// Path of the output text file [default: output.txt]
    #[arg(short, long)]
    output_path: Option<PathBuf>,

    /// Flip white character and black character (`--flip=false` undoes a config file)
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    flip: Option<bool>,

    /// Disable threshold search and cut at 128 (`--disable-threshold=false` to re-enable)
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    disable_threshold: Option<bool>,

    /// How the threshold search picks a candidate [default: legacy]
    #[arg(long, value_enum)]
    selection: Option<SelectionPolicy>,

    /// Also save the black/white image as PNG
    #[arg(long)]
    preview: Option<PathBuf>,

    /// TOML file with default values for the options above
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Config {
        Config {
            white_char: self.white_char.clone(),
            black_char: self.black_char.clone(),
            output_path: self.output_path.clone(),
            flip: self.flip,
            disable_threshold: self.disable_threshold,
            selection: self.selection,
            preview: self.preview.clone(),
        }
    }
}

fn resolve_options(args: &Args) -> text_davinci::Result<TextOptions> {
    let file = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Ok(args.overrides().merge(file).into_options())
}

fn convert(args: &Args) -> text_davinci::Result<()> {
    let options = resolve_options(args)?;
    log::debug!("options: {:?}", options);
    text_davinci::run(&args.input, &options)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match convert(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
