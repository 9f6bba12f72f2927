use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

/// Status for usage and init failures. Shows up as 255 on Unix.
pub const EXIT_FAILURE: i32 = -1;

#[derive(Debug, Parser)]
#[command(name = "viewer", version, about = "Move an image around a window with the arrow keys")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Image to display (PNG, JPEG, BMP, TGA, ...)
    #[arg(value_name = "PNG_FILE", allow_hyphen_values = true)]
    pub image: PathBuf,
}

pub enum Parsed {
    Run(Cli),
    // help or version was requested and printed
    Exit(clap::Error),
    Usage(clap::Error),
}

pub fn parse_from<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Parsed::Run(cli),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Parsed::Exit(err),
            _ => Parsed::Usage(err),
        },
    }
}

/// Process status for a command line that does not lead to a run.
pub fn exit_code(parsed: &Parsed) -> Option<i32> {
    match parsed {
        Parsed::Run(_) => None,
        Parsed::Exit(err) => Some(err.exit_code()),
        Parsed::Usage(_) => Some(EXIT_FAILURE),
    }
}

impl Parsed {
    pub fn report(&self) {
        match self {
            Parsed::Run(_) => {}
            Parsed::Exit(err) => {
                if let Err(e) = err.print() {
                    eprintln!("{e}");
                }
            }
            Parsed::Usage(err) => println!("{}", err.render()),
        }
    }
}
