use anyhow::{Context, Result};
use backend::{load_texture, texture_size, System, SystemConfig};
use scene::{Viewer, ViewerConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{exit_code, Cli, Parsed, EXIT_FAILURE};

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = ViewerConfig::default();
    let mut system = System::new(&SystemConfig::from(&config)).context("SDL init error")?;
    let mut viewer = Viewer::new(config);

    let creator = system.texture_creator();
    let texture = match load_texture(&creator, &cli.image) {
        Ok(texture) => {
            viewer.attach_texture_size(texture_size(&texture));
            Some(texture)
        }
        Err(e) => {
            warn!("Couldn't load {}: {e}", cli.image.display());
            None
        }
    };

    while viewer.is_running() {
        let events = system.process_io_events();
        viewer.update(events);
        system
            .render(&viewer.frame(), texture.as_ref())
            .context("rendering frame")?;
        system.draw_to_screen(viewer.config().frame_delay);
    }

    info!("quit requested, shutting down");
    Ok(())
}

fn main() {
    let cli = match cli::parse_from(std::env::args_os()) {
        Parsed::Run(cli) => cli,
        parsed => {
            parsed.report();
            std::process::exit(exit_code(&parsed).unwrap_or(EXIT_FAILURE));
        }
    };

    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        error!("{err:#}");
        std::process::exit(EXIT_FAILURE);
    }
}
