use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use dungen::app::{App, renderer};
use dungen::error::DungenError;
use dungen::generator::MapGenerator;
use dungen::geometry::Size;
use dungen::settings::MapSettings;

/// Procedural dungeon layouts from a seed
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON settings file; flags below override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the generator
    #[arg(short, long, conflicts_with = "random_seed")]
    seed: Option<u64>,

    /// Draw a fresh seed from the OS
    #[arg(long)]
    random_seed: bool,

    /// Map width in cells
    #[arg(long)]
    width: Option<i32>,

    /// Map height in cells
    #[arg(long)]
    height: Option<i32>,

    /// Number of room placement attempts
    #[arg(short, long)]
    rooms: Option<u32>,

    /// Smallest room size
    #[arg(long, value_name = "WxH")]
    min_room: Option<Size>,

    /// Largest room size
    #[arg(long, value_name = "WxH")]
    max_room: Option<Size>,

    /// Print the map as JSON instead of drawing it
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Open the terminal viewer
    #[arg(short, long)]
    interactive: bool,

    /// Where to write logs
    #[arg(long, value_name = "FILE", default_value = "dungen.log")]
    log_file: PathBuf,

    /// Log verbosity (trace, debug, info, warn, error)
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

impl Cli {
    fn settings(&self) -> Result<MapSettings, DungenError> {
        let mut settings = match &self.config {
            Some(path) => MapSettings::from_json_file(path)?,
            None => MapSettings::default(),
        };

        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if self.random_seed {
            settings.seed = rand::random();
            tracing::info!("[main] using random seed {}", settings.seed);
        }
        if let Some(width) = self.width {
            settings.size.width = width;
        }
        if let Some(height) = self.height {
            settings.size.height = height;
        }
        if let Some(rooms) = self.rooms {
            settings.room_count = rooms;
        }
        if let Some(size) = self.min_room {
            settings.room_min_size = size;
        }
        if let Some(size) = self.max_room {
            settings.room_max_size = size;
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Logs go to a file since stdout carries the map or the raw-mode viewer.
/// The returned guard flushes pending lines when dropped.
fn init_tracing(path: &Path, level: Level) -> io::Result<WorkerGuard> {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log file needs a file name"))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(io::Error::other)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(level)
        .with_ansi(false)
        .init();
    Ok(guard)
}

fn run(cli: &Cli) -> Result<(), DungenError> {
    let settings = cli.settings()?;
    tracing::info!("[main] settings: {settings:?}");
    let generator = MapGenerator::new(settings);

    if cli.interactive {
        let mut stdout = io::stdout();
        App::setup_terminal(&mut stdout)?;
        let result = App::new(generator).run(&mut stdout);
        App::restore_terminal(&mut stdout)?;
        return Ok(result?);
    }

    let map = generator.generate();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        print!("{}", renderer::display(&map));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match init_tracing(&cli.log_file, cli.log_level) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("failed to open log file {}: {err}", cli.log_file.display());
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("[main] {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
