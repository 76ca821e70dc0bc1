use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shapeboard::{init_logging, Config, Session, BUILD_DATE, VERSION};

#[derive(Debug, Parser)]
#[clap(name = "shapeboard", about = "Draw simple shapes on a character board")]
struct Args {
    #[clap(long = "config", parse(from_os_str))]
    /// Path to the configuration file (.toml or .json)
    config: Option<PathBuf>,

    #[clap(long)]
    /// Board width in cells, overriding the configuration
    width: Option<usize>,

    #[clap(long)]
    /// Board height in cells, overriding the configuration
    height: Option<usize>,

    #[clap(long = "no-color")]
    /// Render without ANSI colors
    no_color: bool,
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match args.config.as_deref() {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        },
    };

    if let Some(width) = args.width {
        config.board.width = width;
    }
    if let Some(height) = args.height {
        config.board.height = height;
    }
    if args.no_color {
        config.render.color = false;
    }
    config.validate().context("Invalid board settings")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();
    let config = load_config(&args)?;
    tracing::info!(
        "shapeboard {} (built {}), board {}x{}",
        VERSION,
        BUILD_DATE,
        config.board.width,
        config.board.height
    );

    let mut session = Session::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let outcome = session.execute(&line);
        for text in &outcome.lines {
            writeln!(stdout, "{}", text)?;
        }
        if outcome.exit {
            break;
        }
    }

    Ok(())
}
