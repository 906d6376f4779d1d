use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use moviegrid::catalog::HttpMovieSource;
use moviegrid::config::Config;
use moviegrid::logging::init_tracing;
use moviegrid::ui::browser::MovieBrowser;
use moviegrid::ui::plain::{render_browser_text, ConsoleNotifier};

#[derive(Parser, Debug)]
#[command(name = "moviegrid", version, about = "Browse a remote movie catalog in the terminal")]
struct Cli {
    /// Catalog endpoint (overrides source.url from the config file)
    #[arg(long)]
    url: Option<String>,

    /// Request timeout in seconds (overrides source.request_timeout_seconds)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fetch once and print the first page as text instead of starting the TUI
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config.with_overrides(cli.url, cli.timeout),
        Err(err) => {
            eprintln!("Error: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("Error: {err}");
        return Ok(ExitCode::FAILURE);
    }

    let source = HttpMovieSource::new(&config.source).context("failed to build HTTP client")?;

    if cli.dump {
        return dump(&source);
    }

    moviegrid::ui::runtime::run(source).context("terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}

fn dump(source: &HttpMovieSource) -> anyhow::Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let mut browser = MovieBrowser::new();
    let mut notifier = ConsoleNotifier::default();
    runtime.block_on(browser.initialize(source, &mut notifier));

    if !notifier.errors().is_empty() {
        return Ok(ExitCode::FAILURE);
    }
    print!("{}", render_browser_text(&browser));
    Ok(ExitCode::SUCCESS)
}
