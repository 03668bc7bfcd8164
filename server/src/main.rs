mod config;
mod document;
mod error;
mod frontend;
mod http;
mod mime;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use log::LevelFilter;
use structopt::StructOpt;

use crate::config::Config;

#[derive(StructOpt)]
struct Opt {
    /// Path to the server config file, defaults are used if it does not exist
    #[structopt(long, parse(from_os_str), default_value = "config.toml")]
    config: PathBuf,
    #[structopt(subcommand)]
    cmd: Cmd,
}

#[derive(StructOpt)]
enum Cmd {
    /// Serve the page over http
    Server,
    /// Print the server rendered page to stdout
    Render,
}

#[tokio::main]
async fn main() -> ExitCode {
    pretty_env_logger::formatted_timed_builder()
        .filter(Some("helloview"), LevelFilter::Debug)
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    let opt = Opt::from_args();

    let result = dispatch(opt.cmd, &opt.config, &mut std::io::stdout().lock()).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("fatal error: {e:?}\n{}", e.backtrace());
            ExitCode::FAILURE
        }
    }
}

/// Only `server` reads the config, `render` works without one.
async fn dispatch(cmd: Cmd, config_path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    match cmd {
        Cmd::Server => run(config_path).await,
        Cmd::Render => render(out).await,
    }
}

async fn run(config_path: &Path) -> anyhow::Result<()> {
    let config = config::load(config_path)?;
    let listen = config.http.listen;

    let app = App::new(config);
    let router = http::routes(app);
    let router = frontend::serve(router);

    let fut = axum::Server::try_bind(&listen)?
        .serve(router.into_make_service());

    log::info!("Listening on {listen}");

    fut.await?;

    Ok(())
}

async fn render(out: &mut impl Write) -> anyhow::Result<()> {
    let html = document::render().await;

    out.write_all(html.as_bytes())?;
    out.flush()?;

    Ok(())
}

#[derive(Clone)]
pub struct App(pub Arc<AppShared>);

impl App {
    pub fn new(config: Config) -> Self {
        App(Arc::new(AppShared { config }))
    }

    pub fn config(&self) -> &Config {
        &self.0.config
    }
}

pub struct AppShared {
    pub config: Config,
}
