//! Kiosk console shell - Main Entry Point
//!
//! Usage: `kiosk [OPTIONS] [ORIGIN] [PATH]`
//!
//! Boots the console against a fresh document and prints the resulting HTML.

use std::time::Duration;

use anyhow::{bail, Context};
use kiosk_dom::Document;
use kiosk_fonts::{FileManifestSource, ManifestPolicy};
use kiosk_router::RouteTable;
use kiosk_shell::{BootReport, Bootstrapper, FontOutcome, ShellConfig};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: kiosk [OPTIONS] [ORIGIN] [PATH]

Arguments:
  ORIGIN    Backend origin (default http://127.0.0.1:5000)
  PATH      Initial app path (default /)

Options:
  --manifest <FILE>   Read the font manifest from a JSON file instead of ORIGIN
  --fonts-root <URL>  URL prefix for font files (default /static/fonts)
  --base <PATH>       Path the console is served under
  --timeout <SECS>    Give up on the manifest request after SECS seconds
  --strict            Reject manifest entries with empty family or filename
  -h, --help          Print this help";

struct Args {
    config: ShellConfig,
    manifest: Option<String>,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut config = ShellConfig::default();
    let mut manifest = None;
    let mut positional = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().with_context(|| format!("{} needs a value", flag));
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--manifest" => manifest = Some(value("--manifest")?),
            "--fonts-root" => {
                let root = value("--fonts-root")?;
                config.faces = config.faces.with_fonts_root(&root);
            }
            "--base" => {
                let base = value("--base")?;
                config.routes = RouteTable::console().with_base(&base);
            }
            "--timeout" => {
                let secs: f64 = value("--timeout")?.parse().context("--timeout expects seconds")?;
                let timeout = Duration::try_from_secs_f64(secs).context("--timeout expects a non-negative number")?;
                config.fetch_timeout = Some(timeout);
            }
            "--strict" => config.policy = ManifestPolicy::strict(),
            flag if flag.starts_with('-') => bail!("unknown option {}\n\n{}", flag, USAGE),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    if let Some(origin) = positional.next() {
        config.origin = origin;
    }
    if let Some(path) = positional.next() {
        config.initial_path = path;
    }
    if let Some(extra) = positional.next() {
        bail!("unexpected argument {}\n\n{}", extra, USAGE);
    }

    Ok(Some(Args { config, manifest }))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args()? else {
        println!("{}", USAGE);
        return Ok(());
    };

    tracing::info!("Starting kiosk shell {}", kiosk_shell::VERSION);

    let config = args.config;
    let mut document = Document::with_host(&config.document_url(), &config.mount_target);
    let bootstrapper = Bootstrapper::new(config);
    tracing::info!("Booting {}", document.url());

    let report: BootReport = smol::block_on(async {
        match &args.manifest {
            Some(path) => bootstrapper.boot(&FileManifestSource::new(path), &mut document).await,
            None => bootstrapper.boot_http(&mut document).await,
        }
    })
    .context("boot failed")?;

    if let FontOutcome::Skipped { reason } = &report.fonts {
        tracing::warn!("Continuing without custom fonts: {}", reason);
    }

    println!("{}", document.to_html());
    Ok(())
}
