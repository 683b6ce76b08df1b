//! CLI tool to generate the host HTML page for the application.
//!
//! Usage:
//!   shell-gen
//!   shell-gen --mount '#root' --asset-base /vendor -o dist/index.html
//!
//! Runs the bootstrap sequence against a static document, so the page
//! carries the global assets in registration order and the mount element.
//! If no output file is specified, writes to stdout.
//!
//! Defaults come from `APP_MOUNT_SELECTOR` and `APP_ASSET_BASE`; flags
//! override them.

use app_shell::{Bootstrap, BootstrapConfig, StaticDocument, TextRoot};
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "shell-gen", about = "Generate the host HTML page for the application")]
struct Args {
    /// Mount point selector (must be a plain `#id`)
    #[arg(long)]
    mount: Option<String>,

    /// Base URL the stock assets are served from
    #[arg(long)]
    asset_base: Option<String>,

    /// Page title
    #[arg(long, default_value = "App")]
    title: String,

    /// Text shown in the mount element until the application renders
    #[arg(long, default_value = "Loading...")]
    placeholder: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut config = BootstrapConfig::from_lookup(|key| env::var(key).ok());
    if let Some(mount) = args.mount {
        config = config.with_mount_point(mount.as_str());
    }
    if let Some(base) = args.asset_base {
        config = config.with_asset_base(base);
    }

    let mut doc = match StaticDocument::shell(&args.title, &config.mount_point) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {} (only '#id' selectors are supported)", e);
            process::exit(1);
        }
    };

    let mut bootstrap = Bootstrap::from_config(TextRoot::new(args.placeholder), &config);
    if let Err(e) = bootstrap.run(&mut doc) {
        eprintln!("Bootstrap error: {}", e);
        process::exit(1);
    }

    match args.output {
        Some(path) => {
            if let Err(e) = doc.write_to(&path) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                process::exit(1);
            }
            eprintln!(
                "Wrote {} ({} assets, mount {})",
                path.display(),
                doc.assets().len(),
                config.mount_point
            );
        }
        None => {
            if let Err(e) = io::stdout().write_all(doc.to_html().as_bytes()) {
                eprintln!("Error writing output: {}", e);
                process::exit(1);
            }
        }
    }
}
