use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use certdocs::config::{config_file_path, docs_root, load, load_or_default};
use certdocs::LinkInjector;

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let root = docs_root(args.root.as_deref())?;
    let config = match &args.config {
        Some(path) => load(path)?,
        None => load_or_default(&config_file_path(&root))?,
    };

    let summary = LinkInjector::new(&root, config).run()?;

    if args.verbose {
        for path in &summary.headingless_paths {
            println!("No top-level heading in {}; left unchanged", path.display());
        }
        println!("{}", summary.describe());
    }

    Ok(())
}

struct CliArgs {
    root: Option<PathBuf>,
    config: Option<PathBuf>,
    verbose: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut root = None;
        let mut config = None;
        let mut verbose = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--root" => {
                    let value = args
                        .next()
                        .context("Expected a directory after --root")?;
                    root = Some(PathBuf::from(value));
                }
                "--config" => {
                    let value = args
                        .next()
                        .context("Expected a file path after --config")?;
                    config = Some(PathBuf::from(value));
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self {
            root,
            config,
            verbose,
        })
    }
}

fn print_usage() {
    println!("Add PDF download links to certification pages.");
    println!("Inserts a download block after the first '# ' heading of each page.");
    println!("Usage: cargo run --bin add_download_links -- [options]");
    println!("Options:");
    println!("  --root <dir>       Documentation root (default: $CERTDOCS_ROOT or current dir)");
    println!("  --config <file>    Config file (default: <root>/download-links.toml)");
    println!("  -v, --verbose      Report pages without a heading and print a summary");
}
