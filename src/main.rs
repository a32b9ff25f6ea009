use chrono::Datelike;
use clap::{Parser, Subcommand};
use foundry_docs::{config, generate, logging, modules, output, resolve};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "foundry-docs")]
#[command(about = "Documentation portal for Foundry VTT modules")]
#[command(long_about = "\
Documentation portal for Foundry VTT modules

Builds the portal landing page: a hero banner, one card per documented
module, the navbar linking every docs section, and the footer.

Source structure:

  ./
  ├── site.toml                    # Site config (optional, overrides stock defaults)
  ├── journeys-and-jamborees/      # Docs section `path`, one <doc id>.md per sidebar doc
  │   ├── intro.md
  │   └── ...
  ├── argon-dragonbane/
  └── ...

Pipeline:

  resolve    site.toml + module cards  →  .foundry-docs-temp/manifest.json
  generate   manifest.json             →  build/index.html

Run 'foundry-docs gen-config' to print a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Source directory holding site.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "build", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".foundry-docs-temp", global = true)]
    temp_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve site config and module cards into a manifest
    Resolve,
    /// Produce the landing page from the manifest
    Generate,
    /// Run the full pipeline: resolve → generate
    Build,
    /// Validate site config, links and doc files without writing anything
    Check,
    /// Print every docs section's sidebar with routes
    Sidebars,
    /// Print a stock site.toml with options documented
    GenConfig {
        /// Include every docs section, navbar item and footer column
        #[arg(long)]
        full: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Resolve => {
            let manifest = run_resolve(&cli.source, &cli.temp_dir)?;
            output::print_resolve_output(&manifest);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let report = generate::generate(&manifest_path, &cli.output, current_year())?;
            output::print_generate_output(&report, &cli.output);
        }
        Command::Build => {
            println!("==> Stage 1: Resolving {}", cli.source.display());
            let manifest = run_resolve(&cli.source, &cli.temp_dir)?;
            output::print_resolve_output(&manifest);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let manifest_path = cli.temp_dir.join("manifest.json");
            let report = generate::generate(&manifest_path, &cli.output, current_year())?;
            output::print_generate_output(&report, &cli.output);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = config::load_config(&cli.source)?;
            let manifest = resolve::resolve(&site, modules::MODULES, &cli.source)?;
            output::print_resolve_output(&manifest);
            println!("==> Site is valid");
        }
        Command::Sidebars => {
            let site = config::load_config(&cli.source)?;
            output::print_sidebars_output(&site);
        }
        Command::GenConfig { full } => {
            if full {
                print!("{}", config::stock_config_full()?);
            } else {
                print!("{}", config::stock_config_toml());
            }
        }
    }

    Ok(())
}

/// Load config, resolve, and write the manifest to the temp dir.
fn run_resolve(
    source: &Path,
    temp_dir: &Path,
) -> Result<resolve::Manifest, Box<dyn std::error::Error>> {
    let site = config::load_config(source)?;
    let manifest = resolve::resolve(&site, modules::MODULES, source)?;
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("manifest.json");
    std::fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
    tracing::debug!(path = %manifest_path.display(), "wrote manifest");
    Ok(manifest)
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
