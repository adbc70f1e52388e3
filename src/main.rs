use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use articlegen::analyse::{describe_catalog, summary};
use articlegen::config::{GenerateArgs, OutputArgs};
use articlegen::pipeline::{existing_articles, generate_all, Site};
use articlegen::requester::Requester;

const RULE: &str = "============================================================";

/// Generates SEO articles for a keyword catalog and a blog index linking them.
#[derive(Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Request, format and save every catalog article, then build the index (default)
    Generate(GenerateArgs),
    /// Rebuild index.html from pages already in the output directory
    Index(OutputArgs),
    /// Print the keyword catalog
    Catalog(OutputArgs),
}

fn generate(args: GenerateArgs) -> Result<()> {
    let catalog = args.output.load_catalog()?;
    let settings = args.api.settings()?;
    log::info!("using {} at {}", settings.model, settings.url);

    println!("{RULE}");
    println!("BULK SEO ARTICLE GENERATOR");
    println!("{RULE}");
    println!("\nGenerating {} articles...", catalog.len());
    println!("Output folder: {}/\n", args.output.output_dir.display());

    let mut requester = Requester::new(settings)?;
    let report = generate_all(
        &catalog,
        &mut requester,
        &args.output.output_dir,
        args.api.delay(),
        std::thread::sleep,
    )?;

    println!("\n{RULE}");
    let site = Site {
        output_dir: &args.output.output_dir,
        site_url: args.output.site_url.as_deref(),
    };
    site.publish(&report.generated)?;
    println!("✓ Created blog index page");

    print!("{}", summary(&catalog, &report, &args.output.output_dir)?);
    Ok(())
}

fn index(args: OutputArgs) -> Result<()> {
    let catalog = args.load_catalog()?;
    let articles = existing_articles(&catalog, &args.output_dir);
    let site = Site {
        output_dir: &args.output_dir,
        site_url: args.site_url.as_deref(),
    };
    site.publish(&articles)?;
    println!(
        "✓ Rebuilt {}/index.html with {} of {} articles",
        args.output_dir.display(),
        articles.len(),
        catalog.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Generate(cli.generate)) {
        Command::Generate(args) => generate(args),
        Command::Index(args) => index(args),
        Command::Catalog(args) => {
            print!("{}", describe_catalog(&args.load_catalog()?)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_generates() {
        let cli = Cli::try_parse_from(["articlegen", "--delay-secs", "0"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.api.delay_secs, 0);
        assert_eq!(cli.generate.output.output_dir, Path::new("generated_articles"));
    }

    #[test]
    fn index_subcommand_takes_output_args() {
        let cli = Cli::try_parse_from(["articlegen", "index", "--output-dir", "out", "--site-url", "https://example.com"])
            .unwrap();
        match cli.command {
            Some(Command::Index(args)) => {
                assert_eq!(args.output_dir, Path::new("out"));
                assert_eq!(args.site_url.as_deref(), Some("https://example.com"));
            }
            _ => panic!("expected index subcommand"),
        }
    }

    #[test]
    fn generate_flags_before_a_subcommand_are_rejected() {
        assert!(Cli::try_parse_from(["articlegen", "--output-dir", "x", "index"]).is_err());
        assert!(Cli::try_parse_from(["articlegen", "--model", "gpt-4o", "catalog"]).is_err());
    }
}
