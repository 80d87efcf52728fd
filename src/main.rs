use clap::{Parser, Subcommand};
use miniblog::{config, generate, index, output, scan};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "miniblog")]
#[command(about = "Static weblog generator")]
#[command(long_about = "\
Static weblog generator

Your filesystem is the data source. Every file under the pages directory is
one article; the directory it sits in is its category. An article is a small
metadata header followed by a markdown body:

  Title: A day at the museum
  Date: 2024-03-01 10:00
  Description: Notes from the exhibition

  Opening paragraph, shown on index pages.

  ---CUT---

  The rest, shown only on the article page.

Pages structure:

  pages/
  ├── config.toml              # Site config (optional)
  ├── welcome.md               # Uncategorized (global index only)
  └── tech/
      ├── first-post.md        # Category `tech`
      └── second-post.md

Markdown plus a figure block: $$media/photo.jpg|The caption$$ renders an
image with its caption.

Run 'miniblog gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Pages directory
    #[arg(long, default_value = "pages", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "output", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every article and index page
    Build,
    /// Parse and validate the pages tree without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let start = Instant::now();
            let config = config::load_config(&cli.source)?;

            println!("==> Parsing articles in {}", cli.source.display());
            let mut articles = scan::scan(&cli.source, &config)?;

            println!("==> Sorting and grouping");
            index::sort_articles(&mut articles);
            let categories = index::split_categories(&articles);
            output::print_scan_output(&articles);

            println!("==> Rendering HTML to {}", cli.output.display());
            generate::generate(&articles, &categories, &config, &cli.output)?;
            println!(
                "{}",
                output::format_generate_summary(articles.len(), categories.len())
            );

            println!("==> Done in {:.2}s", start.elapsed().as_secs_f64());
        }
        Command::Check => {
            let config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let mut articles = scan::scan(&cli.source, &config)?;
            index::sort_articles(&mut articles);
            output::print_scan_output(&articles);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
