//! One-shot ingredient to container conversion from the command line

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cupcount::measure::{ConversionRequest, Phase, CONTAINERS, DEFAULT_CONTAINER_ID, INGREDIENTS};
use cupcount::tools::{calculator, links};

#[derive(Parser)]
#[command(name = "cupcount-calc")]
#[command(about = "How many containers is this much of an ingredient?", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount into a container count
    Convert {
        /// Amount in grams (with --solid) or milliliters
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Treat the amount as grams of a solid ingredient
        #[arg(long)]
        solid: bool,
        /// Ingredient id or label (required with --solid)
        #[arg(long, short)]
        ingredient: Option<String>,
        /// Container id, alias or label
        #[arg(long, short, default_value = DEFAULT_CONTAINER_ID)]
        container: String,
        /// Print the full calculation as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known ingredients
    Ingredients,
    /// List container sizes
    Containers,
    /// Show the author's profile links
    Links {
        /// Only print this link's URL ("github" or "linkedin")
        name: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cupcount=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            amount,
            solid,
            ingredient,
            container,
            json,
        } => {
            let request = ConversionRequest {
                amount,
                phase: if solid { Phase::Solid } else { Phase::Liquid },
                ingredient_id: ingredient,
                container_id: container,
            };
            let response = calculator::convert(request);
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.result);
            }
        }
        Commands::Ingredients => {
            for i in INGREDIENTS.iter() {
                println!("{:<8} {:<8} {} g/ml", i.id, i.label, i.density);
            }
        }
        Commands::Containers => {
            for c in CONTAINERS.iter() {
                println!("{:<8} {:<12} {:<12} {} ml", c.id, c.alias, c.label, c.volume_ml);
            }
        }
        Commands::Links { name: Some(name) } => match links::find_link(&name) {
            Some(link) => println!("{}", link.url),
            None => return Err(format!("Unknown link: {}", name).into()),
        },
        Commands::Links { name: None } => {
            let response = links::get_links();
            for link in &response.links {
                println!("{}: {}", link.label, link.url);
            }
            println!("{}", response.about);
        }
    }

    Ok(())
}
