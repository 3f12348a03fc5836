use clap::{Parser, Subcommand};

mod res;
mod utils;
mod version;

use res::ResType;

/// Simple program to fetch and prepare web resources for the reader bundle
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch bundle resources from the content servers
    Fetch {
        /// Resource kind to fetch
        #[arg(value_enum)]
        res: ResType,

        /// Base path where to save the fetched files
        #[arg(short, long, default_value = ".")]
        path: String,
    },
    /// Bump the bundle version in the package config using today's date
    Bump {
        /// Path to the package config file
        #[arg(short, long, default_value = "pckgcfg")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Fetch { res, path } => {
            println!("Resource: {:?}", res);
            println!("Path: {}", path);

            // Ensure the output directories exist
            utils::files::ensure_directories(&path)?;

            let files = match res {
                ResType::Styles => res::styles::fetch_styles(&path).await?,
                ResType::Templates => res::templates::fetch_templates(&path).await?,
            };

            println!("\nDownloaded files:");
            for file in &files {
                println!("  - {}", file);
            }
        }
        Commands::Bump { config } => {
            version::bump(&config)?;
        }
    }

    Ok(())
}
