use clap::{Parser, Subcommand};
use log::{debug, error};
use nutri_menus::{menu_categories, menu_response, structure_text, tag_options};
use nutri_menus::{JsonCatalog, MenuConfig, MenuStore};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nutri-menus", version, about = "Inspect weekly menus of a Nutri catalog")]
struct Cli {
    /// Catalog file, overrides `catalog_path` from the configuration
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Weekly grid and shopping info of one menu
    Menu { name: String },
    /// Menu names with their cover images
    Categories,
    /// Tag names grouped for the recipe filters
    TagOptions,
    /// Split a text file into category blocks
    Structure { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli {
        catalog,
        pretty,
        command,
    } = Cli::parse();
    let config = MenuConfig::load()?;
    debug!("{:#?}", config);

    match command {
        Command::Menu { name } => {
            let catalog = load_catalog(catalog, &config).await?;
            match menu_response(&catalog, &name).await {
                Ok(response) => {
                    print_json(&response, pretty)?;
                    if response.exit_code() != 0 {
                        std::process::exit(response.exit_code());
                    }
                }
                Err(e) => {
                    error!("Failed to build menu '{}': {}", name, e);
                    return Err(e.into());
                }
            }
        }
        Command::Categories => {
            let catalog = load_catalog(catalog, &config).await?;
            let categories = menu_categories(&catalog, &config).await?;
            print_json(&categories, pretty)?;
        }
        Command::TagOptions => {
            let catalog = load_catalog(catalog, &config).await?;
            let tags = catalog.all_tags().await?;
            print_json(&tag_options(&tags), pretty)?;
        }
        Command::Structure { file } => {
            let text = tokio::fs::read_to_string(&file).await?;
            print_json(&structure_text(&text), pretty)?;
        }
    }

    Ok(())
}

async fn load_catalog(
    path: Option<PathBuf>,
    config: &MenuConfig,
) -> Result<JsonCatalog, nutri_menus::MenuError> {
    let path = path.unwrap_or_else(|| PathBuf::from(&config.catalog_path));
    JsonCatalog::load(path).await
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
