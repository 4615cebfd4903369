use clap::Parser;
use nearby_places::utils::{logger, validation::Validate};
use nearby_places::{CliArgs, Place, PlacesApi, PlacesClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting nearby-places CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = args.client_config();
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = match PlacesClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if args.list_categories {
        for category in client.list_categories().await {
            println!("{}", category);
        }
        return Ok(());
    }

    match client.fetch_places_by_category(&args.category).await {
        Ok(places) => {
            tracing::info!("Fetched {} places", places.len());
            if args.json {
                let records: Vec<_> = places.iter().map(Place::to_plain_record).collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for place in &places {
                    print_place(place);
                }
            }
        }
        Err(e) => {
            tracing::error!("Fetch failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_place(place: &Place) {
    let image_marker = if place.has_image() { "🖼" } else { " " };
    println!(
        "{:<35} {:>10}  {:<15} {} {}",
        place.name(),
        place.formatted_distance(),
        place.category_display(),
        image_marker,
        place.info_url()
    );
}
