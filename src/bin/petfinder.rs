//! Petfinder API tour binary.
//!
//! Fetches a fixed set of records with the shared client and prints them.
//! Reads `PF_CLIENT_ID`, `PF_CLIENT_SECRET` and `PF_BASE_URL` from the
//! environment or from a `config.env` / `.env` file. Log level follows
//! `RUST_LOG` and defaults to `info`.

use std::process::ExitCode;

use petfinder::output::PrettyPrint;
use petfinder::{
    get_all_types, get_animals, get_organizations, Animal, AnimalType, Get, Organization,
    PetfinderClient, SearchParams,
};
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

const SAMPLE_TYPE: &str = "dog";
const SAMPLE_ANIMAL_ID: &str = "68670528";
const SAMPLE_ORGANIZATION_ID: &str = "KY422";

#[tokio::main]
async fn main() -> ExitCode {
    if dotenvy::from_filename("config.env").is_err() {
        let _ = dotenvy::dotenv();
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = match petfinder::get_client().await {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Error: {e}");
            eprintln!("Hint: Set PF_CLIENT_ID and PF_CLIENT_SECRET environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&client).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &PetfinderClient) -> petfinder::Result<()> {
    let types = get_all_types(client).await?;
    println!("{}\n", Table::new(types.iter().map(TypeRow::from)));

    let dog = AnimalType::get(client, SAMPLE_TYPE).await?;
    println!("{}\n", dog.pretty_print());

    let animal = Animal::get(client, SAMPLE_ANIMAL_ID).await?;
    println!("{}\n", animal.pretty_print());

    let mut params = SearchParams::new();
    params.add_param("type", "Dog");
    params.add_param("coat", "Medium");
    let animals = get_animals(client, &params).await?;
    println!("{}", Table::new(animals.animals().iter().map(AnimalRow::from)));
    println!("Total matches: {}\n", animals.total_count().unwrap_or(0));

    let orgs = get_organizations(client).await?;
    println!(
        "{}",
        Table::new(orgs.organizations().iter().map(OrganizationRow::from))
    );
    println!("Total organizations: {}\n", orgs.total_count().unwrap_or(0));

    let org = Organization::get(client, SAMPLE_ORGANIZATION_ID).await?;
    println!("{}", org.pretty_print());

    Ok(())
}

// Table row types

fn or_na(value: Option<&str>) -> String {
    value.unwrap_or("N/A").to_string()
}

#[derive(Tabled)]
struct TypeRow {
    name: String,
    colors: String,
    link: String,
}

impl From<&AnimalType> for TypeRow {
    fn from(t: &AnimalType) -> Self {
        Self {
            name: or_na(t.name.as_deref()),
            colors: t.colors.as_ref().map(|c| c.join(", ")).unwrap_or_default(),
            link: or_na(t.self_href()),
        }
    }
}

#[derive(Tabled)]
struct AnimalRow {
    id: String,
    name: String,
    species: String,
    photo: String,
}

impl From<&Animal> for AnimalRow {
    fn from(a: &Animal) -> Self {
        Self {
            id: a.id.map(|id| id.to_string()).unwrap_or_default(),
            name: or_na(a.name.as_deref()),
            species: or_na(a.species.as_deref()),
            photo: a
                .medium_photos()
                .next()
                .unwrap_or("No medium photo available")
                .to_string(),
        }
    }
}

#[derive(Tabled)]
struct OrganizationRow {
    id: String,
    name: String,
    location: String,
}

impl From<&Organization> for OrganizationRow {
    fn from(o: &Organization) -> Self {
        Self {
            id: or_na(o.id.as_deref()),
            name: or_na(o.name.as_deref()),
            location: o
                .address
                .as_ref()
                .and_then(|a| a.locality())
                .unwrap_or_default(),
        }
    }
}
