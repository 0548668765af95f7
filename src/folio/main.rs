use async_graphql::{Request, Variables};
use clap::Parser;
use colored::*;
use folio::api::BlogApi;
use folio::commands::{SeedReport, Tally};
use folio::config::FolioConfig;
use folio::error::Result;
use folio::graphql::build_schema;
use folio::store::fs::FileStore;
use folio::store::memory::InMemoryStore;
use folio::store::DataStore;
use folio::{logging, server};
use std::sync::Arc;

mod args;
use args::{Cli, Commands};

type Api = BlogApi<Box<dyn DataStore>>;

#[actix_web::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    logging::init(&config.log, cli.verbose)?;

    let mut api = BlogApi::new(open_store(&cli, &config), config.search_mode());
    if cli.memory && !matches!(cli.command, Commands::Seed) {
        api.seed()?;
    }

    match cli.command {
        Commands::Serve { seed, .. } => handle_serve(api, seed, &config).await,
        Commands::Seed => handle_seed(&mut api),
        Commands::Query { query, variables } => handle_query(api, query, variables).await,
    }
}

fn load_config(cli: &Cli) -> Result<FolioConfig> {
    let mut config = FolioConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        config.store.data_dir = Some(dir.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }
    if let Commands::Serve {
        bind: Some(bind), ..
    } = &cli.command
    {
        config.server.bind = bind.clone();
    }
    Ok(config)
}

fn open_store(cli: &Cli, config: &FolioConfig) -> Box<dyn DataStore> {
    if cli.memory {
        tracing::info!("using in-memory store");
        return Box::new(InMemoryStore::new());
    }
    let store = FileStore::new(config.data_dir());
    tracing::info!(location = %store.location(), "opened store");
    Box::new(store)
}

async fn handle_serve(mut api: Api, seed: bool, config: &FolioConfig) -> Result<()> {
    if seed {
        let report = api.seed()?;
        tracing::info!(created = report.created(), "seeded before serving");
    }
    let schema = build_schema(Arc::new(api));
    server::serve(schema, &config.server).await
}

fn handle_seed(api: &mut Api) -> Result<()> {
    let report = api.seed()?;
    print_report(&report);
    Ok(())
}

async fn handle_query(api: Api, query: String, variables: Option<String>) -> Result<()> {
    let mut request = Request::new(query);
    if let Some(raw) = variables {
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        request = request.variables(Variables::from_json(value));
    }

    let schema = build_schema(Arc::new(api));
    let response = schema.execute(request).await;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn print_report(report: &SeedReport) {
    let rows: [(&str, &Tally); 4] = [
        ("authors", &report.authors),
        ("categories", &report.categories),
        ("tags", &report.tags),
        ("posts", &report.posts),
    ];
    for (table, tally) in rows {
        println!(
            "  {:<12}{} created, {} existing",
            table,
            tally.created.to_string().green(),
            tally.existing.to_string().dimmed()
        );
    }
    if report.created() == 0 {
        println!("{}", "Seed data already present.".yellow());
    } else {
        println!("{} {} records.", "Seeded".green().bold(), report.created());
    }
}
