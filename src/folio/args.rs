use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
#[command(about = "Blog content over GraphQL: authors, posts, categories and tags", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to folio.toml in the OS config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the data file
    #[arg(long, global = true, env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use a throwaway in-memory store, seeded before `serve` and `query`
    #[arg(long, global = true)]
    pub memory: bool,

    /// Log filter, e.g. "info" or "folio=debug"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Populate the sample data before serving
        #[arg(long)]
        seed: bool,

        /// Address to bind, overrides server.bind
        #[arg(long)]
        bind: Option<String>,
    },

    /// Populate the store with the sample data set
    Seed,

    /// Execute one GraphQL request and print the JSON response
    #[command(alias = "q")]
    Query {
        /// GraphQL document, e.g. '{ posts { slug } }'
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },
}
