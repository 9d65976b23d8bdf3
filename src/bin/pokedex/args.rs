//! Command-line surface for `pokedex`.

#![deny(clippy::all, clippy::pedantic)]

use clap::{Args, Parser, Subcommand};
use pokedex::config::GlobalArgs;
use pokedex::domain::entities::PokemonId;

#[derive(Parser, Debug)]
#[command(name = "pokedex", version, about = "Manage a Pokémon collection from the terminal", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the collection, optionally filtered by name or type
    List {
        /// Case-insensitive match against names and types
        #[arg(long)]
        search: Option<String>,
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single entry
    Show {
        id: PokemonId,
        #[arg(long)]
        json: bool,
    },
    /// Add an entry, either in full or by name lookup
    Add(AddArgs),
    /// Edit an existing entry; omitted flags keep the stored value
    Edit(EditArgs),
    /// Delete an entry
    Delete {
        id: PokemonId,
        /// Confirm the deletion; without it only the prompt is shown
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    /// Send only the name and let the backend fill in the rest
    #[arg(long)]
    pub use_poke_api: bool,
    /// Comma-separated, e.g. "grass,poison"
    #[arg(long)]
    pub types: Option<String>,
    /// Comma-separated
    #[arg(long)]
    pub abilities: Option<String>,
    /// Decimetres
    #[arg(long)]
    pub height: Option<String>,
    /// Hectograms
    #[arg(long)]
    pub weight: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    pub id: PokemonId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub types: Option<String>,
    #[arg(long)]
    pub abilities: Option<String>,
    #[arg(long)]
    pub height: Option<String>,
    #[arg(long)]
    pub weight: Option<String>,
    /// Pass an empty string to clear the image
    #[arg(long)]
    pub image_url: Option<String>,
}
