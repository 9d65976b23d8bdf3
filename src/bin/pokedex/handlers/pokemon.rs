#![deny(clippy::all, clippy::pedantic)]

use std::fmt::Write as _;
use std::io::IsTerminal;

use pokedex::application::forms::{CreateFormInput, FieldValue};
use pokedex::domain::entities::PokemonId;
use pokedex::presentation::LOADING_TEXT;
use pokedex::presentation::detail::DetailView;
use pokedex::presentation::dialogs::{
    AddPokemonDialog, DeleteConfirmationDialog, EditPokemonDialog,
};
use pokedex::presentation::list::ListView;

use crate::args::{AddArgs, Commands, EditArgs};
use crate::client::{CliError, Ctx};
use crate::print::render_json;

/// Run one command and return what should go to stdout.
pub async fn handle(ctx: &Ctx, cmd: Commands) -> Result<String, CliError> {
    match cmd {
        Commands::List { search, json } => list(ctx, search.as_deref().unwrap_or(""), json).await,
        Commands::Show { id, json } => show(ctx, id, json).await,
        Commands::Add(args) => add(ctx, args).await,
        Commands::Edit(args) => edit(ctx, args).await,
        Commands::Delete { id, yes } => delete(ctx, id, yes).await,
    }
}

async fn list(ctx: &Ctx, search: &str, json: bool) -> Result<String, CliError> {
    if std::io::stderr().is_terminal() {
        eprintln!("{LOADING_TEXT}");
    }
    ctx.store.initialize().await;
    if let Some(err) = ctx.store.last_error() {
        return Err(CliError::Load(err));
    }

    let view = ListView::new(&ctx.store.collection(), search);
    if json {
        render_json(&view.entries())
    } else {
        Ok(view.render()?)
    }
}

async fn show(ctx: &Ctx, id: PokemonId, json: bool) -> Result<String, CliError> {
    let view = DetailView::load(&ctx.store, id).await;
    let Some(detail) = view.pokemon() else {
        eprint!("{}", view.render()?);
        return Err(CliError::NotFound(id));
    };
    if json {
        render_json(detail)
    } else {
        Ok(view.render()?)
    }
}

async fn add(ctx: &Ctx, args: AddArgs) -> Result<String, CliError> {
    let mut dialog = AddPokemonDialog::new();
    dialog.open();
    *dialog.form_mut() = create_form(args);

    let message = dialog.submit(&ctx.store).await?;
    Ok(format!("{message}\n"))
}

async fn edit(ctx: &Ctx, args: EditArgs) -> Result<String, CliError> {
    let current = ctx.store.get(args.id).await?;
    let mut dialog = EditPokemonDialog::new(current);
    dialog.open();

    let form = dialog.form_mut();
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(types) = args.types {
        form.types = types;
    }
    if let Some(abilities) = args.abilities {
        form.abilities = abilities;
    }
    if let Some(height) = args.height {
        form.height = FieldValue::Text(height);
    }
    if let Some(weight) = args.weight {
        form.weight = FieldValue::Text(weight);
    }
    if let Some(image_url) = args.image_url {
        form.image_url = image_url;
    }

    let message = dialog.submit(&ctx.store).await?;
    Ok(format!("{message}\n"))
}

async fn delete(ctx: &Ctx, id: PokemonId, yes: bool) -> Result<String, CliError> {
    let target = ctx.store.get(id).await?;
    let mut dialog = DeleteConfirmationDialog::new(target);
    dialog.open();

    let mut out = format!("{}\n", dialog.prompt());
    if !yes {
        out.push_str("Nothing deleted; re-run with --yes to confirm.\n");
        dialog.close();
        return Ok(out);
    }

    let message = dialog.confirm(&ctx.store).await?;
    let _ = writeln!(out, "{message}");
    Ok(out)
}

pub(crate) fn create_form(args: AddArgs) -> CreateFormInput {
    CreateFormInput {
        name: args.name,
        types: args.types.unwrap_or_default(),
        abilities: args.abilities.unwrap_or_default(),
        height: args.height.map_or(FieldValue::Absent, FieldValue::Text),
        weight: args.weight.map_or(FieldValue::Absent, FieldValue::Text),
        image_url: args.image_url.unwrap_or_default(),
        use_poke_api: args.use_poke_api,
    }
}
