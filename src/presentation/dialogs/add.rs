use tracing::warn;

use crate::application::forms::CreateFormInput;
use crate::application::gateway::RemoteErrorKind;
use crate::application::store::CollectionStore;
use crate::presentation::dialogs::SubmitError;

#[derive(Debug, Default)]
pub struct AddPokemonDialog {
    open: bool,
    form: CreateFormInput,
}

impl AddPokemonDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Dismiss without submitting; entered values are kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn form(&self) -> &CreateFormInput {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CreateFormInput {
        &mut self.form
    }

    /// On success the dialog closes and the form resets.
    pub async fn submit(&mut self, store: &CollectionStore) -> Result<String, SubmitError> {
        let payload = self.form.validate()?;
        let name = payload.name().to_string();

        match store.add(&payload).await {
            Ok(_) => {
                self.open = false;
                self.form = CreateFormInput::default();
                Ok(format!("{name} added successfully!"))
            }
            Err(err) => {
                warn!(%name, error = %err, "add dialog submission failed");
                let message = match (err.status(), err.kind()) {
                    (None, _) => "An unexpected error occurred".to_string(),
                    (Some(_), RemoteErrorKind::NotFound) => format!("{name} doesn't exist!"),
                    (Some(_), RemoteErrorKind::Conflict) => {
                        "Failed to add Pokemon, Pokemon already exists!".to_string()
                    }
                    (Some(_), RemoteErrorKind::Other) => "Failed to add Pokemon".to_string(),
                };
                Err(SubmitError::remote(message, err))
            }
        }
    }
}
