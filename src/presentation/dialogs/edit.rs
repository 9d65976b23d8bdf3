use tracing::warn;

use crate::application::forms::EditFormInput;
use crate::application::store::CollectionStore;
use crate::domain::entities::Pokemon;
use crate::presentation::dialogs::SubmitError;

const UPDATE_FAILED: &str = "Failed to update Pokemon";

#[derive(Debug)]
pub struct EditPokemonDialog {
    target: Pokemon,
    open: bool,
    form: EditFormInput,
}

impl EditPokemonDialog {
    pub fn new(target: Pokemon) -> Self {
        let form = EditFormInput::from_pokemon(&target);
        Self {
            target,
            open: false,
            form,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opening always re-populates the form from the entity.
    pub fn open(&mut self) {
        self.form = EditFormInput::from_pokemon(&self.target);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn form(&self) -> &EditFormInput {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EditFormInput {
        &mut self.form
    }

    pub async fn submit(&mut self, store: &CollectionStore) -> Result<String, SubmitError> {
        let patch = self.form.validate()?;
        // Validation succeeded, so this is the non-empty trimmed name sent.
        let name = self.form.name.trim().to_string();

        match store.update(self.target.id, &patch).await {
            Ok(updated) => {
                self.target = updated;
                self.open = false;
                Ok(format!("{name} updated successfully!"))
            }
            Err(err) => {
                warn!(id = self.target.id, error = %err, "edit dialog submission failed");
                Err(SubmitError::remote(UPDATE_FAILED, err))
            }
        }
    }
}
