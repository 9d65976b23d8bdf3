use tracing::warn;

use crate::application::store::CollectionStore;
use crate::domain::entities::Pokemon;
use crate::presentation::dialogs::SubmitError;

#[derive(Debug)]
pub struct DeleteConfirmationDialog {
    target: Pokemon,
    open: bool,
    is_deleting: bool,
}

impl DeleteConfirmationDialog {
    pub fn new(target: Pokemon) -> Self {
        Self {
            target,
            open: false,
            is_deleting: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Ignored while a deletion is in flight.
    pub fn close(&mut self) {
        if !self.is_deleting {
            self.open = false;
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete {} from your collection? This action cannot be undone.",
            self.target.name
        )
    }

    pub async fn confirm(&mut self, store: &CollectionStore) -> Result<String, SubmitError> {
        self.is_deleting = true;
        let outcome = store.remove(self.target.id).await;
        self.is_deleting = false;

        let name = &self.target.name;
        match outcome {
            Ok(()) => {
                self.open = false;
                Ok(format!("{name} was successfully removed from your collection"))
            }
            Err(err) => {
                warn!(id = self.target.id, error = %err, "delete confirmation failed");
                Err(SubmitError::remote(
                    format!("Failed to delete {name}. Please try again."),
                    err,
                ))
            }
        }
    }
}
