//! Modal dialogs for creating, editing and deleting entries.
//!
//! A dialog owns its form state and open flag. `submit`/`confirm` return
//! the user-facing outcome message; the host decides how to show it.

mod add;
mod delete;
mod edit;

pub use add::AddPokemonDialog;
pub use delete::DeleteConfirmationDialog;
pub use edit::EditPokemonDialog;

use thiserror::Error;

use crate::application::forms::ValidationErrors;
use crate::application::gateway::GatewayError;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The form was rejected locally; nothing was sent.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("{message}")]
    Remote {
        message: String,
        #[source]
        source: GatewayError,
    },
}

impl SubmitError {
    pub(crate) fn remote(message: impl Into<String>, source: GatewayError) -> Self {
        Self::Remote {
            message: message.into(),
            source,
        }
    }

    /// Text to show the user.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.first_message(),
            Self::Remote { message, .. } => message.clone(),
        }
    }
}
