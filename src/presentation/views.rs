use askama::{Error as AskamaError, Template};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(public_message: &'static str, error: AskamaError) -> Self {
        Self {
            public_message,
            error,
        }
    }
}

/// `source` names the view in the failure event.
pub fn render_template<T: Template>(
    template: &T,
    source: &'static str,
) -> Result<String, TemplateRenderError> {
    template.render().map_err(|err| {
        warn!(source, error = %err, "template rendering failed");
        TemplateRenderError::new("Template rendering failed", err)
    })
}

/// One decimal place, as shown for metres and kilograms.
pub(crate) fn format_measure(value: f64, unit: &str) -> String {
    format!("{value:.1} {unit}")
}
