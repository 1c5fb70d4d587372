//! Pre-approved template reference.

use crate::messages::domain::{MessageResult, base::Payload, error::require};
use serde_json::Value;

/// A named template and its positional parameters.
///
/// Parameters are substituted in order, so their order is preserved exactly
/// as supplied.
///
/// # Examples
///
/// ```
/// use switchboard::messages::domain::TemplateObject;
/// use serde_json::json;
///
/// let template = TemplateObject::new("order_update", ["A-113", "tomorrow"])
///     .expect("valid template");
/// assert_eq!(
///     serde_json::Value::Object(template.to_payload()),
///     json!({"name": "order_update", "parameters": ["A-113", "tomorrow"]})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateObject {
    name: String,
    parameters: Vec<String>,
}

impl TemplateObject {
    /// Creates a template reference.
    ///
    /// # Errors
    ///
    /// Returns [`crate::messages::domain::MessageError::InvalidArgument`]
    /// when `name` is blank.
    pub fn new<I, S>(name: impl Into<String>, parameters: I) -> MessageResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            name: require("name", name)?,
            parameters: parameters.into_iter().map(Into::into).collect(),
        })
    }

    /// Returns the template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameters in substitution order.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Renders the `template` sub-object. `parameters` is omitted when empty.
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("name".to_owned(), self.name.clone().into());
        if !self.parameters.is_empty() {
            let parameters = self.parameters.iter().cloned().map(Value::String).collect();
            payload.insert("parameters".to_owned(), Value::Array(parameters));
        }
        payload
    }
}
