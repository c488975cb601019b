use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::models::ResponseShape;

/// The part of a product-lookup response that signals success or failure.
#[derive(Deserialize)]
struct ProductEnvelope {
    status: i64,
    #[serde(default)]
    status_verbose: Option<String>,
}

/// Check the application-level status embedded in `doc` and keep the value
/// worth archiving.
///
/// The product lookup keeps the whole document; the recall listing keeps only
/// the `results` array. On failure nothing is persisted downstream.
pub fn validate(doc: Value, shape: ResponseShape) -> Result<Value, ValidationError> {
    match shape {
        ResponseShape::ProductLookup => {
            let envelope = ProductEnvelope::deserialize(&doc)
                .map_err(|_| ValidationError::MissingField("status"))?;
            if envelope.status == 0 {
                let verbose = envelope
                    .status_verbose
                    .unwrap_or_else(|| "no status_verbose in response".to_string());
                return Err(ValidationError::NotFound(verbose));
            }
            Ok(doc)
        }
        ResponseShape::RecallList => match doc {
            Value::Object(mut map) => map
                .remove("results")
                .ok_or(ValidationError::MissingField("results")),
            _ => Err(ValidationError::MissingField("results")),
        },
    }
}
