use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static NAV_PAYLOAD_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/nav_payload_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid nav payload schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile nav payload schema")
});

/// Validate the serialized category list that gets embedded in the page
pub fn validate_nav_payload(payload: &Value) -> Result<()> {
    match NAV_PAYLOAD_SCHEMA.validate(payload) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Nav payload validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}
