use crate::domain::model::Category;
use crate::infrastructure::schema_validator::validate_nav_payload;
use anyhow::{anyhow, Result};

/// Checks the category invariants, then the serialized payload against the
/// page schema.
pub fn validate_categories(categories: &[Category]) -> Result<()> {
    for (ci, category) in categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            return Err(anyhow!("category #{ci} has an empty name"));
        }
        if category.links.is_empty() {
            return Err(anyhow!("category {:?} has no links", category.name));
        }
        for (li, link) in category.links.iter().enumerate() {
            if link.url.is_empty() {
                return Err(anyhow!(
                    "link #{li} in category {:?} has no url",
                    category.name
                ));
            }
            if link.title.is_empty() {
                return Err(anyhow!(
                    "link #{li} in category {:?} has no title",
                    category.name
                ));
            }
        }
    }

    let payload = serde_json::to_value(categories)?;
    validate_nav_payload(&payload)
}
