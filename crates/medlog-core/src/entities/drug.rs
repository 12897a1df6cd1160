use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::FieldBucket;

/// One page of `GET /drug/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DrugSearchPage {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub items: Vec<DrugSearchHit>,
}

/// A single search hit. The drug itself is kept as raw JSON because its
/// attribute set is defined at runtime by the field definitions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DrugSearchHit {
    pub drug_id: String,
    #[serde(default)]
    pub relevance_score: f64,
    pub item: Value,
}

impl DrugSearchHit {
    /// Render the value of `key` in `bucket` for display.
    ///
    /// Reference values show their `display` text; multi-valued attributes
    /// are joined with `", "`.
    #[must_use]
    pub fn value(&self, bucket: FieldBucket, key: &str) -> Option<String> {
        let raw = self.item.get(bucket.as_str())?.get(key)?;
        render(raw)
    }

    /// Pharmazentralnummer from the drug's national codes, if present.
    #[must_use]
    pub fn pzn(&self) -> Option<String> {
        let codes = self.item.get("codes")?;
        codes.get("PZN").and_then(render)
    }
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get("display")
            .or_else(|| map.get("value"))
            .and_then(render),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(render).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
    }
}
