//! Drug field definitions and the purpose-based categorizer.
//!
//! `GET /drug/field_def` returns one list of field definitions per attribute
//! bucket. Views only need the subset relevant to them: the search result
//! table shows fields flagged `show_in_search_results`, the custom-drug form
//! shows fields flagged `used_for_custom_drug`.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{FieldBucket, FieldPurpose, FieldValueType};

/// Metadata of one drug attribute.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldDefinition {
    pub field_name: String,
    #[serde(alias = "field_display")]
    pub field_name_display: String,
    #[serde(default, alias = "field_desc")]
    pub desc: Option<String>,
    #[serde(default, alias = "type")]
    pub value_type: FieldValueType,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub is_large_reference_list: bool,
    #[serde(default)]
    pub show_in_search_results: bool,
    #[serde(default)]
    pub used_for_custom_drug: bool,
}

impl FieldDefinition {
    /// Whether this field is selected for `purpose`.
    #[must_use]
    pub const fn is_used_for(&self, purpose: FieldPurpose) -> bool {
        match purpose {
            FieldPurpose::SearchResult => self.show_in_search_results,
            FieldPurpose::DynamicForm => self.used_for_custom_drug,
        }
    }
}

/// A field-definition document keyed by bucket.
///
/// Keys that are not one of the four buckets are ignored and a missing
/// bucket reads as empty.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldDefDocument {
    buckets: BTreeMap<FieldBucket, Vec<FieldDefinition>>,
}

impl FieldDefDocument {
    #[must_use]
    pub fn new(buckets: BTreeMap<FieldBucket, Vec<FieldDefinition>>) -> Self {
        Self { buckets }
    }

    /// Entries of `bucket`, empty if the bucket was absent.
    #[must_use]
    pub fn bucket(&self, bucket: FieldBucket) -> &[FieldDefinition] {
        self.buckets.get(&bucket).map_or(&[], Vec::as_slice)
    }
}

impl<'de> Deserialize<'de> for FieldDefDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut buckets = BTreeMap::new();
        for bucket in FieldBucket::ALL {
            let Some(value) = raw.remove(bucket.as_str()) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            let entries: Vec<FieldDefinition> = serde_json::from_value(value).map_err(|e| {
                serde::de::Error::custom(format!("bucket '{}': {e}", bucket.as_str()))
            })?;
            buckets.insert(bucket, entries);
        }
        Ok(Self { buckets })
    }
}

/// The projection of a field definition used by views.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldColumn {
    /// Display label.
    pub label: String,
    /// Backend field key.
    pub key: String,
    pub value_type: FieldValueType,
    pub description: Option<String>,
}

impl From<&FieldDefinition> for FieldColumn {
    fn from(def: &FieldDefinition) -> Self {
        Self {
            label: def.field_name_display.clone(),
            key: def.field_name.clone(),
            value_type: def.value_type,
            description: def.desc.clone(),
        }
    }
}

/// Fields of all four buckets after filtering for one purpose.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategorizedFields {
    pub attrs: Vec<FieldColumn>,
    pub attrs_ref: Vec<FieldColumn>,
    pub attrs_multi: Vec<FieldColumn>,
    pub attrs_multi_ref: Vec<FieldColumn>,
}

impl CategorizedFields {
    #[must_use]
    pub fn bucket(&self, bucket: FieldBucket) -> &[FieldColumn] {
        match bucket {
            FieldBucket::Attrs => &self.attrs,
            FieldBucket::AttrsRef => &self.attrs_ref,
            FieldBucket::AttrsMulti => &self.attrs_multi,
            FieldBucket::AttrsMultiRef => &self.attrs_multi_ref,
        }
    }

    fn bucket_mut(&mut self, bucket: FieldBucket) -> &mut Vec<FieldColumn> {
        match bucket {
            FieldBucket::Attrs => &mut self.attrs,
            FieldBucket::AttrsRef => &mut self.attrs_ref,
            FieldBucket::AttrsMulti => &mut self.attrs_multi,
            FieldBucket::AttrsMultiRef => &mut self.attrs_multi_ref,
        }
    }

    /// All columns in bucket order, paired with their bucket.
    pub fn iter(&self) -> impl Iterator<Item = (FieldBucket, &FieldColumn)> {
        FieldBucket::ALL
            .into_iter()
            .flat_map(move |bucket| self.bucket(bucket).iter().map(move |col| (bucket, col)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        FieldBucket::ALL.iter().map(|b| self.bucket(*b).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Select the fields of `document` relevant to `purpose`, per bucket.
#[must_use]
pub fn categorize(document: &FieldDefDocument, purpose: FieldPurpose) -> CategorizedFields {
    let mut out = CategorizedFields::default();
    for bucket in FieldBucket::ALL {
        out.bucket_mut(bucket).extend(
            document
                .bucket(bucket)
                .iter()
                .filter(|def| def.is_used_for(purpose))
                .map(FieldColumn::from),
        );
    }
    out
}
