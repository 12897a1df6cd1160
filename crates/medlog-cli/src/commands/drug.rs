use medlog_core::entities::DrugSearchPage;
use medlog_core::enums::FieldPurpose;
use medlog_core::field_def::CategorizedFields;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::{DrugCommands, DrugFieldsArgs, DrugSearchArgs, PurposeArg};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct FieldRow<'a> {
    bucket: &'static str,
    key: &'a str,
    label: &'a str,
    value_type: &'static str,
}

/// Handle `medlog drug`.
pub async fn handle(
    action: &DrugCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DrugCommands::Search(args) => search(args, ctx, flags).await,
        DrugCommands::Fields(args) => fields(args, ctx, flags).await,
    }
}

async fn search(
    args: &DrugSearchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(args.limit, flags.limit, None);
    let page = ctx.client.search_drugs(&args.term, args.offset, limit).await?;

    if flags.format != OutputFormat::Table {
        return output(&page, flags.format);
    }

    let columns = ctx.client.field_definitions(FieldPurpose::SearchResult).await?;
    output(&search_rows(&page, &columns), flags.format)
}

/// One row per hit, with the search-result columns as cells.
fn search_rows(page: &DrugSearchPage, columns: &CategorizedFields) -> Vec<Map<String, Value>> {
    page.items
        .iter()
        .map(|hit| {
            let mut row = Map::new();
            row.insert("id".into(), Value::String(hit.drug_id.clone()));
            if let Some(pzn) = hit.pzn() {
                row.insert("pzn".into(), Value::String(pzn));
            }
            for (bucket, column) in columns.iter() {
                let cell = hit
                    .value(bucket, &column.key)
                    .map_or(Value::Null, Value::String);
                row.insert(column.label.clone(), cell);
            }
            row
        })
        .collect()
}

async fn fields(
    args: &DrugFieldsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let purpose = match args.purpose {
        PurposeArg::SearchResult => FieldPurpose::SearchResult,
        PurposeArg::DynamicForm => FieldPurpose::DynamicForm,
    };
    let categorized = ctx.client.field_definitions(purpose).await?;
    output(&field_rows(&categorized), flags.format)
}

fn field_rows(categorized: &CategorizedFields) -> Vec<FieldRow<'_>> {
    categorized
        .iter()
        .map(|(bucket, column)| FieldRow {
            bucket: bucket.as_str(),
            key: &column.key,
            label: &column.label,
            value_type: column.value_type.as_str(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use medlog_core::entities::{DrugSearchHit, DrugSearchPage};
    use medlog_core::enums::FieldValueType;
    use medlog_core::field_def::{CategorizedFields, FieldColumn};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{field_rows, search_rows};

    fn columns() -> CategorizedFields {
        CategorizedFields {
            attrs: vec![FieldColumn {
                label: "Name".into(),
                key: "name".into(),
                value_type: FieldValueType::Str,
                description: None,
            }],
            attrs_ref: vec![FieldColumn {
                label: "Darreichungsform".into(),
                key: "darreichungsform".into(),
                value_type: FieldValueType::Str,
                description: None,
            }],
            attrs_multi: Vec::new(),
            attrs_multi_ref: Vec::new(),
        }
    }

    #[test]
    fn search_rows_use_column_labels() {
        let page = DrugSearchPage {
            total_count: 1,
            offset: 0,
            count: 1,
            items: vec![DrugSearchHit {
                drug_id: "d-1".into(),
                relevance_score: 1.0,
                item: json!({
                    "attrs": {"name": "Ibuprofen 400"},
                    "attrs_ref": {"darreichungsform": {"value": "TAB", "display": "Tablette"}},
                    "codes": {"PZN": "01234567"}
                }),
            }],
        };

        let rows = search_rows(&page, &columns());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "d-1");
        assert_eq!(rows[0]["pzn"], "01234567");
        assert_eq!(rows[0]["Name"], "Ibuprofen 400");
        assert_eq!(rows[0]["Darreichungsform"], "Tablette");
    }

    #[test]
    fn field_rows_keep_bucket_order() {
        let columns = columns();
        let rows = field_rows(&columns);
        let buckets: Vec<&str> = rows.iter().map(|row| row.bucket).collect();
        assert_eq!(buckets, vec!["attrs", "attrs_ref"]);
        assert_eq!(rows[0].value_type, "STR");
    }
}
