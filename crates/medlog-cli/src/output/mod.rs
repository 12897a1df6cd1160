use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table::TableOptions::from_env()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options,
        )),
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    // `id` leads, the rest is alphabetical.
    headers.sort_by(|a, b| (a != "id", a).cmp(&(b != "id", b)));

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{render, render_table, table::TableOptions};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        id: &'static str,
        display_name: Option<&'static str>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Row {
            name: "baria-ddz",
            id: "s-1",
            display_name: None,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "s-1");
        assert!(parsed["display_name"].is_null());
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = vec!["a", "b"];
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, r#"["a","b"]"#);
    }

    #[test]
    fn array_table_puts_id_first() {
        let rows = vec![
            Row {
                name: "baria-ddz",
                id: "s-1",
                display_name: Some("BARIA"),
            },
            Row {
                name: "plis",
                id: "s-2",
                display_name: None,
            },
        ];
        let out = render_table(&rows, TableOptions::default()).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id    display_name  name");
        assert_eq!(lines[2], "s-1   BARIA         baria-ddz");
        assert_eq!(lines[3], "s-2   -             plis");
    }

    #[test]
    fn object_table_lists_keys() {
        let value = Row {
            name: "plis",
            id: "s-2",
            display_name: None,
        };
        let out = render_table(&value, TableOptions::default()).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("name          plis"));
    }

    #[test]
    fn empty_list_has_placeholder() {
        let rows: Vec<Row> = Vec::new();
        let out = render_table(&rows, TableOptions::default()).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
