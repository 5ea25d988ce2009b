//! Tabular result type shared by every endpoint.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::columns::ColumnSpec;
use super::flatten::{extract_path, flatten_record};

/// An ordered result set with a uniform schema.
///
/// Every row carries exactly one value per column, in column order. Cells
/// are raw JSON values; lists the API chooses not to break up (goal type
/// codes, plus/minus player ids) ride along unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl StatsTable {
    /// Builds a table with the given schema and no rows.
    pub fn empty(columns: &[&str]) -> Self {
        StatsTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Projects records through a fixed column table.
    ///
    /// The schema is the table's column names in table order; missing source
    /// paths project to null.
    pub fn project(records: &[Value], columns: &[ColumnSpec]) -> Self {
        let schema = columns.iter().map(|c| c.name.to_string()).collect();
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|c| extract_path(record, c.source))
                    .collect()
            })
            .collect();
        StatsTable {
            columns: schema,
            rows,
        }
    }

    /// Builds a table over a fixed projection's schema from records that
    /// have already been projected (and possibly post-processed, such as
    /// team id stripping).
    pub fn from_projected(columns: &[ColumnSpec], records: &[Map<String, Value>]) -> Self {
        let schema: Vec<String> = columns.iter().map(|c| c.name.to_string()).collect();
        let rows = records
            .iter()
            .map(|record| {
                schema
                    .iter()
                    .map(|name| record.get(name).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        StatsTable {
            columns: schema,
            rows,
        }
    }

    /// Builds a table by recursively flattening each record, for endpoints
    /// whose payloads have no documented projection.
    pub fn from_flattened(records: &[Value]) -> Self {
        let flat = records
            .iter()
            .map(|record| match record.as_object() {
                Some(map) => flatten_record(map),
                None => Map::new(),
            })
            .collect();
        StatsTable::from_records(flat)
    }

    /// Builds a table from flat records.
    ///
    /// The schema is the union of every record's keys in sorted order, and
    /// rows fill keys a record lacks with null. Record order is preserved.
    pub fn from_records(records: Vec<Map<String, Value>>) -> Self {
        let mut keys = BTreeSet::new();
        for record in &records {
            for key in record.keys() {
                keys.insert(key.clone());
            }
        }
        let columns: Vec<String> = keys.into_iter().collect();
        let rows = records
            .into_iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|key| record.get(key).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        StatsTable { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell lookup by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Converts the table to a JSON array of record objects.
    pub fn to_json(&self) -> Value {
        let records = self
            .rows
            .iter()
            .map(|row| {
                let mut record = Map::with_capacity(self.columns.len());
                for (column, value) in self.columns.iter().zip(row) {
                    record.insert(column.clone(), value.clone());
                }
                Value::Object(record)
            })
            .collect();
        Value::Array(records)
    }

    /// Pretty-printed JSON rendering of [`StatsTable::to_json`].
    pub fn to_json_string_pretty(&self) -> String {
        format!("{:#}", self.to_json())
    }

    /// Renders the table as CSV with a header row.
    ///
    /// Null cells are empty, strings are written verbatim, and structured
    /// cells are embedded as compact JSON. Fields containing the separator,
    /// quotes or newlines are quoted with doubled-quote escaping.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        write_csv_row(&mut out, self.columns.iter().map(|c| c.to_string()));
        for row in &self.rows {
            write_csv_row(&mut out, row.iter().map(csv_cell));
        }
        out
    }
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_csv_row<I: Iterator<Item = String>>(out: &mut String, cells: I) {
    let mut first = true;
    for cell in cells {
        if !first {
            out.push(',');
        } else {
            first = false;
        }
        if needs_quotes(&cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(&cell);
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_COLUMNS: &[ColumnSpec] = &[
        ColumnSpec {
            source: "playerId",
            name: "playerId",
        },
        ColumnSpec {
            source: "team.id",
            name: "teamId",
        },
        ColumnSpec {
            source: "goals",
            name: "goals",
        },
    ];

    #[test]
    fn test_project_keeps_table_order_and_fills_nulls() {
        let records = vec![
            json!({ "playerId": 1, "team": { "id": "hifk" }, "goals": 5 }),
            json!({ "playerId": 2 }),
        ];
        let table = StatsTable::project(&records, TEST_COLUMNS);

        assert_eq!(table.columns(), ["playerId", "teamId", "goals"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, "teamId"), Some(&json!("hifk")));
        assert_eq!(table.cell(1, "teamId"), Some(&Value::Null));
        assert_eq!(table.cell(1, "goals"), Some(&Value::Null));
    }

    #[test]
    fn test_from_records_unions_keys_in_sorted_order() {
        let first = json!({ "b": 1, "a": 2 });
        let second = json!({ "c": 3 });
        let table = StatsTable::from_records(vec![
            first.as_object().unwrap().clone(),
            second.as_object().unwrap().clone(),
        ]);

        assert_eq!(table.columns(), ["a", "b", "c"]);
        assert_eq!(table.rows()[0], vec![json!(2), json!(1), Value::Null]);
        assert_eq!(table.rows()[1], vec![Value::Null, Value::Null, json!(3)]);
    }

    #[test]
    fn test_from_projected_keeps_schema_and_overrides() {
        let record = json!({ "playerId": 1, "team": { "id": "hifk:2024" }, "goals": 5 });
        let mut projected = crate::data_fetcher::processors::parse_record(&record, TEST_COLUMNS);
        projected.insert("teamId".to_string(), json!("hifk"));

        let table = StatsTable::from_projected(TEST_COLUMNS, &[projected]);
        assert_eq!(table.columns(), ["playerId", "teamId", "goals"]);
        assert_eq!(table.cell(0, "teamId"), Some(&json!("hifk")));
    }

    #[test]
    fn test_from_flattened_joins_nested_keys() {
        let records = vec![json!({ "id": 1, "iceRink": { "id": 9 } })];
        let table = StatsTable::from_flattened(&records);
        assert_eq!(table.columns(), ["iceRinkId", "id"]);
        assert_eq!(table.cell(0, "iceRinkId"), Some(&json!(9)));
        assert_eq!(table.cell(0, "id"), Some(&json!(1)));
    }

    #[test]
    fn test_empty_table() {
        let table = StatsTable::empty(&["season"]);
        assert!(table.is_empty());
        assert_eq!(table.columns(), ["season"]);
        assert_eq!(table.to_csv(), "season\n");
        assert_eq!(table.to_json(), json!([]));
    }

    #[test]
    fn test_to_json_produces_record_objects() {
        let records = vec![json!({ "playerId": 7, "team": { "id": "tps" }, "goals": 2 })];
        let table = StatsTable::project(&records, TEST_COLUMNS);
        assert_eq!(
            table.to_json(),
            json!([{ "playerId": 7, "teamId": "tps", "goals": 2 }])
        );
    }

    #[test]
    fn test_to_csv_escapes_and_serializes_cells() {
        let record = json!({
            "playerId": 9,
            "team": { "id": "saipa, lappeenranta" },
            "goals": ["YV", "TM"]
        });
        let table = StatsTable::project(&[record], TEST_COLUMNS);
        let csv = table.to_csv();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("playerId,teamId,goals"));
        // Comma forces quoting; the array cell is embedded as JSON with its
        // quotes doubled.
        assert_eq!(
            lines.next(),
            Some(r#"9,"saipa, lappeenranta","[""YV"",""TM""]""#)
        );
    }

    #[test]
    fn test_to_csv_null_cells_are_empty() {
        let table = StatsTable::project(&[json!({ "playerId": 3 })], TEST_COLUMNS);
        assert_eq!(table.to_csv().lines().nth(1), Some("3,,"));
    }

    #[test]
    fn test_cell_out_of_range() {
        let table = StatsTable::project(&[json!({ "playerId": 3 })], TEST_COLUMNS);
        assert_eq!(table.cell(5, "playerId"), None);
        assert_eq!(table.cell(0, "missing"), None);
    }
}
