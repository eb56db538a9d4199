//! Decoder for a single table stream.

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::convert::convert;
use super::error::{Result, TableError};
use super::reader::ByteReader;
use super::schema;
use super::MAGIC;
use crate::model::{Row, Value};

/// Upper bound on up-front allocation driven by header counts
const MAX_PREALLOCATED: usize = 4096;

/// Decoder settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderOptions {
    /// Write every decoded row to the debug log under a `TABLE: <name>` heading
    pub dump_rows: bool,
}

/// Rows of one table, sharing one column schema
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names in stream order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Reads one table from a stream positioned at the start of its payload.
///
/// A reader is consumed by [`TableReader::read`]; to retry, build a new one
/// over a fresh stream.
pub struct TableReader<R> {
    name: String,
    reader: ByteReader<R>,
    options: ReaderOptions,
}

impl<R: Read> TableReader<R> {
    pub fn new(name: impl Into<String>, source: R) -> Self {
        Self::with_options(name, source, ReaderOptions::default())
    }

    pub fn with_options(name: impl Into<String>, source: R, options: ReaderOptions) -> Self {
        Self {
            name: name.into(),
            reader: ByteReader::new(source),
            options,
        }
    }

    /// Decode the whole table.
    ///
    /// Layout: `magic:i32 columnCount:i32 pstring[columnCount] rowCount:i32`
    /// followed by `rowCount * columnCount` pstring cells in row-major order.
    pub fn read(mut self) -> Result<Table> {
        let magic = self.reader.read_int32()?;
        if magic != MAGIC {
            return Err(TableError::format(format!(
                "unexpected magic number {} in table {}",
                magic, self.name
            )));
        }

        let columns = self.read_columns()?;
        let row_count = self.read_count("row")?;

        log::debug!(
            "Reading table {} ({} columns, {} rows)",
            self.name,
            columns.len(),
            row_count
        );

        let mut rows = Vec::with_capacity(row_count.min(MAX_PREALLOCATED));
        for _ in 0..row_count {
            rows.push(self.read_row(&columns)?);
        }

        let table = Table {
            name: self.name,
            columns,
            rows,
        };

        if self.options.dump_rows {
            dump(&table);
        }

        log::debug!(
            "Finished table {} after {} bytes",
            table.name,
            self.reader.position()
        );

        Ok(table)
    }

    fn read_columns(&mut self) -> Result<Vec<String>> {
        let column_count = self.read_count("column")?;
        let mut columns = Vec::with_capacity(column_count.min(MAX_PREALLOCATED));

        for index in 0..column_count {
            match self.reader.read_string()? {
                Some(name) => {
                    if !schema::is_registered(&name) {
                        log::debug!(
                            "Column {} of table {} is untyped, reading as text",
                            name,
                            self.name
                        );
                    }
                    columns.push(name)
                }
                None => {
                    return Err(TableError::format(format!(
                        "column {} of table {} has no name",
                        index, self.name
                    )))
                }
            }
        }

        Ok(columns)
    }

    fn read_count(&mut self, what: &str) -> Result<usize> {
        let count = self.reader.read_int32()?;
        usize::try_from(count).map_err(|_| {
            TableError::format(format!(
                "negative {} count {} in table {}",
                what, count, self.name
            ))
        })
    }

    fn read_row(&mut self, columns: &[String]) -> Result<Row> {
        let mut values: Vec<(&str, Value)> = Vec::with_capacity(columns.len());

        for column in columns {
            let Some(token) = self.reader.read_string()? else {
                continue;
            };

            if let Some(value) = convert(column, schema::lookup(column), &token)? {
                values.push((column.as_str(), value));
            }
        }

        Ok(values.into_iter().collect())
    }
}

/// Decode a table held entirely in memory
pub fn read_table(name: &str, data: &[u8]) -> Result<Table> {
    TableReader::new(name, data).read()
}

fn dump(table: &Table) {
    log::debug!("TABLE: {}", table.name);
    for row in &table.rows {
        log::debug!("{}", row);
    }
}
