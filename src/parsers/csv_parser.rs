use super::parser::{Parser, ReadError, Records};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

/// Reads header-led CSV files into typed records.
pub struct CsvParser {
    required_headers: &'static [&'static str],
}

/// Trims and lowercases the header names and drops repeated columns.
///
/// Returns the cleaned header row and the indices of the columns that are kept.
fn preprocess_headers(headers: &StringRecord) -> (StringRecord, HashSet<usize>) {
    let mut unique_headers = StringRecord::new();
    let mut seen = HashSet::new();
    let mut indices = HashSet::new();

    for (index, header) in headers.iter().enumerate() {
        let normalized = header.trim().to_lowercase();
        if !seen.contains(&normalized) {
            unique_headers.push_field(&normalized);
            seen.insert(normalized);
            indices.insert(index);
        }
    }

    (unique_headers, indices)
}

fn filter_record(record: &StringRecord, indices: &HashSet<usize>) -> StringRecord {
    let mut filtered = StringRecord::new();
    for (index, field) in record.iter().enumerate() {
        if indices.contains(&index) {
            filtered.push_field(field);
        }
    }
    filtered
}

impl CsvParser {
    pub fn new(required_headers: &'static [&'static str]) -> Self {
        CsvParser { required_headers }
    }

    /// Parses CSV from any reader. The first row must be the header.
    ///
    /// Only header names are trimmed; field values reach the record type untouched.
    /// Fails up front if the header cannot be read or lacks a required column.
    /// Errors on individual rows are yielded by the iterator.
    pub fn parse_reader<T, R>(&self, reader: R) -> Result<Records<T>, ReadError>
    where
        T: DeserializeOwned + 'static,
        R: Read + 'static,
    {
        let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);

        let headers = rdr.headers()?.clone();
        let (unique_headers, indices) = preprocess_headers(&headers);
        debug!("CSV headers: {:?}", unique_headers);

        for required in self.required_headers {
            if !unique_headers.iter().any(|header| header == *required) {
                return Err(ReadError::MissingColumn(required.to_string()));
            }
        }

        rdr.set_headers(unique_headers.clone());

        let iter = rdr.into_records().map(move |result| {
            result.map_err(ReadError::Csv).and_then(|record| {
                let filtered_record = filter_record(&record, &indices);

                filtered_record
                    .deserialize(Some(&unique_headers))
                    .map_err(ReadError::Csv)
            })
        });

        Ok(Box::new(iter))
    }
}

impl Parser for CsvParser {
    fn parse<T>(&self, file_path: &str) -> Result<Records<T>, ReadError>
    where
        T: DeserializeOwned + 'static,
    {
        debug!("Opening CSV file: {:?}", file_path);
        let file = File::open(file_path).map_err(ReadError::Io)?;
        self.parse_reader(file)
    }
}
