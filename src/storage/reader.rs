//! Database file reader with strict validation
//!
//! The file is read whole and tokenised on whitespace. Parsing produces a
//! complete list of records or an error; callers never see a partial load.
//!
//! Any of the following is `CorruptOrOversizedData`:
//! - declared length above the store capacity
//! - a missing or unparseable length, name, pin count or slew rate
//! - a name the record type refuses
//! - tokens left over after the declared records

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::errors::{StoreError, StoreResult};
use super::record::{OpAmp, PartName};

/// Reads records from the database text file
pub struct StorageReader;

impl StorageReader {
    /// Loads every record from `path`, refusing more than `capacity`.
    ///
    /// # Errors
    ///
    /// - `StoreError::FileOpenFailure` if the file cannot be opened
    /// - `StoreError::Io` if reading fails after opening
    /// - `StoreError::CorruptOrOversizedData` if the contents are invalid
    pub fn load(path: &Path, capacity: usize) -> StoreResult<Vec<OpAmp>> {
        let mut file = File::open(path).map_err(|e| StoreError::file_open(path, e))?;

        let mut text = String::new();
        file.read_to_string(&mut text).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => StoreError::corrupt("file is not valid UTF-8"),
            _ => StoreError::io(path, e),
        })?;

        Self::parse(&text, capacity)
    }

    /// Parses the database text layout.
    pub fn parse(text: &str, capacity: usize) -> StoreResult<Vec<OpAmp>> {
        let mut tokens = text.split_whitespace();

        let length_token = tokens
            .next()
            .ok_or_else(|| StoreError::corrupt("missing record count"))?;
        let length: usize = length_token
            .parse()
            .map_err(|_| StoreError::corrupt(format!("invalid record count '{}'", length_token)))?;

        if length > capacity {
            return Err(StoreError::corrupt(format!(
                "file declares {} records (capacity: {})",
                length, capacity
            )));
        }

        let mut records = Vec::with_capacity(length);
        for index in 0..length {
            records.push(Self::parse_record(&mut tokens, index)?);
        }

        if let Some(extra) = tokens.next() {
            return Err(StoreError::corrupt(format!(
                "unexpected data '{}' after {} records",
                extra, length
            )));
        }

        Ok(records)
    }

    fn parse_record<'a, I>(tokens: &mut I, index: usize) -> StoreResult<OpAmp>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut field = |what: &str| {
            tokens.next().ok_or_else(|| {
                StoreError::corrupt(format!("record {}: missing {}", index + 1, what))
            })
        };

        let name = field("name")?;
        let pins = field("pin count")?;
        let slew = field("slew rate")?;

        let name = PartName::new(name)
            .map_err(|e| StoreError::corrupt(format!("record {}: {}", index + 1, e)))?;
        let pin_count: u32 = pins.parse().map_err(|_| {
            StoreError::corrupt(format!("record {}: invalid pin count '{}'", index + 1, pins))
        })?;
        let slew_rate: f64 = slew.parse().map_err(|_| {
            StoreError::corrupt(format!("record {}: invalid slew rate '{}'", index + 1, slew))
        })?;

        Ok(OpAmp::new(name, pin_count, slew_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_written_layout() {
        let records = StorageReader::parse("2\n\n741\n8\n0.5\n\nTL072\n14\n13\n\n", 10).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_str(), "741");
        assert_eq!(records[1].pin_count, 14);
        assert_eq!(records[1].slew_rate, 13.0);
    }

    #[test]
    fn test_parse_accepts_any_whitespace() {
        let records = StorageReader::parse("1 LM358 8 0.3", 10).unwrap();
        assert_eq!(records[0].name.as_str(), "LM358");
    }

    #[test]
    fn test_parse_empty_store() {
        assert!(StorageReader::parse("0\n\n", 10).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_oversized_length() {
        let result = StorageReader::parse("11\n", 10);
        match result {
            Err(StoreError::CorruptOrOversizedData { reason }) => {
                assert!(reason.contains("11"));
            }
            other => panic!("expected corrupt data, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_missing_count() {
        assert!(matches!(
            StorageReader::parse("   \n", 10),
            Err(StoreError::CorruptOrOversizedData { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_count() {
        assert!(StorageReader::parse("-1\n", 10).is_err());
    }

    #[test]
    fn test_rejects_truncated_record() {
        let result = StorageReader::parse("2\n741\n8\n0.5\nTL072\n14\n", 10);
        match result {
            Err(StoreError::CorruptOrOversizedData { reason }) => {
                assert!(reason.contains("record 2"));
                assert!(reason.contains("slew rate"));
            }
            other => panic!("expected corrupt data, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_pin_count() {
        assert!(StorageReader::parse("1\n741\neight\n0.5\n", 10).is_err());
        assert!(StorageReader::parse("1\n741\n-8\n0.5\n", 10).is_err());
    }

    #[test]
    fn test_rejects_bad_slew_rate() {
        assert!(StorageReader::parse("1\n741\n8\nfast\n", 10).is_err());
    }

    #[test]
    fn test_rejects_long_name() {
        let text = format!("1\n{}\n8\n0.5\n", "X".repeat(20));
        assert!(matches!(
            StorageReader::parse(&text, 10),
            Err(StoreError::CorruptOrOversizedData { .. })
        ));
    }

    #[test]
    fn test_rejects_trailing_data() {
        assert!(StorageReader::parse("1\n741\n8\n0.5\nextra\n", 10).is_err());
    }
}
