// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! CSV export of a generated sequence.
//!
//! Format: a `index,value` header, then one `i,v` row per value with `v`
//! printed to 12 decimals.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{error::Result, strings};

/// Write `sequence` as CSV to any writer.
pub fn write_csv(writer: &mut impl Write, sequence: &[f64]) -> Result<()> {
    writeln!(writer, "{}", strings::CSV_HEADER)?;
    for (i, v) in sequence.iter().enumerate() {
        writeln!(writer, "{},{:.12}", i, v)?;
    }
    Ok(())
}

/// Write `sequence` as CSV to the supplied file path.
pub fn save_csv(file_path: impl AsRef<Path>, sequence: &[f64]) -> Result<()> {
    let path = file_path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, sequence)?;
    writer.flush()?;
    info!("wrote {} values to {}", sequence.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn csv_rows() {
        let mut out = Vec::new();
        write_csv(&mut out, &[0.5, 0.1757413032464683]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "index,value\n0,0.500000000000\n1,0.175741303246\n"
        );
    }

    #[test]
    fn empty_sequence_is_header_only() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(out, b"index,value\n");
    }

    #[test]
    fn save_to_file() {
        let path =
            std::env::temp_dir().join(format!("lcglab-export-{}.csv", std::process::id()));
        save_csv(&path, &[0.25]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text, "index,value\n0,0.250000000000\n");
    }

    #[test]
    fn missing_directory_is_io_error() {
        let path = std::env::temp_dir()
            .join("lcglab-no-such-dir")
            .join("nested")
            .join("out.csv");
        assert!(matches!(
            save_csv(&path, &[0.25]),
            Err(crate::error::LcgError::Io(_))
        ));
    }
}
