use super::error::IoError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ConcentrationRecord {
    label: String,
    concentration: f64,
}

/// Reads a `label,concentration` CSV table (mol/m³) keyed by species label.
pub fn load_concentrations(path: &Path) -> Result<HashMap<String, f64>, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| IoError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

    let mut concentrations = HashMap::new();
    for result in reader.deserialize::<ConcentrationRecord>() {
        let record = result.map_err(|e| IoError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        if concentrations
            .insert(record.label.clone(), record.concentration)
            .is_some()
        {
            return Err(IoError::DuplicateConcentration {
                path: path.to_string_lossy().to_string(),
                label: record.label,
            });
        }
    }
    Ok(concentrations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_csv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("concentrations.csv");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", contents).unwrap();
        (dir, path)
    }

    #[test]
    fn load_concentrations_reads_all_rows() {
        let (_dir, path) = write_csv("label,concentration\nA,1.5\nB, 0.25\n");
        let concentrations = load_concentrations(&path).unwrap();
        assert_eq!(concentrations.len(), 2);
        assert_eq!(concentrations["A"], 1.5);
        assert_eq!(concentrations["B"], 0.25);
    }

    #[test]
    fn load_concentrations_rejects_duplicate_labels() {
        let (_dir, path) = write_csv("label,concentration\nA,1.0\nA,2.0\n");
        let result = load_concentrations(&path);
        assert!(matches!(
            result,
            Err(IoError::DuplicateConcentration { label, .. }) if label == "A"
        ));
    }

    #[test]
    fn load_concentrations_rejects_non_numeric_values() {
        let (_dir, path) = write_csv("label,concentration\nA,lots\n");
        assert!(matches!(load_concentrations(&path), Err(IoError::Csv { .. })));
    }

    #[test]
    fn load_concentrations_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_concentrations(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(IoError::Csv { .. })));
    }
}
