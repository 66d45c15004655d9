//! Result-sequence output.
//!
//! Destination naming and the narrow "write these numbers to that file"
//! interface. The format is whitespace-separated text in trial order, no
//! header and no trailing metadata; the destination directory is derived
//! from parameter values by pure string formatting.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::Result;

/// Formats one `_label=value` path component.
///
/// The value keeps its first three characters with the decimal point
/// replaced by an underscore, e.g. `0.5` becomes `_p=0_5`.
pub fn parameter_component(label: &str, value: f64) -> String {
    let formatted = format!("{:.6}", value);
    let truncated: String = formatted.chars().take(3).collect();
    format!("_{}={}", label, truncated.replace('.', "_"))
}

/// Directory component for a target probability, e.g. `p=0_5`.
pub fn probability_directory(probability: f64) -> String {
    parameter_component("p", probability)
        .trim_start_matches('_')
        .to_string()
}

/// File name for a tagged result sequence, e.g. `Results_7.dat`.
pub fn results_file_name(tag: u32) -> String {
    format!("Results_{}.dat", tag)
}

/// Full destination path: `<base>/p=<probability>/Results_<tag>.dat`.
pub fn results_path(base: &Path, probability: f64, tag: u32) -> PathBuf {
    base.join(probability_directory(probability))
        .join(results_file_name(tag))
}

/// Writes the first-passage times to `path`, truncating any existing file.
///
/// Values are written in trial order, each followed by a single space, with
/// no header. Missing parent directories are created.
pub fn write_passage_times(path: &Path, times: &[f64]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for time in times {
        write!(writer, "{} ", time)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("passage_output_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_parameter_component_formatting() {
        assert_eq!(parameter_component("r1", 0.5), "_r1=0_5");
        assert_eq!(parameter_component("r2", 2.0), "_r2=2_0");
        assert_eq!(parameter_component("p", 1.0), "_p=1_0");
    }

    #[test]
    fn test_probability_directory() {
        assert_eq!(probability_directory(0.5), "p=0_5");
        assert_eq!(probability_directory(0.0), "p=0_0");
    }

    #[test]
    fn test_results_path_composition() {
        let path = results_path(Path::new("results"), 0.5, 7);
        assert_eq!(path, Path::new("results").join("p=0_5").join("Results_7.dat"));
    }

    #[test]
    fn test_write_is_whitespace_separated_trial_order() {
        let path = temp_path("order.dat");
        write_passage_times(&path, &[0.5, 1.25, 0.75]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "0.5 1.25 0.75 ");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let path = temp_path("truncate.dat");
        write_passage_times(&path, &[1.0, 2.0, 3.0]).unwrap();
        write_passage_times(&path, &[4.0]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "4 ");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = temp_path("nested");
        let path = dir.join("p=0_5").join("Results_1.dat");
        write_passage_times(&path, &[0.1]).unwrap();

        assert!(path.exists());
        fs::remove_dir_all(&dir).ok();
    }
}
