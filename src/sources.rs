//! Loading of the two upstream collections (students, drives).
//!
//! A fetch failure upstream is surfaced here as a missing or unreadable file;
//! either way the engine receives an empty collection and degrades to explicit
//! "no data" output instead of failing the whole pipeline.

use crate::models::{Drive, Student};
use crate::ui::messages::warning;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn load_students(path: &Path) -> Vec<Student> {
    load_collection(path, "students")
}

pub fn load_drives(path: &Path) -> Vec<Drive> {
    load_collection(path, "drives")
}

fn load_collection<T: DeserializeOwned>(path: &Path, label: &str) -> Vec<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warning(format!(
                "Could not read {label} file '{}': {e}",
                path.display()
            ));
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            warning(format!(
                "Malformed {label} file '{}': {e}",
                path.display()
            ));
            Vec::new()
        }
    }
}
