#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vxr() -> Command {
    cargo_bin_cmd!("vaxreport")
}

/// Unique temp file path for a test, removing any leftover from earlier runs
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_vaxreport.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const STUDENTS_JSON: &str = r#"[
  {"id":"STU2001","name":"Ananya","class":"10th","vaccines":[
    {"name":"Covishield","driveId":"DRV001"},
    {"name":"Covaxin","driveId":"DRV002"}
  ]},
  {"id":"STU2002","name":"Rahul","class":"9th","vaccines":[
    {"name":"Covishield","driveId":"DRV001"}
  ]},
  {"id":"STU2004","name":"Dev","class":"10th","vaccines":[
    {"name":"Sputnik","driveId":"DRV999"}
  ]},
  {"id":"STU2005","name":"Simran","class":"12th","vaccines":[]}
]"#;

/// DRV002 carries the string forms of doses_available and applicable_classes
/// on purpose; both upstream shapes must load.
pub const DRIVES_JSON: &str = r#"[
  {"id":"DRV001","name":"Spring Drive","date":"2025-04-10","doses_available":100,
   "applicable_classes":["9th","10th"],"vaccine_name":"Covishield"},
  {"id":"DRV002","name":"Summer Drive","date":"2025-04-25","doses_available":"80",
   "applicable_classes":"11th, 12th","vaccine_name":"Covaxin"},
  {"id":"DRV003","name":"Monsoon Drive","date":"2025-05-05","doses_available":50,
   "applicable_classes":"10th","vaccine_name":"Sputnik"}
]"#;

pub fn write_students(name: &str) -> String {
    let path = temp_path(&format!("{name}_students"), "json");
    fs::write(&path, STUDENTS_JSON).expect("write students fixture");
    path
}

pub fn write_drives(name: &str) -> String {
    let path = temp_path(&format!("{name}_drives"), "json");
    fs::write(&path, DRIVES_JSON).expect("write drives fixture");
    path
}

pub fn write_csv(name: &str, content: &str) -> String {
    let path = temp_path(&format!("{name}_import"), "csv");
    fs::write(&path, content).expect("write csv fixture");
    path
}
