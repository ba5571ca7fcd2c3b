pub mod drives;
pub mod export;
pub mod import;
pub mod report;
pub mod sample_csv;
pub mod stats;
pub mod students;
