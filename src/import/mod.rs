mod csv;

pub use csv::{parse_students, SAMPLE_CSV};
