use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// `applicable_classes` arrives either as a comma-joined string ("5,6,7") or
/// as an array of labels, depending on which upstream form produced the drive.
/// Both shapes are accepted at the serde boundary and normalized by
/// [`ClassList::to_vec`]; nothing past this type sees the raw shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassList {
    Joined(String),
    Listed(Vec<String>),
}

impl Default for ClassList {
    fn default() -> Self {
        ClassList::Listed(Vec::new())
    }
}

impl ClassList {
    /// Canonical sequence of trimmed, non-empty class labels.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            ClassList::Joined(s) => s.split(',').map(str::trim).collect::<Vec<_>>(),
            ClassList::Listed(v) => v.iter().map(|c| c.trim()).collect(),
        }
        .into_iter()
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
    }

    pub fn display(&self) -> String {
        self.to_vec().join(", ")
    }
}

/// A scheduled vaccination drive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Calendar date as "YYYY-MM-DD"; kept as text, parsed on demand.
    #[serde(default)]
    pub date: String,

    #[serde(default, deserialize_with = "doses_lenient")]
    pub doses_available: u32,

    #[serde(default)]
    pub applicable_classes: ClassList,

    #[serde(default)]
    pub vaccine_name: String,
}

impl Drive {
    /// `None` when the date field is missing or not a valid calendar date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

/// The drive form submits `doses_available` as a string while the API may
/// return a number. Accept both; anything else falls back to 0.
fn doses_lenient<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => u32::try_from(n).unwrap_or(0),
        Raw::Text(s) => s.trim().parse().unwrap_or(0),
        Raw::Other(_) => 0,
    })
}
