use serde::{Deserialize, Serialize};

/// One vaccination entry on a student record.
/// A missing `driveId` upstream normalizes to an empty string, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vaccination {
    #[serde(rename = "name", default)]
    pub vaccine: String,

    #[serde(rename = "driveId", default)]
    pub drive_id: String,
}

/// Canonical student record.
///
/// The upstream JSON shape is `{ id, name, class, vaccines: [{name, driveId}] }`.
/// Every field defaults when absent so a sparse record deserializes instead of
/// failing the whole collection. Vaccination entries keep their input order and
/// duplicates are retained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub class: String,

    #[serde(rename = "vaccines", default)]
    pub vaccinations: Vec<Vaccination>,
}

impl Student {
    pub fn is_vaccinated(&self) -> bool {
        !self.vaccinations.is_empty()
    }

    /// Space-joined vaccine names, used by the search filter.
    pub fn vaccine_names(&self) -> String {
        self.vaccinations
            .iter()
            .map(|v| v.vaccine.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
