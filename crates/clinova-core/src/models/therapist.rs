use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::user::UserProfile;

/// Catalog entry for a therapist specialty.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapistType {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub category: String,
}

/// Filter the therapist directory by a case-insensitive name search and an
/// optional specialty. Runs client-side over the fetched directory.
pub fn filter_directory<'a>(
    therapists: &'a [UserProfile],
    search: &str,
    specialty: Option<&str>,
) -> Vec<&'a UserProfile> {
    let needle = search.trim().to_lowercase();
    therapists
        .iter()
        .filter(|therapist| {
            needle.is_empty() || therapist.full_name().to_lowercase().contains(&needle)
        })
        .filter(|therapist| match specialty {
            Some(wanted) => therapist.therapist_type.as_deref() == Some(wanted),
            None => true,
        })
        .collect()
}

/// Distinct specialties present in the directory, for the filter dropdown.
pub fn distinct_specialties(therapists: &[UserProfile]) -> Vec<String> {
    let mut specialties: Vec<String> = therapists
        .iter()
        .filter_map(|therapist| therapist.therapist_type.clone())
        .collect();
    specialties.sort();
    specialties.dedup();
    specialties
}
