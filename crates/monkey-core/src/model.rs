//! Monkey record types: the simple listing row and the extended catalog record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CatalogError, Result};

/// Simple monkey entry used by the seed list and the table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monkey {
    pub name: String,
    pub scientific_name: String,
    pub region: String,
    pub description: String,
}

impl Monkey {
    pub fn new(
        name: impl Into<String>,
        scientific_name: impl Into<String>,
        region: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            scientific_name: scientific_name.into(),
            region: region.into(),
            description: description.into(),
        }
    }
}

impl From<&MonkeyRecord> for Monkey {
    fn from(record: &MonkeyRecord) -> Self {
        Self {
            name: record.common_name.clone(),
            scientific_name: record.scientific_name.clone(),
            region: record.region.clone(),
            description: record.description.clone().unwrap_or_default(),
        }
    }
}

/// IUCN Red List category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConservationStatus {
    #[default]
    NotEvaluated,
    LeastConcern,
    NearThreatened,
    Vulnerable,
    Endangered,
    CriticallyEndangered,
}

impl ConservationStatus {
    /// Two-letter IUCN code (e.g. `EN`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotEvaluated => "NE",
            Self::LeastConcern => "LC",
            Self::NearThreatened => "NT",
            Self::Vulnerable => "VU",
            Self::Endangered => "EN",
            Self::CriticallyEndangered => "CR",
        }
    }
}

/// Body weight range in kilograms. Always `min_kg <= max_kg`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightRange {
    min_kg: f64,
    max_kg: f64,
}

impl WeightRange {
    /// Builds a range from optional bounds.
    ///
    /// Returns `Ok(None)` when both bounds are absent. A single bound is used for
    /// both ends, and reversed bounds are swapped.
    pub fn from_bounds(min_kg: Option<f64>, max_kg: Option<f64>) -> Result<Option<Self>> {
        let (min_kg, max_kg) = match (min_kg, max_kg) {
            (None, None) => return Ok(None),
            (Some(v), None) | (None, Some(v)) => (v, v),
            (Some(a), Some(b)) => (a.min(b), a.max(b)),
        };
        for v in [min_kg, max_kg] {
            if !v.is_finite() || v < 0.0 {
                return Err(CatalogError::InvalidArgument(format!(
                    "weight must be a non-negative number, got {v}"
                )));
            }
        }
        Ok(Some(Self { min_kg, max_kg }))
    }

    pub fn min_kg(&self) -> f64 {
        self.min_kg
    }

    pub fn max_kg(&self) -> f64 {
        self.max_kg
    }
}

/// Extended monkey record held by the catalog.
///
/// The identifier is assigned at construction and never changes; required names are
/// validated to be non-blank so [`MonkeyRecord::genus`] is always derivable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonkeyRecord {
    id: Uuid,
    common_name: String,
    scientific_name: String,
    region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    habitat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<WeightRange>,
    status: ConservationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_utc: Option<DateTime<Utc>>,
}

impl MonkeyRecord {
    /// Creates a record with a fresh v4 identifier and every optional field absent.
    pub fn new(
        common_name: impl Into<String>,
        scientific_name: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self> {
        let common_name = required("common name", common_name.into())?;
        let scientific_name = required("scientific name", scientific_name.into())?;
        let region = required("region", region.into())?;
        Ok(Self {
            id: Uuid::new_v4(),
            common_name,
            scientific_name,
            region,
            habitat: None,
            diet: None,
            weight: None,
            status: ConservationStatus::NotEvaluated,
            description: None,
            image_url: None,
            tags: Vec::new(),
            updated_utc: None,
        })
    }

    pub fn with_habitat(mut self, habitat: impl Into<String>) -> Self {
        self.habitat = Some(habitat.into());
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(diet.into());
        self
    }

    pub fn with_weight(mut self, weight: WeightRange) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_status(mut self, status: ConservationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_updated_utc(mut self, updated: DateTime<Utc>) -> Self {
        self.updated_utc = Some(updated);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    pub fn scientific_name(&self) -> &str {
        &self.scientific_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn habitat(&self) -> Option<&str> {
        self.habitat.as_deref()
    }

    pub fn diet(&self) -> Option<&str> {
        self.diet.as_deref()
    }

    pub fn weight(&self) -> Option<WeightRange> {
        self.weight
    }

    pub fn status(&self) -> ConservationStatus {
        self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn updated_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_utc
    }

    /// Genus: the first whitespace-delimited token of the scientific name.
    pub fn genus(&self) -> &str {
        self.scientific_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.scientific_name)
    }

    /// Case-insensitive match against the common or scientific name.
    pub fn matches_name(&self, query: &str) -> bool {
        eq_ignore_case(&self.common_name, query) || eq_ignore_case(&self.scientific_name, query)
    }
}

fn required(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidArgument(format!("{field} must not be blank")));
    }
    Ok(value)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandrill() -> MonkeyRecord {
        MonkeyRecord::new("Mandrill", "Mandrillus sphinx", "Central Africa").unwrap()
    }

    #[test]
    fn new_record_has_unique_id_and_defaults() {
        let a = mandrill();
        let b = mandrill();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.status(), ConservationStatus::NotEvaluated);
        assert!(a.tags().is_empty());
        assert!(a.habitat().is_none());
        assert!(a.updated_utc().is_none());
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        assert!(matches!(
            MonkeyRecord::new("  ", "Ateles", "Central & South America"),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(MonkeyRecord::new("Spider Monkey", "", "x").is_err());
        assert!(MonkeyRecord::new("Spider Monkey", "Ateles", "\t").is_err());
    }

    #[test]
    fn genus_is_first_token() {
        assert_eq!(mandrill().genus(), "Mandrillus");
        let single = MonkeyRecord::new("Howler Monkey", "  Alouatta ", "x").unwrap();
        assert_eq!(single.genus(), "Alouatta");
    }

    #[test]
    fn matches_name_ignores_case_on_both_names() {
        let m = mandrill();
        assert!(m.matches_name("MANDRILL"));
        assert!(m.matches_name("mandrillus SPHINX"));
        assert!(!m.matches_name("Mandrillus"));
    }

    #[test]
    fn weight_range_single_sided_and_swapped() {
        assert_eq!(WeightRange::from_bounds(None, None).unwrap(), None);

        let one = WeightRange::from_bounds(None, Some(12.5)).unwrap().unwrap();
        assert_eq!((one.min_kg(), one.max_kg()), (12.5, 12.5));

        let swapped = WeightRange::from_bounds(Some(30.0), Some(10.0)).unwrap().unwrap();
        assert_eq!((swapped.min_kg(), swapped.max_kg()), (10.0, 30.0));

        assert!(WeightRange::from_bounds(Some(-1.0), None).is_err());
        assert!(WeightRange::from_bounds(Some(f64::NAN), Some(3.0)).is_err());
    }

    #[test]
    fn projection_to_simple_monkey() {
        let record = mandrill().with_description("Brightly colored face");
        let simple = Monkey::from(&record);
        assert_eq!(simple.name, "Mandrill");
        assert_eq!(simple.description, "Brightly colored face");

        let bare = Monkey::from(&mandrill());
        assert_eq!(bare.description, "");
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let record = mandrill()
            .with_status(ConservationStatus::Vulnerable)
            .with_tags(["terrestrial", "social"]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["common_name"], "Mandrill");
        assert_eq!(json["status"], "vulnerable");
        assert_eq!(json["tags"][1], "social");
        assert!(json.get("habitat").is_none());
        assert!(json.get("weight").is_none());
    }

    #[test]
    fn status_codes() {
        assert_eq!(ConservationStatus::CriticallyEndangered.code(), "CR");
        assert_eq!(ConservationStatus::default().code(), "NE");
        let parsed: ConservationStatus = serde_json::from_str("\"near_threatened\"").unwrap();
        assert_eq!(parsed.code(), "NT");
    }

    #[test]
    fn simple_monkey_serializes_its_four_columns() {
        let json = serde_json::to_value(Monkey::from(&mandrill())).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(json["scientific_name"], "Mandrillus sphinx");
    }
}
