use crate::domain::services::lookup::CaseInsensitiveMap;
use serde::{Deserialize, Serialize};

/// What one participant refuses to eat and would like to drink.
///
/// Only `wont_eat` and `drinks` are read; any other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantPreferences {
    #[serde(default)]
    pub wont_eat: Vec<String>,
    /// `None` when the record has no `drinks` field at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drinks: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueMenu {
    pub food: Vec<String>,
    pub drinks: Vec<String>,
}

/// Both reference tables, resolved and keyed by display name.
#[derive(Debug, Clone, Default)]
pub struct SourceData {
    pub participants: CaseInsensitiveMap<ParticipantPreferences>,
    pub venues: CaseInsensitiveMap<VenueMenu>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvoidedVenue {
    pub name: String,
    pub reason: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub places_to_visit: Vec<String>,
    pub places_to_avoid: Vec<AvoidedVenue>,
}
