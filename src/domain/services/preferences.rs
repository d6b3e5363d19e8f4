use crate::domain::model::ParticipantPreferences;
use crate::domain::services::lookup::{normalize, CaseInsensitiveMap};
use crate::domain::services::merge::{merge_into_sets, Grouping};
use serde::Serialize;
use std::collections::BTreeSet;

/// The group's constraints, regrouped for cross-referencing with venues.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupPreferences {
    /// Normalized food -> display names of everyone who won't eat it.
    pub food_dislikes: Grouping<BTreeSet<String>>,
    /// Display name -> normalized drinks that person wants.
    pub drink_preferences: Grouping<BTreeSet<String>>,
}

pub fn aggregate_preferences(
    participants: &CaseInsensitiveMap<ParticipantPreferences>,
) -> GroupPreferences {
    let dislikes = participants.iter().flat_map(|(name, prefs)| {
        prefs
            .wont_eat
            .iter()
            .map(move |food| (normalize(food), name.trim().to_string()))
    });
    let food_dislikes = merge_into_sets(dislikes);

    let drink_preferences: Grouping<BTreeSet<String>> = participants
        .iter()
        .filter_map(|(name, prefs)| {
            let drinks = prefs.drinks.as_ref()?;
            let wanted: BTreeSet<String> = drinks.iter().map(|d| normalize(d)).collect();
            Some((name.trim().to_string(), wanted))
        })
        .collect();

    tracing::debug!(
        "Aggregated {} disliked foods and {} drink preferences",
        food_dislikes.len(),
        drink_preferences.len()
    );

    GroupPreferences {
        food_dislikes,
        drink_preferences,
    }
}
