use crate::domain::model::{AvoidedVenue, Report, VenueMenu};
use crate::domain::services::lookup::{normalize, CaseInsensitiveMap};
use crate::domain::services::merge::merge_into_unique_lists;
use crate::domain::services::preferences::GroupPreferences;
use std::collections::BTreeSet;

struct NormalizedMenu<'a> {
    venue: &'a str,
    food: BTreeSet<String>,
    drinks: BTreeSet<String>,
}

/// Text before the first whitespace, used to address people in reasons.
pub fn first_name(display_name: &str) -> &str {
    display_name.split_whitespace().next().unwrap_or(display_name)
}

/// Splits `venues` into places the whole group can visit and places to avoid.
///
/// A venue is avoided as soon as one participant can't eat or can't drink
/// there. Nobody can eat at a venue serving only food they refuse, or
/// serving no food at all; nobody can drink at a venue offering none of the
/// drinks they want.
pub fn recommend(venues: &CaseInsensitiveMap<VenueMenu>, prefs: &GroupPreferences) -> Report {
    tracing::info!(
        "Generating a recommendation report for {} venues",
        venues.len()
    );

    let menus: Vec<NormalizedMenu<'_>> = venues
        .iter()
        .map(|(venue, menu)| NormalizedMenu {
            venue,
            food: menu.food.iter().map(|f| normalize(f)).collect(),
            drinks: menu.drinks.iter().map(|d| normalize(d)).collect(),
        })
        .collect();

    let mut pending: Vec<(String, String)> = Vec::new();

    for (food, people) in prefs.food_dislikes.iter() {
        for person in people {
            for menu in &menus {
                let only_refused = menu.food.len() == 1 && menu.food.contains(food);
                if only_refused || menu.food.is_empty() {
                    pending.push((
                        menu.venue.to_string(),
                        format!("There is nothing for {} to eat.", first_name(person)),
                    ));
                }
            }
        }
    }

    for (person, wanted) in prefs.drink_preferences.iter() {
        for menu in &menus {
            if wanted.is_disjoint(&menu.drinks) {
                pending.push((
                    menu.venue.to_string(),
                    format!("There is nothing for {} to drink.", first_name(person)),
                ));
            }
        }
    }

    let avoid = merge_into_unique_lists(pending);

    let places_to_visit: Vec<String> = venues
        .keys()
        .filter(|venue| !avoid.contains_key(venue))
        .map(str::to_string)
        .collect();

    let places_to_avoid: Vec<AvoidedVenue> = avoid
        .into_iter()
        .map(|(name, reason)| AvoidedVenue { name, reason })
        .collect();

    tracing::debug!(
        "{} venues to visit, {} to avoid",
        places_to_visit.len(),
        places_to_avoid.len()
    );

    Report {
        places_to_visit,
        places_to_avoid,
    }
}
