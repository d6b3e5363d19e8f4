use where_to_go::adapters::payload_to_table;
use where_to_go::core::Entity;
use where_to_go::domain::services::{
    aggregate_preferences, recommend, select_subset, CaseInsensitiveMap,
};
use where_to_go::{ParticipantPreferences, VenueMenu};

fn participants() -> CaseInsensitiveMap<ParticipantPreferences> {
    let payload = serde_json::json!([
        {"name": "Danielle Ren", "wont_eat": ["Fish"], "drinks": ["Cider", "Rum", "Soft drinks"]},
        {"name": "Cristiana Lusitano", "wont_eat": ["Eggs", "Pasta"], "drinks": ["Tequila", "Soft drinks", "beer", "Coffee"]},
        {"name": "Name1 Surname", "wont_eat": ["Bread", "Pasta"], "drinks": ["Vodka", "Gin", "Whisky", "Rum"]},
        {"name": "Name2 Surname", "wont_eat": [], "drinks": ["Cider", "Beer", "Rum", "Soft drinks"]},
        {"name": "Tom Mullen", "wont_eat": ["Meat", "Fish"], "drinks": ["Soft drinks", "Tea"]},
        {"name": "Name3 Surname", "wont_eat": ["Mexican"], "drinks": ["Vodka", "Gin", "whisky", "Rum", "Cider", "Beer", "Soft drinks"]},
        {"name": "Wen Li", "wont_eat": ["Chinese"], "drinks": ["Beer", "cider", "Rum"]}
    ]);
    payload_to_table(Entity::Users, &payload, "name").unwrap()
}

fn venue(food: &[&str], drinks: &[&str]) -> VenueMenu {
    VenueMenu {
        food: food.iter().map(|s| s.to_string()).collect(),
        drinks: drinks.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_subset_of_known_participants() {
    let all = participants();

    let subset = select_subset(
        &["danielle ren", "tom mullen", "cristiana lusitano", "wen li"],
        &all,
    );

    let expected: CaseInsensitiveMap<ParticipantPreferences> = all
        .iter()
        .filter(|(name, _)| !name.starts_with("Name"))
        .map(|(name, prefs)| (name.to_lowercase(), prefs.clone()))
        .collect();
    assert_eq!(subset, expected);
    assert_eq!(
        subset.keys().collect::<Vec<_>>(),
        vec!["Danielle Ren", "Cristiana Lusitano", "Tom Mullen", "Wen Li"]
    );
}

#[test]
fn test_unknown_participant_is_dropped_without_error() {
    let subset = select_subset(&["tom mullen", "ghost person"], &participants());

    assert_eq!(subset.keys().collect::<Vec<_>>(), vec!["Tom Mullen"]);
}

#[test]
fn test_danielle_can_go_to_el_cantina() {
    let group = select_subset(&["Danielle Ren"], &participants());
    let venues: CaseInsensitiveMap<VenueMenu> = vec![(
        "El Cantina",
        venue(&["Mexican"], &["Soft drinks", "Tequila", "Beer"]),
    )]
    .into_iter()
    .collect();

    let report = recommend(&venues, &aggregate_preferences(&group));

    assert_eq!(report.places_to_visit, vec!["El Cantina".to_string()]);
    assert!(report.places_to_avoid.is_empty());
}

#[test]
fn test_participant_without_dislikes_ignores_empty_kitchen_food_rule() {
    let group = select_subset(&["name2 surname"], &participants());
    let venues: CaseInsensitiveMap<VenueMenu> =
        vec![("Bar Only", venue(&[], &["Beer"]))].into_iter().collect();

    let report = recommend(&venues, &aggregate_preferences(&group));

    assert_eq!(report.places_to_visit, vec!["Bar Only".to_string()]);
}

#[test]
fn test_venue_names_keep_their_spelling_in_the_report() {
    let group = select_subset(&["wen li"], &participants());
    let venues: CaseInsensitiveMap<VenueMenu> = vec![
        ("the Cambridge", venue(&["Pies", "Burgers"], &["Beer"])),
        ("FABRIQUE", venue(&["Bread"], &["Tea"])),
    ]
    .into_iter()
    .collect();

    let report = recommend(&venues, &aggregate_preferences(&group));

    assert_eq!(report.places_to_visit, vec!["the Cambridge".to_string()]);
    assert_eq!(report.places_to_avoid[0].name, "FABRIQUE");
    assert_eq!(
        report.places_to_avoid[0].reason,
        vec!["There is nothing for Wen to drink.".to_string()]
    );
}
