//! People and locations directory lookups.
//!
//! Searches are case-insensitive substring matches on a trimmed query; a
//! blank query returns every entry in input order.

use serde::Serialize;

use crate::schedule::{Location, Person};

/// People split by whether they are the go-to contact for something.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactGroups<'a> {
    /// People with a non-blank "contact for" entry
    pub key_contacts: Vec<&'a Person>,
    /// Everyone else
    pub all_team: Vec<&'a Person>,
}

fn normalized_query(query: &str) -> Option<String> {
    let query = query.trim();
    (!query.is_empty()).then(|| query.to_lowercase())
}

fn any_contains(fields: &[&str], needle: &str) -> bool {
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// People whose name, role, contact-for entry or team contains `query`.
pub fn search_people<'a>(people: &'a [Person], query: &str) -> Vec<&'a Person> {
    let Some(needle) = normalized_query(query) else {
        return people.iter().collect();
    };
    people
        .iter()
        .filter(|person| {
            any_contains(
                &[
                    person.name.as_str(),
                    person.role.as_str(),
                    person.contact_for.as_str(),
                    person.team.as_str(),
                ],
                &needle,
            )
        })
        .collect()
}

/// Key contacts first, the rest of the team after, input order kept in each.
pub fn group_by_contact_for(people: &[Person]) -> ContactGroups<'_> {
    let (key_contacts, all_team): (Vec<&Person>, Vec<&Person>) = people
        .iter()
        .partition(|person| !person.contact_for.trim().is_empty());
    ContactGroups {
        key_contacts,
        all_team,
    }
}

/// Locations whose place or notes contain `query`.
pub fn search_locations<'a>(locations: &'a [Location], query: &str) -> Vec<&'a Location> {
    let Some(needle) = normalized_query(query) else {
        return locations.iter().collect();
    };
    locations
        .iter()
        .filter(|location| {
            any_contains(&[location.place.as_str(), location.notes.as_str()], &needle)
        })
        .collect()
}
