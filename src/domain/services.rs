use crate::domain::model::{AgeBucket, Person};
use std::collections::BTreeMap;

/// Ordered subsequence of the roster where `is_adult()` holds.
pub fn filter_adults(people: &[Person]) -> Vec<Person> {
    people.iter().filter(|p| p.is_adult()).cloned().collect()
}

/// Single-pass partition into age buckets. Relative input order is kept
/// within each bucket; buckets nobody falls into are absent from the map.
pub fn group_by_age(people: &[Person]) -> BTreeMap<AgeBucket, Vec<Person>> {
    let mut groups: BTreeMap<AgeBucket, Vec<Person>> = BTreeMap::new();
    for person in people {
        groups
            .entry(person.age_bucket())
            .or_default()
            .push(person.clone());
    }
    groups
}

/// Person with the greatest age. Ties keep the first entry in input order,
/// hence the strict `>` replace-on-improvement scan rather than
/// `Iterator::max_by_key` (which keeps the last maximum).
pub fn oldest(people: &[Person]) -> Option<&Person> {
    let mut best: Option<&Person> = None;
    for person in people {
        match best {
            Some(current) if person.age() > current.age() => best = Some(person),
            None => best = Some(person),
            _ => {}
        }
    }
    best
}
