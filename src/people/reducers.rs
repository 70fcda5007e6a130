//! Reducers of the people store, one per [PersonActionKind].

use super::{PersonAction, PersonActionKind, PersonStore};
use crate::{ReducerTable, StoreError};

/// Replace the state with the people carried by an
/// [UpdateAllPeople](PersonAction::UpdateAllPeople) action, counting
/// them. The previous people are discarded, not appended to.
pub fn update_all_people(prev_state: &PersonStore, action: &PersonAction) -> PersonStore {
    match action {
        PersonAction::UpdateAllPeople(people) => PersonStore::from_people(people.clone()),
        _ => prev_state.clone(),
    }
}

/// Empty the state, whatever it held and whatever the action carries.
pub fn remove_all_people(_prev_state: &PersonStore, _action: &PersonAction) -> PersonStore {
    PersonStore::default()
}

/// The [ReducerTable] of the people store.
pub fn people_reducers() -> Result<ReducerTable<PersonStore, PersonAction>, StoreError> {
    ReducerTable::<PersonStore, PersonAction>::new()
        .with(PersonActionKind::UpdateAllPeople, update_all_people)?
        .with(PersonActionKind::RemoveAllPeople, remove_all_people)
}

#[cfg(test)]
mod tests {
    use super::people_reducers;
    use crate::people::{
        actions::{remove_all_people, update_all_people},
        Person, PersonStore, PersonType,
    };

    fn pierre() -> Person {
        Person::new("Pierre", "test@test.fr", PersonType::Connected)
    }

    fn toto() -> Person {
        Person::new("Toto", "toto@toto.fr", PersonType::NotConnected)
    }

    #[test]
    fn update_replaces_and_counts() {
        let reducers = people_reducers().unwrap();
        let prev = PersonStore::from_people(vec![pierre()]);

        let next = reducers
            .reduce(&prev, &update_all_people(vec![toto(), pierre()]))
            .unwrap();
        assert_eq!(vec![toto(), pierre()], next.people);
        assert_eq!(2, next.number);
        // The previous state is left untouched.
        assert_eq!(vec![pierre()], prev.people);
    }

    #[test]
    fn update_with_empty_list() {
        let reducers = people_reducers().unwrap();
        let prev = PersonStore::from_people(vec![pierre()]);

        let next = reducers.reduce(&prev, &update_all_people(Vec::new())).unwrap();
        assert_eq!(PersonStore::default(), next);
    }

    #[test]
    fn remove_ignores_prior_state() {
        let reducers = people_reducers().unwrap();

        for prev in vec![
            PersonStore::default(),
            PersonStore::from_people(vec![pierre(), toto()]),
            // Inconsistent states are still cleared.
            PersonStore {
                people: vec![toto()],
                number: 7,
            },
        ] {
            let next = reducers.reduce(&prev, &remove_all_people()).unwrap();
            assert!(next.people.is_empty());
            assert_eq!(0, next.number);
        }
    }

    #[test]
    fn every_kind_is_handled() {
        let reducers = people_reducers().unwrap();
        assert_eq!(2, reducers.len());
    }
}
