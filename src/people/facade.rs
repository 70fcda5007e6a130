use super::{
    actions,
    reducers::people_reducers,
    selectors::{select_number, select_people},
    Person, PersonAction, PersonStore,
};
use crate::{Selector, StoreConfig, StoreError, StoreRef};

/// The public entry point to the people store.
///
/// Reading goes through the [people()](PeopleFacade::people) and
/// [number()](PeopleFacade::number) selectors, writing through
/// [update_all_people()](PeopleFacade::update_all_people) and
/// [remove_all_people()](PeopleFacade::remove_all_people). Dispatch
/// methods are fire-and-forget: their only result is the state change
/// the selectors report before the method returns.
pub struct PeopleFacade {
    store: StoreRef<PersonStore, PersonAction>,
    people: Selector<PersonStore, Vec<Person>>,
    number: Selector<PersonStore, usize>,
}

impl PeopleFacade {
    /// A facade over a new, empty people store.
    pub fn new() -> Result<Self, StoreError> {
        Self::with_config(StoreConfig::new().name("people"))
    }

    pub fn with_config(config: StoreConfig) -> Result<Self, StoreError> {
        let store = StoreRef::with_config(config, people_reducers()?, PersonStore::default());
        Ok(Self::from_store(store))
    }

    /// A facade over an existing people store.
    pub fn from_store(store: StoreRef<PersonStore, PersonAction>) -> Self {
        let people = store.select(select_people);
        let number = store.select(select_number);

        Self {
            store,
            people,
            number,
        }
    }

    /// The people currently in the store.
    pub fn people(&self) -> &Selector<PersonStore, Vec<Person>> {
        &self.people
    }

    /// The number of people currently in the store.
    pub fn number(&self) -> &Selector<PersonStore, usize> {
        &self.number
    }

    pub fn update_all_people(&self, people: Vec<Person>) {
        self.store.dispatch(actions::update_all_people(people));
    }

    pub fn remove_all_people(&self) {
        self.store.dispatch(actions::remove_all_people());
    }
}
