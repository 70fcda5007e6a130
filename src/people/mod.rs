//! A store managing a list of people, and the [PeopleFacade] through
//! which an application uses it.
//!
//! ```
//! use people_store::{
//!     people::{PeopleFacade, Person, PersonType},
//!     Callback,
//! };
//!
//! let facade = PeopleFacade::new().unwrap();
//! let number: Callback<usize> = Callback::new(|number| println!("{} people", number));
//! facade.number().subscribe(&number);
//!
//! facade.update_all_people(vec![Person::new(
//!     "Pierre",
//!     "test@test.fr",
//!     PersonType::Connected,
//! )]);
//! assert_eq!(1, facade.number().get());
//!
//! facade.remove_all_people();
//! assert!(facade.people().get().is_empty());
//! ```

pub mod actions;
mod facade;
mod person;
pub mod reducers;
pub mod selectors;

pub use actions::{PersonAction, PersonActionKind};
pub use facade::PeopleFacade;
pub use person::{Person, PersonStore, PersonType};
