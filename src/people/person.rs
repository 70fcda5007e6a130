use std::fmt::{self, Display};

/// Whether a [Person] is currently connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersonType {
    #[cfg_attr(feature = "serde", serde(rename = "connected"))]
    Connected,
    #[cfg_attr(feature = "serde", serde(rename = "not connected"))]
    NotConnected,
}

impl PersonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonType::Connected => "connected",
            PersonType::NotConnected => "not connected",
        }
    }
}

impl Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub name: String,
    pub email: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub person_type: PersonType,
}

impl Person {
    pub fn new<N, E>(name: N, email: E, person_type: PersonType) -> Self
    where
        N: Into<String>,
        E: Into<String>,
    {
        Self {
            name: name.into(),
            email: email.into(),
            person_type,
        }
    }
}

/// The state held by the people store.
///
/// `number` is the length of `people` after every transition made by
/// the reducers in [reducers](crate::people::reducers); the struct
/// itself does not enforce it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonStore {
    pub people: Vec<Person>,
    pub number: usize,
}

impl PersonStore {
    pub fn from_people(people: Vec<Person>) -> Self {
        let number = people.len();
        Self { people, number }
    }
}
