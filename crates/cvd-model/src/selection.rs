use serde::{Deserialize, Serialize};

/// Countries picked when the user has not chosen any yet.
pub const DEFAULT_COUNTRIES: [&str; 5] = ["USA", "India", "Brazil", "France", "Germany"];

/// Countries chosen by the user, in pick order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    countries: Vec<String>,
}

impl Selection {
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for country in countries {
            selection.insert(country);
        }
        selection
    }

    /// Adds a country; returns false when it was already selected.
    pub fn insert(&mut self, country: impl Into<String>) -> bool {
        let country = country.into();
        if self.contains(&country) {
            return false;
        }
        self.countries.push(country);
        true
    }

    /// Case-sensitive exact membership.
    pub fn contains(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
