use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_non_negative};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Immutable person record. Construction is the only place the field
/// invariants (non-empty name/email, non-negative age) are checked, so
/// `Deserialize` is intentionally not derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    name: String,
    age: i32,
    email: String,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32, email: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let email = email.into();

        validate_non_empty_string("name", &name)?;
        validate_non_empty_string("email", &email)?;
        validate_non_negative("age", age)?;

        Ok(Self { name, age, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_adult(&self) -> bool {
        self.age >= 18
    }

    pub fn age_bucket(&self) -> AgeBucket {
        AgeBucket::for_age(self.age)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person{{name='{}', age={}, email='{}'}}",
            self.name, self.age, self.email
        )
    }
}

/// Age classification. The `Ord` derive fixes the iteration order of a
/// `BTreeMap` keyed by bucket: minors, then adults, then seniors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBucket {
    Minors,
    Adults,
    Seniors,
}

impl AgeBucket {
    pub fn for_age(age: i32) -> Self {
        if age < 18 {
            AgeBucket::Minors
        } else if age < 65 {
            AgeBucket::Adults
        } else {
            AgeBucket::Seniors
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBucket::Minors => "minors",
            AgeBucket::Adults => "adults",
            AgeBucket::Seniors => "seniors",
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the transform stage derives from the roster. Buckets with no
/// members are absent from `age_groups`.
#[derive(Debug, Clone, Serialize)]
pub struct RosterSummary {
    pub total: usize,
    pub adults: Vec<Person>,
    pub age_groups: BTreeMap<AgeBucket, Vec<Person>>,
    pub oldest: Option<Person>,
    pub fibonacci: Vec<i64>,
}
