//! People-record exercises
//!
//! Employee display strings and sorting people by age.

use serde::{Deserialize, Serialize};

/// Salary used when none is given
pub const DEFAULT_SALARY: u64 = 100_000;

/// Render `"Name: NNN ₽"`, falling back to the default salary.
pub fn format_employee(name: &str, salary: Option<u64>) -> String {
    format!("{}: {} ₽", name, salary.unwrap_or(DEFAULT_SALARY))
}

/// A person record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Person {
    pub fn new(name: &str, age: u32, gender: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            gender: gender.to_string(),
        }
    }
}

/// Sort people by age ascending, keeping input order for equal ages.
pub fn sort_by_age(mut people: Vec<Person>) -> Vec<Person> {
    people.sort_by_key(|p| p.age);
    people
}
