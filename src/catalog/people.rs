//! Sample rows used by the table stories.

use crate::table::{CellValue, Column, ColumnSet, Record, Result};

/// A person shown in the table stories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Job role.
    pub role: String,
    /// Age in years.
    pub age: u32,
}

impl Person {
    /// Create a new person.
    pub fn new(id: u32, name: impl Into<String>, role: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            age,
        }
    }
}

impl Record for Person {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "role" => self.role.as_str().into(),
            "age" => self.age.into(),
            _ => CellValue::Null,
        }
    }
}

/// The five sample people.
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new(1, "Aisha", "Developer", 22),
        Person::new(2, "Bikash", "Designer", 25),
        Person::new(3, "Chirag", "PM", 27),
        Person::new(4, "Deepa", "QA", 24),
        Person::new(5, "Eshan", "Developer", 23),
    ]
}

/// Name, role and age columns, all sortable.
pub fn people_columns() -> Result<ColumnSet<Person>> {
    ColumnSet::new(vec![
        Column::new("name", "Name").sortable(),
        Column::new("role", "Role").sortable(),
        Column::new("age", "Age").sortable().width("8"),
    ])
}
