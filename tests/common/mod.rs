//! Shared company fixture: a company with a president and employees, each
//! employee holding a list of contact details.

#![allow(dead_code)]

use scrub::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct ContactDetail {
    pub kind: String,
    pub value: String,
}

impl ContactDetail {
    pub fn new(kind: &str, value: &str) -> Self {
        Self {
            kind: kind.to_string(),
            value: value.to_string(),
        }
    }
}

impl Validated for ContactDetail {
    fn form(&self) -> Form<'_> {
        form![
            StringField::new("type", &self.kind).required(),
            StringField::new("value", &self.value).required(),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct Employee {
    pub name: String,
    pub title: String,
    pub salary: f64,
    pub owns: f64,
    pub contacts: Vec<ContactDetail>,
}

impl Validated for Employee {
    fn form(&self) -> Form<'_> {
        form![
            StringField::new("name", &self.name).required(),
            StringField::new("title", &self.title).required(),
            Float64Field::new("salary", self.salary).min(38000.0),
            Float64Field::new("owns", self.owns).between(0.25, 0.75),
            NestedListField::new("contacts", &self.contacts)
                .min_length(1)
                .max_length(3),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct Company {
    pub name: String,
    pub established: i64,
    pub president: Option<Box<Employee>>,
    pub employees: Vec<Employee>,
}

impl Validated for Company {
    fn form(&self) -> Form<'_> {
        form![
            StringField::new("name", &self.name).required(),
            Int64Field::new("established", self.established).between(1900, 2015),
            NestedField::new("president", self.president.as_deref()),
            NestedListField::new("employees", &self.employees),
        ]
    }
}

pub fn employee(name: &str, title: &str, salary: f64, owns: f64, contacts: &[(&str, &str)]) -> Employee {
    Employee {
        name: name.to_string(),
        title: title.to_string(),
        salary,
        owns,
        contacts: contacts
            .iter()
            .map(|(kind, value)| ContactDetail::new(kind, value))
            .collect(),
    }
}

/// The company used by the canonical report scenario.
pub fn pear() -> Company {
    Company {
        name: "Pear".to_string(),
        established: 2016,
        president: Some(Box::new(employee(
            "Jeve Stobs",
            "CEO",
            428532.35,
            0.2,
            &[("skype", "jeve01")],
        ))),
        employees: vec![
            employee(
                "Gill Bates",
                "COO",
                20251.71,
                0.5,
                &[
                    ("facebook", "gillbates"),
                    ("twitter", "@gillbates"),
                    ("email", "gillbates@pear.com"),
                    ("phone", "+1-202-555-0188"),
                ],
            ),
            employee("Mon Elusk", "CTO", 299823.75, 0.6, &[("skype", "elon")]),
            employee("", "Engineer", 100000.0, 0.75, &[]),
            Employee::default(),
        ],
    }
}

/// A company that passes every rule.
pub fn valid_company() -> Company {
    Company {
        name: "Orchard".to_string(),
        established: 1976,
        president: Some(Box::new(employee(
            "Ada",
            "CEO",
            250000.0,
            0.5,
            &[("email", "ada@orchard.io")],
        ))),
        employees: vec![employee(
            "Grace",
            "CTO",
            200000.0,
            0.3,
            &[("phone", "555-0100"), ("skype", "grace")],
        )],
    }
}
