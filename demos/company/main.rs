//! Company validation demo.
//!
//! Validates a small company with a president, employees and their contact
//! details, then prints the canonical report, the pretty report and the JSON
//! form of the same error tree.
//!
//! Run with:
//!   cargo run --example company
//!   RUST_LOG=scrub=trace cargo run --example company  # See engine events

use scrub::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

struct ContactDetail {
    kind: &'static str,
    value: &'static str,
}

impl Validated for ContactDetail {
    fn form(&self) -> Form<'_> {
        form![
            StringField::new("type", self.kind).required(),
            StringField::new("value", self.value).required(),
        ]
    }
}

struct Employee {
    name: &'static str,
    title: &'static str,
    salary: f64,
    owns: f64,
    contacts: Vec<ContactDetail>,
}

impl Validated for Employee {
    fn form(&self) -> Form<'_> {
        form![
            StringField::new("name", self.name).required(),
            StringField::new("title", self.title).required(),
            Float64Field::new("salary", self.salary).min(38000.0),
            Float64Field::new("owns", self.owns).between(0.25, 0.75),
            NestedListField::new("contacts", &self.contacts)
                .min_length(1)
                .max_length(3),
        ]
    }
}

struct Company {
    name: &'static str,
    established: i64,
    president: Option<Employee>,
    employees: Vec<Employee>,
}

impl Validated for Company {
    fn form(&self) -> Form<'_> {
        form![
            StringField::new("name", self.name).required(),
            Int64Field::new("established", self.established).between(1900, 2015),
            NestedField::new("president", self.president.as_ref()).required(),
            NestedListField::new("employees", &self.employees),
        ]
    }
}

fn contact(kind: &'static str, value: &'static str) -> ContactDetail {
    ContactDetail { kind, value }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let company = Company {
        name: "Pear",
        established: 2016,
        president: Some(Employee {
            name: "Jeve Stobs",
            title: "CEO",
            salary: 428532.35,
            owns: 0.2,
            contacts: vec![contact("skype", "jeve01")],
        }),
        employees: vec![
            Employee {
                name: "Gill Bates",
                title: "COO",
                salary: 20251.71,
                owns: 0.5,
                contacts: vec![
                    contact("facebook", "gillbates"),
                    contact("twitter", "@gillbates"),
                    contact("email", "gillbates@pear.com"),
                    contact("phone", "+1-202-555-0188"),
                ],
            },
            Employee {
                name: "",
                title: "Engineer",
                salary: 100000.0,
                owns: 0.75,
                contacts: vec![],
            },
        ],
    };

    let errors = validate(&company);

    println!("=== describe() ===\n");
    println!("{}", errors.describe());

    println!("\n=== pretty report ===");
    println!(
        "{}",
        errors.format(&ReportOptions::no_color().with_paths(true))
    );

    println!("=== JSON ===\n");
    match errors.to_json().and_then(|json| serde_json::to_string_pretty(&json)) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("could not serialize errors: {}", e),
    }

    validation(&company).unwrap_or_exit();
    println!("{} is valid", company.name);
}
