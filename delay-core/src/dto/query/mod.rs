//! Flight query submitted to the classifier
//!
//! Field names follow the model's feature columns, which is also what the
//! service expects in the form body.

use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Form fields describing one scheduled flight
#[derive(Debug, Clone, PartialEq)]
pub struct FlightQuery {
    /// Departure delay in minutes
    pub dep_delay: f64,
    /// Carrier code, e.g. "AA"
    pub carrier: String,
    pub flight_date: NaiveDate,
    /// Origin airport code
    pub origin: String,
    /// Destination airport code
    pub dest: String,
    pub flight_num: String,
    /// Free-text search field (`s`) carried by the page form
    pub search: Option<String>,
    /// Additional fields passed through verbatim
    pub extra: BTreeMap<String, String>,
}

impl FlightQuery {
    pub fn new(
        carrier: impl Into<String>,
        origin: impl Into<String>,
        dest: impl Into<String>,
        flight_num: impl Into<String>,
        flight_date: NaiveDate,
        dep_delay: f64,
    ) -> Self {
        Self {
            dep_delay,
            carrier: carrier.into(),
            flight_date,
            origin: origin.into(),
            dest: dest.into(),
            flight_num: flight_num.into(),
            search: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Adds a pass-through field; known field names are not overridden
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Serializes the query as ordered `name=value` pairs for form encoding
    pub fn to_form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("DepDelay".to_string(), self.dep_delay.to_string()),
            ("Carrier".to_string(), self.carrier.clone()),
            (
                "FlightDate".to_string(),
                self.flight_date.format("%Y-%m-%d").to_string(),
            ),
            ("Origin".to_string(), self.origin.clone()),
            ("Dest".to_string(), self.dest.clone()),
            ("FlightNum".to_string(), self.flight_num.clone()),
        ];

        if let Some(term) = &self.search {
            fields.push(("s".to_string(), term.clone()));
        }

        for (name, value) in &self.extra {
            if fields.iter().any(|(existing, _)| existing == name) {
                continue;
            }
            fields.push((name.clone(), value.clone()));
        }

        fields
    }
}
