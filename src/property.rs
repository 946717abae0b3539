// src/property.rs
//
// Wire model for the property API payload, plus the two bits of display
// logic the result view relies on: school ordering and currency formatting.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PropertyResult {
    pub address: String,
    pub details: PropertyDetails,
    pub schools: Vec<SchoolEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PropertyDetails {
    /// Free-form, e.g. "180 m²" — rendered verbatim.
    pub size: String,
    pub value: f64,
    /// ISO-8601 timestamp, passed through as-is.
    pub last_updated: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SchoolEntry {
    pub name: String,
    /// 0–5 scale.
    pub rating: f32,
    pub distance_km: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl PropertyResult {
    /// Schools in display order: rating descending, ties keep input order.
    pub fn schools_by_rating(&self) -> Vec<SchoolEntry> {
        let mut sorted = self.schools.clone();
        sort_schools(&mut sorted);
        sorted
    }
}

/// Stable sort, rating descending. Ties keep their relative input order.
pub fn sort_schools(schools: &mut [SchoolEntry]) {
    schools.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}

/// "$1,234,567" — grouped the way the value card displays money.
pub fn format_value(value: f64) -> String {
    let whole = value.round() as i64;
    let (sign, mut n) = if whole < 0 { ("-", -whole) } else { ("", whole) };

    let mut groups: Vec<String> = Vec::new();
    loop {
        let rem = n % 1000;
        n /= 1000;
        if n == 0 {
            groups.push(rem.to_string());
            break;
        }
        groups.push(format!("{:03}", rem));
    }
    groups.reverse();
    format!("{}${}", sign, groups.join(","))
}
