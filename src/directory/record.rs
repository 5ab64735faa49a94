use std::collections::HashSet;
use std::fmt;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::LoadError;

/// Partner ids show up as numbers in hand-written `db.json` files and as
/// strings in exported ones; both are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PartnerId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartnerId::Number(n) => write!(f, "{}", n),
            PartnerId::Text(s) => f.write_str(s),
        }
    }
}

/// One gym, studio or partner in the directory.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PartnerRecord {
    pub id: PartnerId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub members: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
}

impl PartnerRecord {
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    pub fn members_label(&self) -> String {
        group_thousands(self.members)
    }

    pub fn mailto(&self) -> String {
        let subject = format!("Enquiry about {}", self.name);
        format!("mailto:{}?subject={}", self.email, urlencoding::encode(&subject))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON number is a member count: fractions are truncated, negatives
/// become 0 and null counts as missing.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let count = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(match count {
        Some(n) => n.as_u64().unwrap_or_else(|| n.as_f64().unwrap_or(0.0).max(0.0) as u64),
        None => 0,
    })
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parses the records resource.
///
/// The body is either `{ "gyms": [...] }` or a bare list. An object whose
/// `gyms` field is not a list is treated as the list itself, which then
/// fails to parse.
pub fn parse_records(body: &str) -> Result<Vec<PartnerRecord>, LoadError> {
    let value: Value = serde_json::from_str(body)?;
    let list = match value {
        Value::Object(mut map) if map.get("gyms").is_some_and(Value::is_array) => {
            map.remove("gyms").unwrap_or_default()
        }
        other => other,
    };
    let records: Vec<PartnerRecord> = serde_json::from_value(list)?;
    Ok(dedupe_by_id(records))
}

/// Keeps the first record for every id.
fn dedupe_by_id(mut records: Vec<PartnerRecord>) -> Vec<PartnerRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records.retain(|record| {
        let fresh = seen.insert(record.id.clone());
        if !fresh {
            warn!("dropping duplicate partner id {} ({})", record.id, record.name);
        }
        fresh
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_payload() {
        let body = r#"{ "gyms": [
            { "id": 1, "name": "Alpha", "industry": "Yoga", "location": "East", "rating": 4.2, "members": 100 }
        ] }"#;
        let records = parse_records(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, PartnerId::Number(1));
        assert_eq!(records[0].name, "Alpha");
        assert_eq!(records[0].email, "");
    }

    #[test]
    fn parses_bare_list_with_string_ids() {
        let body = r#"[ { "id": "gym-7", "name": "Beta", "industry": "Crossfit", "location": "West" } ]"#;
        let records = parse_records(body).unwrap();
        assert_eq!(records[0].id, PartnerId::Text("gym-7".to_string()));
        assert_eq!(records[0].id.to_string(), "gym-7");
    }

    #[test]
    fn missing_and_null_numbers_default_to_zero() {
        let body = r#"[
            { "id": 1, "name": "No numbers" },
            { "id": 2, "name": "Nulls", "rating": null, "members": null, "phone": null }
        ]"#;
        let records = parse_records(body).unwrap();
        for record in &records {
            assert_eq!(record.rating, 0.0);
            assert_eq!(record.members, 0);
        }
        assert_eq!(records[1].phone, "");
    }

    #[test]
    fn fractional_and_negative_member_counts_still_load() {
        let body = r#"[
            { "id": 1, "name": "Whole", "members": 100 },
            { "id": 2, "name": "Float", "members": 1200.0 },
            { "id": 3, "name": "Partial", "members": 87.9 },
            { "id": 4, "name": "Negative", "members": -5 }
        ]"#;
        let members: Vec<u64> = parse_records(body)
            .unwrap()
            .iter()
            .map(|r| r.members)
            .collect();
        assert_eq!(members, vec![100, 1200, 87, 0]);
    }

    #[test]
    fn null_industry_and_location_become_empty() {
        let body = r#"[
            { "id": 1, "name": "Nowhere", "industry": null, "location": null },
            { "id": 2, "name": "Somewhere", "industry": "Yoga", "location": "East" }
        ]"#;
        let records = parse_records(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].industry, "");
        assert_eq!(records[0].location, "");
        assert_eq!(records[1].industry, "Yoga");
    }

    #[test]
    fn non_list_gyms_field_is_rejected() {
        let err = parse_records(r#"{ "gyms": "soon" }"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(parse_records("<html>"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let body = r#"[
            { "id": 1, "name": "First" },
            { "id": 2, "name": "Other" },
            { "id": 1, "name": "Again" }
        ]"#;
        let names: Vec<String> = parse_records(body)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["First", "Other"]);
    }

    #[test]
    fn labels() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(27_000), "27,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");

        let record = parse_records(r#"[{ "id": 3, "name": "Iron & Oak", "rating": 4, "email": "hi@ironoak.fit" }]"#)
            .unwrap()
            .remove(0);
        assert_eq!(record.rating_label(), "4.0");
        assert_eq!(
            record.mailto(),
            "mailto:hi@ironoak.fit?subject=Enquiry%20about%20Iron%20%26%20Oak"
        );
    }
}
