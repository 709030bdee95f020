//! Account data models and request parsing.
//!
//! This module defines:
//! - `Account`: Database entity representing a customer account
//! - `AccountPayload`: Typed request body for create and update
//! - `NewAccount`: A validated account that has not been assigned an id yet

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. The `id` is assigned by the store when the
/// row is inserted and never changes afterwards.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Joe",
///   "email": "joe@x.com",
///   "address": "1 Rd",
///   "phone_number": "555-1111",
///   "date_joined": "2026-10-16"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Store-assigned primary key
    pub id: i64,

    pub name: String,

    pub email: String,

    pub address: String,

    /// Contact number, if the customer gave one
    pub phone_number: Option<String>,

    /// Day the account was opened, serialized as `YYYY-MM-DD`
    pub date_joined: NaiveDate,
}

impl Account {
    /// Overwrite this account's fields with an update payload.
    ///
    /// Every field is replaced: an absent or `null` `phone_number` clears it,
    /// and an absent `date_joined` falls back to `today` as on create.
    /// The `id` never changes.
    pub fn apply(&mut self, payload: AccountPayload, today: NaiveDate) {
        self.name = payload.name;
        self.email = payload.email;
        self.address = payload.address;
        self.phone_number = payload.phone_number;
        self.date_joined = payload.date_joined.unwrap_or(today);
    }
}

/// Request body for creating or updating an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Joe",
///   "email": "joe@x.com",
///   "address": "1 Rd",
///   "phone_number": "555-1111",
///   "date_joined": "2026-10-16"
/// }
/// ```
///
/// # Validation
///
/// - `name`, `email`, `address`: Required strings, `null` is rejected
/// - `phone_number`: Optional string
/// - `date_joined`: Optional ISO date, defaults to today when absent
///
/// Unknown keys such as `id` are ignored, so a client may PUT back an object it just read.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountPayload {
    pub name: String,

    pub email: String,

    pub address: String,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub date_joined: Option<NaiveDate>,
}

impl AccountPayload {
    /// Parse an inbound JSON document into a payload.
    ///
    /// # Errors
    ///
    /// - `TypeMismatch` if the document is not a JSON object (scalar, array, null)
    /// - `Validation` if a required field is missing or a field has the wrong type
    pub fn deserialize_record(record: Value) -> Result<Self, AppError> {
        if !record.is_object() {
            return Err(AppError::TypeMismatch(
                "Invalid Account: body of request contained bad or no data".to_string(),
            ));
        }

        serde_json::from_value(record)
            .map_err(|err| AppError::Validation(format!("Invalid Account: {err}")))
    }

    /// Turn the payload into an account ready to be inserted.
    ///
    /// A missing `date_joined` falls back to `today`.
    pub fn into_new_account(self, today: NaiveDate) -> NewAccount {
        NewAccount {
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined.unwrap_or(today),
        }
    }
}

/// A validated account that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

impl NewAccount {
    /// Attach the id the store assigned on insert.
    pub fn with_id(self, id: i64) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined,
        }
    }
}

/// Current local date, used as the default join date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Account {
        Account {
            id: 7,
            name: "Joe".into(),
            email: "joe@x.com".into(),
            address: "1 Rd".into(),
            phone_number: Some("555-1111".into()),
            date_joined: date(2024, 3, 9),
        }
    }

    #[test]
    fn serializes_every_attribute() {
        let record = serde_json::to_value(sample()).unwrap();

        assert_eq!(
            record,
            json!({
                "id": 7,
                "name": "Joe",
                "email": "joe@x.com",
                "address": "1 Rd",
                "phone_number": "555-1111",
                "date_joined": "2024-03-09",
            })
        );
    }

    #[test]
    fn serializes_missing_phone_as_null() {
        let mut account = sample();
        account.phone_number = None;

        let record = serde_json::to_value(&account).unwrap();
        assert_eq!(record["phone_number"], Value::Null);
    }

    #[test]
    fn serialized_record_parses_back() {
        let account = sample();
        let record = serde_json::to_value(&account).unwrap();
        let payload = AccountPayload::deserialize_record(record).unwrap();
        let rebuilt = payload.into_new_account(date(2000, 1, 1)).with_id(account.id);

        assert_eq!(rebuilt, account);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let payload = AccountPayload::deserialize_record(json!({
            "name": "Joe",
            "email": "joe@x.com",
            "address": "1 Rd",
        }))
        .unwrap();

        let account = payload.into_new_account(date(2026, 10, 16));
        assert_eq!(account.phone_number, None);
        assert_eq!(account.date_joined, date(2026, 10, 16));
    }

    #[test]
    fn missing_required_field_is_validation_error() {
        for missing in ["name", "email", "address"] {
            let mut record = json!({
                "name": "Joe",
                "email": "joe@x.com",
                "address": "1 Rd",
            });
            record.as_object_mut().unwrap().remove(missing);

            match AccountPayload::deserialize_record(record) {
                Err(AppError::Validation(msg)) => assert!(msg.contains(missing), "{msg}"),
                other => panic!("expected validation error for {missing}, got {other:?}"),
            }
        }
    }

    #[test]
    fn null_or_non_string_required_field_is_validation_error() {
        let null_name = json!({ "name": null, "email": "joe@x.com", "address": "1 Rd" });
        assert!(matches!(
            AccountPayload::deserialize_record(null_name),
            Err(AppError::Validation(_))
        ));

        let numeric_email = json!({ "name": "Joe", "email": 42, "address": "1 Rd" });
        assert!(matches!(
            AccountPayload::deserialize_record(numeric_email),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn bad_date_is_validation_error() {
        let record = json!({
            "name": "Joe",
            "email": "joe@x.com",
            "address": "1 Rd",
            "date_joined": "yesterday",
        });
        assert!(matches!(
            AccountPayload::deserialize_record(record),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn non_object_is_type_mismatch() {
        for record in [json!("Joe"), json!(12), json!(["Joe"]), Value::Null] {
            assert!(matches!(
                AccountPayload::deserialize_record(record),
                Err(AppError::TypeMismatch(_))
            ));
        }
    }

    #[test]
    fn apply_overwrites_every_field_and_keeps_id() {
        let mut account = sample();
        let payload = AccountPayload::deserialize_record(json!({
            "id": 999,
            "name": "French Fries",
            "email": "fries@x.com",
            "address": "2 Rd",
            "phone_number": "555-2222",
            "date_joined": "2025-01-31",
        }))
        .unwrap();

        account.apply(payload, date(2026, 10, 16));

        assert_eq!(account.id, 7);
        assert_eq!(account.name, "French Fries");
        assert_eq!(account.email, "fries@x.com");
        assert_eq!(account.address, "2 Rd");
        assert_eq!(account.phone_number.as_deref(), Some("555-2222"));
        assert_eq!(account.date_joined, date(2025, 1, 31));
    }

    #[test]
    fn apply_resets_omitted_optional_fields() {
        let mut account = sample();
        let payload = AccountPayload::deserialize_record(json!({
            "name": "Joe",
            "email": "joe@x.com",
            "address": "1 Rd",
        }))
        .unwrap();

        account.apply(payload, date(2026, 10, 16));

        assert_eq!(account.phone_number, None);
        assert_eq!(account.date_joined, date(2026, 10, 16));
    }

    #[test]
    fn apply_clears_phone_number_on_null() {
        let mut account = sample();
        let payload = AccountPayload::deserialize_record(json!({
            "name": "Joe",
            "email": "joe@x.com",
            "address": "1 Rd",
            "phone_number": null,
            "date_joined": "2024-03-09",
        }))
        .unwrap();

        account.apply(payload, date(2026, 10, 16));

        assert_eq!(account.phone_number, None);
        assert_eq!(account.date_joined, date(2024, 3, 9));
    }
}
