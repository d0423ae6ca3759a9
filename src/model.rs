//! Child profile entity and its relational row shape.

use async_graphql::SimpleObject;
use sqlx::FromRow;
use uuid::Uuid;

/// A child profile as exposed over GraphQL.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct ChildProfile {
    /// Server-assigned UUID, immutable after creation.
    pub id: String,
    pub given_name: String,
    /// `null` when no middle name was supplied; an empty string is kept as-is.
    pub middle_name: Option<String>,
    pub family_name: String,
    /// Stored and returned verbatim.
    pub birth_date: String,
}

/// One row of `<schema>.person`.
#[derive(FromRow, Clone, Debug)]
pub struct ProfileRow {
    pub id: String,
    pub given_name: String,
    pub middle_name: Option<String>,
    pub family_name: String,
    pub birthdate: String,
}

impl From<ProfileRow> for ChildProfile {
    fn from(row: ProfileRow) -> Self {
        ChildProfile {
            id: row.id,
            given_name: row.given_name,
            middle_name: row.middle_name,
            family_name: row.family_name,
            birth_date: row.birthdate,
        }
    }
}

/// Client-supplied fields for a new profile.
#[derive(Clone, Debug)]
pub struct NewChildProfile {
    pub given_name: String,
    pub middle_name: Option<String>,
    pub family_name: String,
    pub birth_date: String,
}

impl NewChildProfile {
    pub fn into_profile(self, id: Uuid) -> ChildProfile {
        ChildProfile {
            id: id.to_string(),
            given_name: self.given_name,
            middle_name: self.middle_name,
            family_name: self.family_name,
            birth_date: self.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_middle_name_stays_absent() {
        let row = ProfileRow {
            id: "7a0c3a4e-43f4-4b8e-9d4c-2f1b6f0f9a11".into(),
            given_name: "Ana".into(),
            middle_name: None,
            family_name: "Lee".into(),
            birthdate: "2020-01-01".into(),
        };
        let profile = ChildProfile::from(row);
        assert_eq!(profile.middle_name, None);
        assert_eq!(profile.birth_date, "2020-01-01");
    }

    #[test]
    fn into_profile_keeps_fields_verbatim() {
        let id = Uuid::new_v4();
        let profile = NewChildProfile {
            given_name: "Ana".into(),
            middle_name: Some(String::new()),
            family_name: "Lee".into(),
            birth_date: "01/02/2020".into(),
        }
        .into_profile(id);
        assert_eq!(profile.id, id.to_string());
        assert_eq!(profile.middle_name.as_deref(), Some(""));
        assert_eq!(profile.birth_date, "01/02/2020");
    }
}
