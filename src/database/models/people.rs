use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{required, Named, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct People {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
}

impl Resource for People {
    const TABLE: &'static str = "people";
    const LABEL: &'static str = "People";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for People {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Body of `POST /people`
#[derive(Debug, Default, Deserialize)]
pub struct PeopleInput {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    #[serde(alias = "weight")]
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPeople {
    pub name: String,
    pub gender: String,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
}

impl PeopleInput {
    /// `None` when `name` or `gender` is missing or blank.
    pub fn into_new(self) -> Option<NewPeople> {
        let name = required(self.name)?;
        let gender = required(self.gender)?;
        Some(NewPeople {
            name,
            gender,
            height: self.height,
            mass: self.mass,
            hair_color: self.hair_color,
            skin_color: self.skin_color,
            eye_color: self.eye_color,
            birth_year: self.birth_year,
        })
    }
}

impl NewPeople {
    pub fn with_id(self, id: i64) -> People {
        People {
            id,
            name: self.name,
            gender: self.gender,
            height: self.height,
            mass: self.mass,
            hair_color: self.hair_color,
            skin_color: self.skin_color,
            eye_color: self.eye_color,
            birth_year: self.birth_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn requires_name_and_gender() {
        let input: PeopleInput = serde_json::from_value(json!({ "name": "Leia Organa" })).unwrap();
        assert!(input.into_new().is_none());

        let input: PeopleInput = serde_json::from_value(json!({ "name": "  ", "gender": "female" })).unwrap();
        assert!(input.into_new().is_none());
    }

    #[test]
    fn accepts_weight_as_mass() {
        let input: PeopleInput =
            serde_json::from_value(json!({ "name": "C-3PO", "gender": "n/a", "weight": 75.0 })).unwrap();
        let new = input.into_new().unwrap();
        assert_eq!(new.mass, Some(75.0));

        let value = serde_json::to_value(new.with_id(2)).unwrap();
        assert_eq!(value["id"], json!(2));
        assert_eq!(value["mass"], json!(75.0));
        assert!(value.get("weight").is_none());
    }

    #[test]
    fn keeps_names_as_sent() {
        let input: PeopleInput =
            serde_json::from_value(json!({ "name": "  Leia Organa ", "gender": " female" })).unwrap();
        let new = input.into_new().unwrap();
        assert_eq!(new.name, "  Leia Organa ");
        assert_eq!(new.gender, " female");
    }
}
