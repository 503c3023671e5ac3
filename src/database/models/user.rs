use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

use super::{FavoriteView, Resource};

/// Persisted user row. The password column holds a salted hash, never plain text.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

impl Resource for User {
    const TABLE: &'static str = "users";
    const LABEL: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /users`
#[derive(Debug, Default, Deserialize)]
pub struct UserInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated user ready for insertion
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

/// Client-facing user: `{id, email, favorites}`.
///
/// A user without a favorites row serializes `favorites` as an empty array,
/// otherwise as the favorites object.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: i64,
    pub email: String,
    #[serde(serialize_with = "favorites_or_empty")]
    pub favorites: Option<FavoriteView>,
}

impl UserView {
    pub fn new(user: User, favorites: Option<FavoriteView>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            favorites,
        }
    }
}

fn favorites_or_empty<S: Serializer>(value: &Option<FavoriteView>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(view) => view.serialize(serializer),
        None => Vec::<()>::new().serialize(serializer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        User {
            id: 7,
            email: "luke@tatooine.net".to_string(),
            password: "salt$hash".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn user_without_favorites_serializes_empty_list() {
        let value = serde_json::to_value(UserView::new(user(), None)).unwrap();
        assert_eq!(value, json!({ "id": 7, "email": "luke@tatooine.net", "favorites": [] }));
    }

    #[test]
    fn user_with_favorites_serializes_object_and_hides_password() {
        let favorites = FavoriteView {
            user_id: 7,
            people: Vec::new(),
            planets: Vec::new(),
            vehicles: Vec::new(),
        };
        let view = UserView::new(user(), Some(favorites));
        let value = serde_json::to_value(view).unwrap();
        assert_eq!(value["favorites"]["user_id"], json!(7));
        assert_eq!(value["favorites"]["people"], json!([]));
        assert!(value.get("password").is_none());
        assert!(value.get("is_active").is_none());
    }
}
