use std::sync::Arc;
use tracing::info;

use super::ServiceError;
use crate::auth::{hash_password, MIN_PASSWORD_LENGTH};
use crate::database::models::{required, NewUser, Resource, User, UserInput, UserView};
use crate::database::{DatabaseError, Store};

const DUPLICATE_USER: &str = "User already exist";

pub struct UserService {
    store: Arc<dyn Store>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<UserView>, ServiceError> {
        let users = self.store.list_users().await?;
        let mut views = Vec::with_capacity(users.len());
        for user in users {
            views.push(self.view(user).await?);
        }
        Ok(views)
    }

    pub async fn get(&self, user_id: i64) -> Result<UserView, ServiceError> {
        let user = self
            .store
            .get_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::missing(User::LABEL, user_id))?;
        self.view(user).await
    }

    pub async fn create(&self, input: UserInput) -> Result<UserView, ServiceError> {
        let (email, password) = match (required(input.email), input.password.as_deref()) {
            (Some(email), Some(password)) if !password.is_empty() => (email, password),
            _ => {
                return Err(ServiceError::Invalid(
                    "You need to provide an email and a password".to_string(),
                ))
            }
        };

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ServiceError::Invalid(format!(
                "Your password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        if self.store.find_user_by_email(&email).await?.is_some() {
            return Err(ServiceError::AlreadyExists(DUPLICATE_USER.to_string()));
        }

        let new_user = NewUser {
            email,
            password_hash: hash_password(password),
        };
        let user = match self.store.insert_user(new_user).await {
            Ok(user) => user,
            Err(DatabaseError::Conflict(_)) => return Err(ServiceError::AlreadyExists(DUPLICATE_USER.to_string())),
            Err(e) => return Err(e.into()),
        };

        info!(user_id = user.id, "Created user");
        // A new user never has favorites yet
        Ok(UserView::new(user, None))
    }

    async fn view(&self, user: User) -> Result<UserView, ServiceError> {
        let favorites = match self.store.find_favorite(user.id).await? {
            Some(favorite) => Some(self.store.favorite_view(favorite).await?),
            None => None,
        };
        Ok(UserView::new(user, favorites))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;
    use crate::database::MemoryStore;

    fn service() -> (Arc<MemoryStore>, UserService) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), UserService::new(store))
    }

    fn input(email: Option<&str>, password: Option<&str>) -> UserInput {
        UserInput {
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    #[tokio::test]
    async fn creates_user_with_hashed_password() {
        let (store, users) = service();
        let view = users.create(input(Some("leia@alderaan.org"), Some("h0peful"))).await.unwrap();
        assert_eq!(view.email, "leia@alderaan.org");
        assert!(view.favorites.is_none());

        let stored = store.get_user(view.id).await.unwrap().unwrap();
        assert!(stored.is_active);
        assert_ne!(stored.password, "h0peful");
        assert!(verify_password("h0peful", &stored.password));
    }

    #[tokio::test]
    async fn rejects_missing_fields_and_short_passwords() {
        let (_, users) = service();
        let err = users.create(input(None, Some("secret1"))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(ref m) if m == "You need to provide an email and a password"));

        let err = users.create(input(Some("a@b.c"), None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(_)));

        let err = users.create(input(Some("a@b.c"), Some("12345"))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(ref m) if m.contains("at least 6")));

        assert!(users.create(input(Some("a@b.c"), Some("123456"))).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let (_, users) = service();
        users.create(input(Some("han@falcon.io"), Some("kessel12"))).await.unwrap();
        let err = users.create(input(Some("han@falcon.io"), Some("kessel12"))).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(ref m) if m == "User already exist"));
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let (_, users) = service();
        let err = users.get(42).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "User with id #42 not exist in database"));
    }
}
