use tracing::info;

use crate::{
    error::{Error, Result},
    types::user::User,
};

/// Registered users in the order they signed up.
#[derive(Default, Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn is_registered(&self, username: &str) -> bool {
        self.users.iter().any(|user| user.username == username)
    }

    pub fn verify_credentials(&self, username: &str, password: &str) -> bool {
        self.users
            .iter()
            .any(|user| user.username == username && user.password == password)
    }

    pub fn register(&mut self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() {
            return Err(Error::MissingField("username"));
        }
        if password.is_empty() {
            return Err(Error::MissingField("password"));
        }
        if self.is_registered(username) {
            return Err(Error::AlreadyExists(username.to_string()));
        }
        self.users.push(User::new(username, password));
        info!("Registered {username}, {} users now.", self.users.len());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
