//! Account business logic - Registration and the identity check.
//!
//! Authentication yields a request-scoped [`Identity`] that is passed
//! explicitly into every store and ledger call needing one; there is no
//! ambient session state. The ledger and stores trust the identity
//! unconditionally.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::info;

/// Authenticated caller context for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The authenticated user's id
    pub user_id: i64,
    /// The authenticated user's login name
    pub username: String,
    /// Whether the user may perform admin operations
    pub is_admin: bool,
}

impl Identity {
    /// Errors with [`Error::AdminRequired`] unless the caller is an admin.
    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(Error::AdminRequired)
        }
    }

    fn is_admin(&self) -> bool {
        self.is_admin
    }
}

impl From<&user::Model> for Identity {
    fn from(user: &user::Model) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
        }
    }
}

/// Registers a new customer account with zero balance.
///
/// Trims both fields, rejects empty input, and rejects usernames that are
/// already taken.
pub async fn register(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<user::Model> {
    let username = username.trim();
    let password = password.trim();

    if username.is_empty() || password.is_empty() {
        return Err(Error::Validation {
            message: "Username and password are required".to_string(),
        });
    }

    let taken = User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?;
    if taken.is_some() {
        return Err(Error::UsernameTaken {
            username: username.to_string(),
        });
    }

    let account = user::ActiveModel {
        username: Set(username.to_string()),
        password: Set(password.to_string()),
        is_admin: Set(false),
        balance: Set(0),
        ..Default::default()
    };
    account.insert(db).await.map_err(Into::into)
}

/// Checks credentials and yields an [`Identity`], or `None` when denied.
pub async fn authenticate(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<Option<Identity>> {
    let user = User::find()
        .filter(user::Column::Username.eq(username.trim()))
        .filter(user::Column::Password.eq(password.trim()))
        .one(db)
        .await?;
    Ok(user.as_ref().map(Identity::from))
}

/// Like [`authenticate`] but additionally requires the admin flag.
/// A valid customer credential is still denied here.
pub async fn authenticate_admin(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<Option<Identity>> {
    Ok(authenticate(db, username, password)
        .await?
        .filter(Identity::is_admin))
}

/// Retrieves a user by id, for balance and profile display.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Seeds the default admin account when no admin exists yet.
///
/// Credentials come from `ADMIN_USERNAME` / `ADMIN_PASSWORD`, defaulting to
/// `admin` / `1234` like the original first-run bootstrap. Idempotent.
pub async fn ensure_admin_account(db: &DatabaseConnection) -> Result<()> {
    let existing = User::find()
        .filter(user::Column::IsAdmin.eq(true))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "1234".to_string());

    let admin = user::ActiveModel {
        username: Set(username.clone()),
        password: Set(password),
        is_admin: Set(true),
        balance: Set(0),
        ..Default::default()
    };
    admin.insert(db).await?;
    info!(username, "created default admin account");
    Ok(())
}
