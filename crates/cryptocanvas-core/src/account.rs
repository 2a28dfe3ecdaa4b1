//! Sign up, sign in and sign out against a [`CredentialStore`].

use log::{debug, info};

use cryptocanvas_seal::{hash_password, verify_password, SealError};

use crate::error::CanvasError;
use crate::store::CredentialStore;
use crate::Result;

/// Well formed hash with the default cost parameters that matches no password,
/// verified against for unknown identifiers so every sign in costs one Argon2 run.
const UNKNOWN_ACCOUNT_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$3R+/tVdnuF2e72uDnowSRg$zV9Jwn7fNJsq1svOs0h/mbIcQb2hQgkGUXE9RJTHyow";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: u64,
    pub identifier: String,
    pub name: String,
}

pub struct Authenticator<S: CredentialStore> {
    store: S,
    session: Option<Session>,
}

impl<S: CredentialStore> Authenticator<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: None,
        }
    }

    /// creates an account and returns its user id, the password is only kept as hash
    pub fn sign_up(&mut self, identifier: &str, name: &str, password: &str) -> Result<u64> {
        if identifier.trim().is_empty() || name.trim().is_empty() {
            return Err(CanvasError::InvalidIdentifier);
        }
        if self.store.lookup(identifier)?.is_some() {
            return Err(CanvasError::AccountExists);
        }

        let password_hash = hash_password(password.as_bytes())?;
        let user_id = self.store.store(identifier, name, &password_hash)?;
        info!("Signed up account {user_id}");

        Ok(user_id)
    }

    /// unknown identifiers, wrong and empty passwords all end up as [`CanvasError::InvalidLogin`]
    pub fn sign_in(&mut self, identifier: &str, password: &str) -> Result<&Session> {
        if password.is_empty() {
            return Err(CanvasError::InvalidLogin);
        }
        let Some(record) = self.store.lookup(identifier)? else {
            debug!("Sign in for an unknown identifier");
            let _ = verify_password(password.as_bytes(), UNKNOWN_ACCOUNT_HASH);
            return Err(CanvasError::InvalidLogin);
        };

        match verify_password(password.as_bytes(), &record.password_hash) {
            Ok(()) => {}
            Err(SealError::AuthenticationFailure) => return Err(CanvasError::InvalidLogin),
            Err(e) => return Err(e.into()),
        }
        info!("Signed in account {}", record.user_id);

        Ok(self.session.insert(Session {
            user_id: record.user_id,
            identifier: identifier.to_string(),
            name: record.name,
        }))
    }

    pub fn sign_out(&mut self) -> Option<Session> {
        self.session.take()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
