//! Admin session flag
//!
//! A placeholder login: no password, the flag and email live in the store's
//! flag collection. Nothing here is an authorization boundary.

use crate::error::StoreResult;
use crate::store::RecordStore;

/// Flag set to `"true"` while an admin is signed in
pub const ADMIN_SESSION_KEY: &str = "admin_session";

/// Flag holding the signed-in admin's email
pub const ADMIN_EMAIL_KEY: &str = "admin_email";

/// Admin session backed by store flags
#[derive(Debug, Clone, Copy)]
pub struct AdminSession<'s> {
    store: &'s dyn RecordStore,
}

impl<'s> AdminSession<'s> {
    /// Bind to a store
    #[inline]
    #[must_use]
    pub fn new(store: &'s dyn RecordStore) -> Self {
        Self { store }
    }

    /// Sign in as `email`
    ///
    /// # Errors
    /// Backend failures.
    pub fn login(&self, email: &str) -> StoreResult<()> {
        self.store.set_flag(ADMIN_SESSION_KEY, "true")?;
        self.store.set_flag(ADMIN_EMAIL_KEY, email)?;
        tracing::info!(email, "admin login");
        Ok(())
    }

    /// Sign out, clearing both flags
    ///
    /// # Errors
    /// Backend failures.
    pub fn logout(&self) -> StoreResult<()> {
        self.store.remove_flag(ADMIN_SESSION_KEY)?;
        self.store.remove_flag(ADMIN_EMAIL_KEY)?;
        tracing::info!("admin logout");
        Ok(())
    }

    /// Email of the signed-in admin, if the session is complete
    ///
    /// # Errors
    /// Backend failures.
    pub fn admin_email(&self) -> StoreResult<Option<String>> {
        if self.store.flag(ADMIN_SESSION_KEY)?.as_deref() != Some("true") {
            return Ok(None);
        }
        Ok(self.store.flag(ADMIN_EMAIL_KEY)?.filter(|e| !e.is_empty()))
    }

    /// Whether an admin is signed in
    ///
    /// Requires both the session flag and a stored email.
    ///
    /// # Errors
    /// Backend failures.
    pub fn is_admin(&self) -> StoreResult<bool> {
        Ok(self.admin_email()?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn login_logout() {
        let store = MemoryStore::new();
        let session = AdminSession::new(&store);
        assert!(!session.is_admin().unwrap());

        session.login("admin@givetransparent.org").unwrap();
        assert!(session.is_admin().unwrap());
        assert_eq!(session.admin_email().unwrap().as_deref(), Some("admin@givetransparent.org"));

        session.logout().unwrap();
        assert!(!session.is_admin().unwrap());
        assert_eq!(session.admin_email().unwrap(), None);
    }

    #[test]
    fn flag_without_email_is_not_admin() {
        let store = MemoryStore::new();
        store.set_flag(ADMIN_SESSION_KEY, "true").unwrap();
        assert!(!AdminSession::new(&store).is_admin().unwrap());
    }

    #[test]
    fn email_without_flag_is_not_admin() {
        let store = MemoryStore::new();
        store.set_flag(ADMIN_SESSION_KEY, "yes").unwrap();
        store.set_flag(ADMIN_EMAIL_KEY, "a@b.c").unwrap();
        assert!(!AdminSession::new(&store).is_admin().unwrap());
    }
}
