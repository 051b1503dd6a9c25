use hotel_types::User;
use std::rc::Rc;

use crate::keys;
use crate::{KeyValueStore, Result};

/// Session record accessor.
///
/// `local` is the persistent store (`localStorage`), `transient` the
/// per-tab store (`sessionStorage`) that logout wipes entirely.
#[derive(Clone)]
pub struct SessionStore {
    local: Rc<dyn KeyValueStore>,
    transient: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(local: Rc<dyn KeyValueStore>, transient: Rc<dyn KeyValueStore>) -> Self {
        Self { local, transient }
    }

    /// The signed-in user, if the stored record is readable and complete.
    ///
    /// A corrupt or incomplete record is removed so later checks see an
    /// anonymous session instead of failing again.
    pub fn current_user(&self) -> Option<User> {
        let raw = match self.local.get_item(keys::CURRENT_USER) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::error!(error = %err, "failed to read session record");
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) if user.is_complete() => Some(user),
            Ok(_) => {
                tracing::warn!("incomplete user in session record, discarding");
                self.discard_record();
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "unreadable session record, discarding");
                self.discard_record();
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Persist `user` as the signed-in user, including the legacy keys older pages read.
    pub fn store_user(&self, user: &User) -> Result<()> {
        self.local
            .set_item(keys::CURRENT_USER, &serde_json::to_string(user)?)?;
        self.local.set_item("currentUser", &serde_json::to_string(user)?)?;
        self.local.set_item("isLoggedIn", "true")?;
        self.local.set_item("userEmail", &user.email)?;
        self.local.set_item("userName", &user.name)?;
        self.local.set_item("userId", user.id.as_str())?;
        Ok(())
    }

    /// Remove every session key (primary and legacy) and wipe the per-tab store.
    pub fn logout(&self) -> Result<()> {
        for key in keys::session_keys() {
            self.local.remove_item(key)?;
        }
        self.transient.clear()?;
        tracing::info!("session closed");
        Ok(())
    }

    fn discard_record(&self) {
        if let Err(err) = self.local.remove_item(keys::CURRENT_USER) {
            tracing::error!(error = %err, "failed to discard session record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use hotel_types::{Role, UserId};

    fn stores() -> (Rc<MemoryStore>, Rc<MemoryStore>, SessionStore) {
        let local = Rc::new(MemoryStore::new());
        let transient = Rc::new(MemoryStore::new());
        let session = SessionStore::new(local.clone(), transient.clone());
        (local, transient, session)
    }

    fn ana() -> User {
        User {
            id: UserId::new("u1"),
            name: "Ana López".to_string(),
            email: "ana@example.com".to_string(),
            role: Role::Ordinary,
        }
    }

    #[test]
    fn test_anonymous_without_record() {
        let (_, _, session) = stores();
        assert!(!session.is_authenticated());
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_store_then_read_user() -> Result<()> {
        let (local, _, session) = stores();
        session.store_user(&ana())?;

        assert_eq!(session.current_user(), Some(ana()));
        assert_eq!(local.get_item("userId")?.as_deref(), Some("u1"));
        Ok(())
    }

    #[test]
    fn test_corrupt_record_is_discarded() -> Result<()> {
        let (local, _, session) = stores();
        local.set_item(keys::CURRENT_USER, "{not json")?;

        assert_eq!(session.current_user(), None);
        assert_eq!(local.get_item(keys::CURRENT_USER)?, None);
        Ok(())
    }

    #[test]
    fn test_incomplete_record_is_discarded() -> Result<()> {
        let (local, _, session) = stores();
        local.set_item(
            keys::CURRENT_USER,
            r#"{"id": "u1", "name": "", "email": "ana@example.com"}"#,
        )?;

        assert!(!session.is_authenticated());
        assert_eq!(local.get_item(keys::CURRENT_USER)?, None);
        Ok(())
    }

    #[test]
    fn test_logout_clears_every_session_key() -> Result<()> {
        let (local, transient, session) = stores();
        session.store_user(&ana())?;
        local.set_item(keys::BOOKINGS, "[]")?;
        transient.set_item("lastFilter", "past")?;

        session.logout()?;

        for key in keys::session_keys() {
            assert_eq!(local.get_item(key)?, None, "{} should be cleared", key);
        }
        assert!(transient.is_empty());
        assert_eq!(local.get_item(keys::BOOKINGS)?.as_deref(), Some("[]"));
        assert!(!session.is_authenticated());
        Ok(())
    }
}
