use chrono::{TimeZone, Utc};
use rand::Rng;

use crate::models::UserProfile;
use crate::store::{ProfileStore, StoreError};

/// Holds at most one user profile for the lifetime of the process.
///
/// This is deliberately a stub: passwords are never checked and no error
/// conditions beyond store failures are modeled. Constructed once at
/// startup, torn down explicitly by [`SessionState::logout`].
#[derive(Debug)]
pub struct SessionState {
    profile: Option<UserProfile>,
    store: ProfileStore,
}

impl SessionState {
    /// Build the session container, resuming any persisted profile the
    /// way the browser demo resumed from local storage.
    pub fn new(store: ProfileStore) -> Result<Self, StoreError> {
        let profile = store.load()?;
        Ok(SessionState { profile, store })
    }

    /// Always succeeds; the password is ignored. Fabricates the fixed
    /// demo identity bound to the given email, persists it and replaces
    /// any existing profile.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<UserProfile, StoreError> {
        let profile = UserProfile {
            id: "1".to_string(),
            name: "Ashish Kumar".to_string(),
            email: email.to_string(),
            account_number: "ZDH123456".to_string(),
            join_date: Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).single().unwrap_or_else(Utc::now),
        };
        self.store.save(&profile)?;
        self.profile = Some(profile.clone());
        Ok(profile)
    }

    /// Like login, but with a fresh id and a random-looking account
    /// number.
    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<UserProfile, StoreError> {
        let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000);
        let profile = UserProfile {
            id: Utc::now().timestamp_millis().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            account_number: format!("ZDH{:06}", suffix),
            join_date: Utc::now(),
        };
        self.store.save(&profile)?;
        self.profile = Some(profile.clone());
        Ok(profile)
    }

    /// Clear the in-memory profile and delete the persisted copy.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.profile = None;
        self.store.clear()
    }

    pub fn current(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(dir: &tempfile::TempDir) -> SessionState {
        SessionState::new(ProfileStore::new(dir.path().join("profile.json"))).unwrap()
    }

    #[test]
    fn login_fabricates_demo_profile() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(&dir);
        assert!(!s.is_authenticated());

        let profile = s.login("demo@zerodha.com", "password").unwrap();
        assert_eq!(profile.account_number, "ZDH123456");
        assert_eq!(profile.email, "demo@zerodha.com");
        assert_eq!(profile.name, "Ashish Kumar");
        assert!(s.is_authenticated());
    }

    #[test]
    fn login_replaces_existing_profile() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(&dir);
        s.login("first@example.com", "x").unwrap();
        s.login("second@example.com", "x").unwrap();
        assert_eq!(s.current().unwrap().email, "second@example.com");
    }

    #[test]
    fn signup_generates_account_number() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(&dir);
        let profile = s.signup("Priya", "priya@example.com", "pw").unwrap();
        assert!(profile.account_number.starts_with("ZDH"));
        assert_eq!(profile.account_number.len(), 9);
        assert_eq!(profile.name, "Priya");
        assert!(s.is_authenticated());
    }

    #[test]
    fn logout_clears_profile_and_persisted_copy() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        let mut s = SessionState::new(store.clone()).unwrap();
        s.login("demo@zerodha.com", "password").unwrap();
        assert!(store.exists());

        s.logout().unwrap();
        assert!(!s.is_authenticated());
        assert!(s.current().is_none());
        assert!(!store.exists());
    }

    #[test]
    fn session_resumes_from_store() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut s = session(&dir);
            s.login("demo@zerodha.com", "password").unwrap();
        }
        let resumed = session(&dir);
        assert!(resumed.is_authenticated());
        assert_eq!(resumed.current().unwrap().email, "demo@zerodha.com");
    }
}
