//! Application state shared by the API client and the front end.
//!
//! Each store sits behind its own `Arc<RwLock<_>>`; cloning [`AppState`]
//! hands out another reference to the same stores.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use medlog_core::entities::{Interview, Study, User};
use medlog_core::intake::IntakeDraft;
use medlog_core::wizard::InterviewWizard;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::AuthError;
use crate::session::SessionState;
use crate::state_store::{StateStore, StoreKey};

/// The current user, overwritten wholesale on each `user/me` fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub user: Option<User>,
    pub is_admin: bool,
}

impl UserState {
    /// Replace the user and derive the admin flag from the role list.
    pub fn set_user(&mut self, user: User, admin_role_name: &str) {
        self.is_admin = user.has_role(admin_role_name);
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyState {
    pub studies: Vec<Study>,
    /// Event id selected for new interviews.
    pub event: Option<String>,
}

impl StudyState {
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Study> {
        self.studies.iter().find(|study| study.id == id)
    }
}

/// The intake currently being recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugState {
    pub draft: IntakeDraft,
    /// In-progress interview wizard, if one was left unfinished.
    pub wizard: Option<InterviewWizard>,
    pub last_fetch_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbandState {
    pub proband_id: Option<String>,
    /// Interview created last; follow-up intakes default to it.
    #[serde(default)]
    pub interview_id: Option<String>,
    pub interviews: Option<Vec<Interview>>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Arc<RwLock<SessionState>>,
    pub user: Arc<RwLock<UserState>>,
    pub studies: Arc<RwLock<StudyState>>,
    pub drug: Arc<RwLock<DrugState>>,
    pub proband: Arc<RwLock<ProbandState>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every store from `store`; missing stores start empty.
    #[must_use]
    pub fn load_from(store: &StateStore) -> Self {
        Self {
            session: shared(store.load(StoreKey::Token)),
            user: shared(store.load(StoreKey::User)),
            studies: shared(store.load(StoreKey::Study)),
            drug: shared(store.load(StoreKey::Drug)),
            proband: shared(store.load(StoreKey::Proband)),
        }
    }

    /// Write every store to `store`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StateStoreError` on the first store that fails to
    /// write.
    pub async fn persist_to(&self, store: &StateStore) -> Result<(), AuthError> {
        store.save(StoreKey::Token, &*self.session.read().await)?;
        store.save(StoreKey::User, &*self.user.read().await)?;
        store.save(StoreKey::Study, &*self.studies.read().await)?;
        store.save(StoreKey::Drug, &*self.drug.read().await)?;
        store.save(StoreKey::Proband, &*self.proband.read().await)?;
        Ok(())
    }

    /// Drop the session and the user, as on logout or a failed refresh.
    pub async fn clear_auth(&self) {
        self.session.write().await.reset();
        self.user.write().await.clear();
    }

    /// Drop everything, including cached studies and drafts.
    pub async fn clear_all(&self) {
        self.clear_auth().await;
        *self.studies.write().await = StudyState::default();
        *self.drug.write().await = DrugState::default();
        *self.proband.write().await = ProbandState::default();
    }
}

fn shared<T: Default>(value: Option<T>) -> Arc<RwLock<T>> {
    Arc::new(RwLock::new(value.unwrap_or_default()))
}
