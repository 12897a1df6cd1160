//! Studies and their events.

use medlog_core::entities::{Event, EventCreate, Study, StudyCreate};

use crate::client::MedlogClient;
use crate::error::ApiError;
use crate::page::Listing;
use crate::request::{ApiRequest, segment};

impl MedlogClient {
    /// `GET study`, replacing the cached study list.
    ///
    /// # Errors
    ///
    /// See [`Self::send_authed`].
    pub async fn list_studies(&self) -> Result<Vec<Study>, ApiError> {
        let studies = self
            .fetch::<Listing<Study>>(ApiRequest::get("study"))
            .await?
            .into_items();
        tracing::debug!(count = studies.len(), "studies loaded");
        self.state.studies.write().await.studies = studies.clone();
        Ok(studies)
    }

    /// `POST study` and add the result to the cache.
    ///
    /// # Errors
    ///
    /// See [`Self::send_authed`].
    pub async fn create_study(&self, body: &StudyCreate) -> Result<Study, ApiError> {
        let study: Study = self.fetch(ApiRequest::post_json("study", body)?).await?;
        self.state.studies.write().await.studies.push(study.clone());
        Ok(study)
    }

    /// Look a study up in the cache. The list is only fetched when the
    /// cache is empty.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] if no cached study has `id`, plus the errors
    /// of [`Self::list_studies`] when the cache had to be filled.
    pub async fn get_study(&self, id: &str) -> Result<Study, ApiError> {
        let cache_empty = self.state.studies.read().await.studies.is_empty();
        if cache_empty {
            self.list_studies().await?;
        }
        self.state
            .studies
            .read()
            .await
            .find(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                kind: "study",
                id: id.to_string(),
            })
    }

    /// `GET study/{study_id}/event`.
    ///
    /// # Errors
    ///
    /// See [`Self::send_authed`].
    pub async fn list_events(&self, study_id: &str) -> Result<Vec<Event>, ApiError> {
        let path = format!("study/{}/event", segment(study_id));
        Ok(self
            .fetch::<Listing<Event>>(ApiRequest::get(path))
            .await?
            .into_items())
    }

    /// Validate `name` and `POST study/{study_id}/event`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Core`] for an invalid name, else see [`Self::send_authed`].
    pub async fn create_event(&self, study_id: &str, name: &str) -> Result<Event, ApiError> {
        let body = EventCreate::new(name)?;
        let path = format!("study/{}/event", segment(study_id));
        self.fetch(ApiRequest::post_json(path, &body)?).await
    }
}
