//! Drug search and the field definitions that describe drug attributes.

use chrono::Utc;
use medlog_core::entities::DrugSearchPage;
use medlog_core::enums::FieldPurpose;
use medlog_core::field_def::{CategorizedFields, FieldDefDocument, categorize};

use crate::client::MedlogClient;
use crate::error::ApiError;
use crate::request::ApiRequest;

impl MedlogClient {
    /// `GET drug/field_def`, filtered and projected for `purpose`.
    ///
    /// # Errors
    ///
    /// Only transport and HTTP errors of the fetch; missing buckets are
    /// empty.
    pub async fn field_definitions(
        &self,
        purpose: FieldPurpose,
    ) -> Result<CategorizedFields, ApiError> {
        let document: FieldDefDocument = self.fetch(ApiRequest::get("drug/field_def")).await?;
        Ok(categorize(&document, purpose))
    }

    /// `GET drug/search`. `limit` defaults to `general.default_limit`.
    ///
    /// # Errors
    ///
    /// See [`Self::send_authed`].
    pub async fn search_drugs(
        &self,
        term: &str,
        offset: u64,
        limit: Option<u32>,
    ) -> Result<DrugSearchPage, ApiError> {
        let request = ApiRequest::get("drug/search")
            .query("search_term", term)
            .query("only_current_medications", self.only_current_medications)
            .query("offset", offset)
            .query("limit", limit.unwrap_or(self.default_limit));
        let page: DrugSearchPage = self.fetch(request).await?;
        tracing::debug!(term, total = page.total_count, count = page.count, "drug search");
        self.state.drug.write().await.last_fetch_time = Some(Utc::now());
        Ok(page)
    }
}
