//! Per-resource convenience endpoints over [`ApiClient`]

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api::ApiClient;
use crate::models::{
    Achievement, AchievementPayload, Category, CategoryPayload, DashboardStats, ProgressPayload,
    ProgressRecord, RecordId, Reward, RewardPayload,
};
use crate::utils::errors::ApiResult;

/// CRUD calls for one REST collection, typed by its record and payload
pub struct Endpoint<'a, T, P> {
    client: &'a ApiClient,
    collection: &'static str,
    _types: PhantomData<fn() -> (T, P)>,
}

impl<'a, T, P> Endpoint<'a, T, P>
where
    T: DeserializeOwned,
    P: Serialize,
{
    pub fn new(client: &'a ApiClient, collection: &'static str) -> Self {
        Self {
            client,
            collection,
            _types: PhantomData,
        }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub async fn list(&self) -> ApiResult<Vec<T>> {
        self.client.get(self.collection).await
    }

    pub async fn get(&self, id: &RecordId) -> ApiResult<T> {
        self.client.get(&self.item_path(id)).await
    }

    pub async fn create(&self, payload: &P) -> ApiResult<Value> {
        self.client.post(self.collection, payload).await
    }

    /// Partial update of an existing record
    pub async fn update(&self, id: &RecordId, payload: &P) -> ApiResult<Value> {
        self.client.patch(&self.item_path(id), payload).await
    }

    pub async fn delete(&self, id: &RecordId) -> ApiResult<()> {
        self.client.delete(&self.item_path(id)).await
    }

    fn item_path(&self, id: &RecordId) -> String {
        format!("{}/{}", self.collection, id.path_segment())
    }
}

impl Endpoint<'_, ProgressRecord, ProgressPayload> {
    /// Progress records of a single user
    pub async fn by_user(&self, user_id: &RecordId) -> ApiResult<Vec<ProgressRecord>> {
        self.client
            .get(&format!("{}/user/{}", self.collection, user_id.path_segment()))
            .await
    }
}

impl ApiClient {
    pub fn categories(&self) -> Endpoint<'_, Category, CategoryPayload> {
        Endpoint::new(self, "/categories")
    }

    pub fn achievements(&self) -> Endpoint<'_, Achievement, AchievementPayload> {
        Endpoint::new(self, "/achievements")
    }

    pub fn rewards(&self) -> Endpoint<'_, Reward, RewardPayload> {
        Endpoint::new(self, "/rewards")
    }

    pub fn progress(&self) -> Endpoint<'_, ProgressRecord, ProgressPayload> {
        Endpoint::new(self, "/progress")
    }

    /// Aggregate statistics for the dashboard
    pub async fn stats(&self) -> ApiResult<DashboardStats> {
        self.get("/api/stats").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_item_path_encodes_id() {
        let client = ApiClient::new(&Settings::default().api).unwrap();
        let endpoint = client.rewards();
        assert_eq!(endpoint.collection(), "/rewards");
        assert_eq!(endpoint.item_path(&RecordId::new("a b")), "/rewards/a%20b");
    }
}
