//! The four managed collections

use async_trait::async_trait;

use super::forms::{AchievementForm, CategoryForm, ProgressForm, RewardForm};
use super::page::Resource;
use crate::models::{
    Achievement, AchievementPayload, Category, CategoryPayload, ProgressPayload, ProgressRecord,
    RecordId, Reward, RewardPayload,
};
use crate::services::{ApiClient, Endpoint};
use crate::utils::errors::ApiResult;

pub struct Categories;

#[async_trait]
impl Resource for Categories {
    type Record = Category;
    type Form = CategoryForm;
    type Lookups = ();

    const NAME: &'static str = "categories";
    const PATH: &'static str = "/categories";
    const TITLE: &'static str = "Категории";
    const DELETE_PROMPT: &'static str = "Вы уверены, что хотите удалить эту категорию?";

    fn endpoint(api: &ApiClient) -> Endpoint<'_, Category, CategoryPayload> {
        api.categories()
    }

    async fn fetch(api: &ApiClient, _filter: Option<&RecordId>) -> ApiResult<(Vec<Category>, ())> {
        Ok((api.categories().list().await?, ()))
    }
}

pub struct Achievements;

#[async_trait]
impl Resource for Achievements {
    type Record = Achievement;
    type Form = AchievementForm;
    type Lookups = Vec<Category>;

    const NAME: &'static str = "achievements";
    const PATH: &'static str = "/achievements";
    const TITLE: &'static str = "Достижения";
    const DELETE_PROMPT: &'static str = "Вы уверены, что хотите удалить это достижение?";

    fn endpoint(api: &ApiClient) -> Endpoint<'_, Achievement, AchievementPayload> {
        api.achievements()
    }

    async fn fetch(
        api: &ApiClient,
        _filter: Option<&RecordId>,
    ) -> ApiResult<(Vec<Achievement>, Vec<Category>)> {
        let achievements = api.achievements();
        let categories = api.categories();
        futures::try_join!(achievements.list(), categories.list())
    }
}

pub struct Rewards;

#[async_trait]
impl Resource for Rewards {
    type Record = Reward;
    type Form = RewardForm;
    type Lookups = Vec<Achievement>;

    const NAME: &'static str = "rewards";
    const PATH: &'static str = "/rewards";
    const TITLE: &'static str = "Награды";
    const DELETE_PROMPT: &'static str = "Вы уверены, что хотите удалить эту награду?";

    fn endpoint(api: &ApiClient) -> Endpoint<'_, Reward, RewardPayload> {
        api.rewards()
    }

    async fn fetch(
        api: &ApiClient,
        _filter: Option<&RecordId>,
    ) -> ApiResult<(Vec<Reward>, Vec<Achievement>)> {
        let rewards = api.rewards();
        let achievements = api.achievements();
        futures::try_join!(rewards.list(), achievements.list())
    }
}

pub struct Progress;

#[async_trait]
impl Resource for Progress {
    type Record = ProgressRecord;
    type Form = ProgressForm;
    type Lookups = Vec<Achievement>;

    const NAME: &'static str = "progress";
    const PATH: &'static str = "/progress";
    const TITLE: &'static str = "Прогресс пользователей";
    const DELETE_PROMPT: &'static str = "Вы уверены, что хотите удалить эту запись прогресса?";

    fn endpoint(api: &ApiClient) -> Endpoint<'_, ProgressRecord, ProgressPayload> {
        api.progress()
    }

    async fn fetch(
        api: &ApiClient,
        filter: Option<&RecordId>,
    ) -> ApiResult<(Vec<ProgressRecord>, Vec<Achievement>)> {
        let progress = api.progress();
        let achievements = api.achievements();
        match filter {
            Some(user_id) => futures::try_join!(progress.by_user(user_id), achievements.list()),
            None => futures::try_join!(progress.list(), achievements.list()),
        }
    }
}
