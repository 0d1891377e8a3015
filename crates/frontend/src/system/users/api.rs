use contracts::common::{
    ApiError, EntityStatus, ItemEnvelope, ListEnvelope, ListQuery, Pagination, StatusPayload,
};
use contracts::system::user::{User, UserDraft};
use uuid::Uuid;

use crate::shared::api_client::{self, query_string};
use crate::shared::list_controller::EntityApi;

const BASE: &str = "/api/system/users";

#[derive(Clone, Copy)]
pub struct UsersApi;

impl EntityApi for UsersApi {
    type Entity = User;
    type Draft = UserDraft;

    fn label(self) -> &'static str {
        "User"
    }

    async fn fetch_page(self, query: ListQuery) -> Result<(Vec<User>, Pagination), ApiError> {
        let envelope: ListEnvelope<User> =
            api_client::get_json(&format!("{}{}", BASE, query_string(&query))).await?;
        Ok((envelope.data, envelope.pagination))
    }

    async fn create(self, draft: UserDraft) -> Result<User, ApiError> {
        let envelope: ItemEnvelope<User> = api_client::post_json(BASE, &draft).await?;
        Ok(envelope.data)
    }

    async fn update(self, uuid: Uuid, draft: UserDraft) -> Result<User, ApiError> {
        let envelope: ItemEnvelope<User> =
            api_client::put_json(&format!("{}/{}", BASE, uuid), &draft).await?;
        Ok(envelope.data)
    }

    async fn remove(self, uuid: Uuid) -> Result<(), ApiError> {
        api_client::delete(&format!("{}/{}", BASE, uuid)).await
    }

    async fn set_status(self, uuid: Uuid, status: EntityStatus) -> Result<User, ApiError> {
        let envelope: ItemEnvelope<User> = api_client::patch_json(
            &format!("{}/{}/status", BASE, uuid),
            &StatusPayload { status },
        )
        .await?;
        Ok(envelope.data)
    }
}
