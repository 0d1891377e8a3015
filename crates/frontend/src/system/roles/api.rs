use contracts::common::{
    ApiError, EntityRef, EntityStatus, ItemEnvelope, ListEnvelope, ListQuery, Pagination,
    StatusPayload,
};
use contracts::system::role::{Role, RoleDraft};
use uuid::Uuid;

use crate::shared::api_client::{self, query_string};
use crate::shared::list_controller::EntityApi;

const BASE: &str = "/api/system/roles";

#[derive(Clone, Copy)]
pub struct RolesApi;

impl EntityApi for RolesApi {
    type Entity = Role;
    type Draft = RoleDraft;

    fn label(self) -> &'static str {
        "Role"
    }

    async fn fetch_page(self, query: ListQuery) -> Result<(Vec<Role>, Pagination), ApiError> {
        let envelope: ListEnvelope<Role> =
            api_client::get_json(&format!("{}{}", BASE, query_string(&query))).await?;
        Ok((envelope.data, envelope.pagination))
    }

    async fn create(self, draft: RoleDraft) -> Result<Role, ApiError> {
        let envelope: ItemEnvelope<Role> = api_client::post_json(BASE, &draft).await?;
        Ok(envelope.data)
    }

    async fn update(self, uuid: Uuid, draft: RoleDraft) -> Result<Role, ApiError> {
        let envelope: ItemEnvelope<Role> =
            api_client::put_json(&format!("{}/{}", BASE, uuid), &draft).await?;
        Ok(envelope.data)
    }

    async fn remove(self, uuid: Uuid) -> Result<(), ApiError> {
        api_client::delete(&format!("{}/{}", BASE, uuid)).await
    }

    async fn set_status(self, uuid: Uuid, status: EntityStatus) -> Result<Role, ApiError> {
        let envelope: ItemEnvelope<Role> = api_client::patch_json(
            &format!("{}/{}/status", BASE, uuid),
            &StatusPayload { status },
        )
        .await?;
        Ok(envelope.data)
    }
}

/// Active roles as select options for the user form.
pub async fn fetch_active_refs() -> Result<Vec<EntityRef>, ApiError> {
    let query = ListQuery {
        limit: 100,
        status: Some(EntityStatus::Active),
        ..ListQuery::default()
    };
    let envelope: ListEnvelope<Role> =
        api_client::get_json(&format!("{}{}", BASE, query_string(&query))).await?;
    Ok(envelope
        .data
        .into_iter()
        .map(|r| EntityRef {
            id: r.core.id,
            name: r.core.name,
            status: r.core.status,
        })
        .collect())
}
