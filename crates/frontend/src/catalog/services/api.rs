use contracts::catalog::service::{Service, ServiceDraft};
use contracts::common::{
    ApiError, EntityRef, EntityStatus, ItemEnvelope, ListEnvelope, ListQuery, Pagination,
    StatusPayload,
};
use uuid::Uuid;

use crate::shared::api_client::{self, query_string};
use crate::shared::list_controller::EntityApi;

const BASE: &str = "/api/catalog/services";

#[derive(Clone, Copy)]
pub struct ServicesApi;

impl EntityApi for ServicesApi {
    type Entity = Service;
    type Draft = ServiceDraft;

    fn label(self) -> &'static str {
        "Service"
    }

    async fn fetch_page(self, query: ListQuery) -> Result<(Vec<Service>, Pagination), ApiError> {
        let envelope: ListEnvelope<Service> =
            api_client::get_json(&format!("{}{}", BASE, query_string(&query))).await?;
        Ok((envelope.data, envelope.pagination))
    }

    async fn create(self, draft: ServiceDraft) -> Result<Service, ApiError> {
        let envelope: ItemEnvelope<Service> = api_client::post_json(BASE, &draft).await?;
        Ok(envelope.data)
    }

    async fn update(self, uuid: Uuid, draft: ServiceDraft) -> Result<Service, ApiError> {
        let envelope: ItemEnvelope<Service> =
            api_client::put_json(&format!("{}/{}", BASE, uuid), &draft).await?;
        Ok(envelope.data)
    }

    async fn remove(self, uuid: Uuid) -> Result<(), ApiError> {
        api_client::delete(&format!("{}/{}", BASE, uuid)).await
    }

    async fn set_status(self, uuid: Uuid, status: EntityStatus) -> Result<Service, ApiError> {
        let envelope: ItemEnvelope<Service> = api_client::patch_json(
            &format!("{}/{}/status", BASE, uuid),
            &StatusPayload { status },
        )
        .await?;
        Ok(envelope.data)
    }
}

/// Active services as picker options for the material form.
pub async fn fetch_active_refs() -> Result<Vec<EntityRef>, ApiError> {
    let query = ListQuery {
        limit: 100,
        status: Some(EntityStatus::Active),
        ..ListQuery::default()
    };
    let envelope: ListEnvelope<Service> =
        api_client::get_json(&format!("{}{}", BASE, query_string(&query))).await?;
    Ok(envelope
        .data
        .into_iter()
        .map(|s| EntityRef {
            id: s.core.id,
            name: s.core.name,
            status: s.core.status,
        })
        .collect())
}
