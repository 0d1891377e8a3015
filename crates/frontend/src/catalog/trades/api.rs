use contracts::catalog::trade::{Trade, TradeDraft};
use contracts::common::{
    ApiError, EntityRef, EntityStatus, ItemEnvelope, ListEnvelope, ListQuery, Pagination,
    StatusPayload,
};
use uuid::Uuid;

use crate::shared::api_client::{self, query_string};
use crate::shared::list_controller::EntityApi;

const BASE: &str = "/api/catalog/trades";

#[derive(Clone, Copy)]
pub struct TradesApi;

impl EntityApi for TradesApi {
    type Entity = Trade;
    type Draft = TradeDraft;

    fn label(self) -> &'static str {
        "Trade"
    }

    async fn fetch_page(self, query: ListQuery) -> Result<(Vec<Trade>, Pagination), ApiError> {
        let envelope: ListEnvelope<Trade> =
            api_client::get_json(&format!("{}{}", BASE, query_string(&query))).await?;
        Ok((envelope.data, envelope.pagination))
    }

    async fn create(self, draft: TradeDraft) -> Result<Trade, ApiError> {
        let envelope: ItemEnvelope<Trade> = api_client::post_json(BASE, &draft).await?;
        Ok(envelope.data)
    }

    async fn update(self, uuid: Uuid, draft: TradeDraft) -> Result<Trade, ApiError> {
        let envelope: ItemEnvelope<Trade> =
            api_client::put_json(&format!("{}/{}", BASE, uuid), &draft).await?;
        Ok(envelope.data)
    }

    async fn remove(self, uuid: Uuid) -> Result<(), ApiError> {
        api_client::delete(&format!("{}/{}", BASE, uuid)).await
    }

    async fn set_status(self, uuid: Uuid, status: EntityStatus) -> Result<Trade, ApiError> {
        let envelope: ItemEnvelope<Trade> = api_client::patch_json(
            &format!("{}/{}/status", BASE, uuid),
            &StatusPayload { status },
        )
        .await?;
        Ok(envelope.data)
    }
}

/// Active trades as picker options for the service form.
pub async fn fetch_active_refs() -> Result<Vec<EntityRef>, ApiError> {
    let query = ListQuery {
        limit: 100,
        status: Some(EntityStatus::Active),
        ..ListQuery::default()
    };
    let envelope: ListEnvelope<Trade> =
        api_client::get_json(&format!("{}{}", BASE, query_string(&query))).await?;
    Ok(envelope
        .data
        .into_iter()
        .map(|t| EntityRef {
            id: t.core.id,
            name: t.core.name,
            status: t.core.status,
        })
        .collect())
}
