use contracts::catalog::category::{Category, CategoryDraft};
use contracts::common::{
    ApiError, EntityRef, EntityStatus, ItemEnvelope, ListEnvelope, ListQuery, Pagination,
    StatusPayload,
};
use uuid::Uuid;

use crate::shared::api_client::{self, query_string};
use crate::shared::list_controller::EntityApi;

const BASE: &str = "/api/catalog/categories";

#[derive(Clone, Copy)]
pub struct CategoriesApi;

impl EntityApi for CategoriesApi {
    type Entity = Category;
    type Draft = CategoryDraft;

    fn label(self) -> &'static str {
        "Category"
    }

    async fn fetch_page(self, query: ListQuery) -> Result<(Vec<Category>, Pagination), ApiError> {
        let envelope: ListEnvelope<Category> =
            api_client::get_json(&format!("{}{}", BASE, query_string(&query))).await?;
        Ok((envelope.data, envelope.pagination))
    }

    async fn create(self, draft: CategoryDraft) -> Result<Category, ApiError> {
        let envelope: ItemEnvelope<Category> = api_client::post_json(BASE, &draft).await?;
        Ok(envelope.data)
    }

    async fn update(self, uuid: Uuid, draft: CategoryDraft) -> Result<Category, ApiError> {
        let envelope: ItemEnvelope<Category> =
            api_client::put_json(&format!("{}/{}", BASE, uuid), &draft).await?;
        Ok(envelope.data)
    }

    async fn remove(self, uuid: Uuid) -> Result<(), ApiError> {
        api_client::delete(&format!("{}/{}", BASE, uuid)).await
    }

    async fn set_status(self, uuid: Uuid, status: EntityStatus) -> Result<Category, ApiError> {
        let envelope: ItemEnvelope<Category> = api_client::patch_json(
            &format!("{}/{}/status", BASE, uuid),
            &StatusPayload { status },
        )
        .await?;
        Ok(envelope.data)
    }
}

/// Active categories as picker options for the trade form.
pub async fn fetch_active_refs() -> Result<Vec<EntityRef>, ApiError> {
    let query = ListQuery {
        limit: 100,
        status: Some(EntityStatus::Active),
        ..ListQuery::default()
    };
    let envelope: ListEnvelope<Category> =
        api_client::get_json(&format!("{}{}", BASE, query_string(&query))).await?;
    Ok(envelope
        .data
        .into_iter()
        .map(|c| EntityRef {
            id: c.core.id,
            name: c.core.name,
            status: c.core.status,
        })
        .collect())
}
