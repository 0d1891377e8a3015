use contracts::catalog::material::{Material, MaterialDraft};
use contracts::common::{
    ApiError, EntityStatus, ItemEnvelope, ListEnvelope, ListQuery, Pagination, StatusPayload,
};
use uuid::Uuid;

use crate::shared::api_client::{self, query_string};
use crate::shared::list_controller::EntityApi;

const BASE: &str = "/api/catalog/materials";

#[derive(Clone, Copy)]
pub struct MaterialsApi;

impl EntityApi for MaterialsApi {
    type Entity = Material;
    type Draft = MaterialDraft;

    fn label(self) -> &'static str {
        "Material"
    }

    async fn fetch_page(self, query: ListQuery) -> Result<(Vec<Material>, Pagination), ApiError> {
        let envelope: ListEnvelope<Material> =
            api_client::get_json(&format!("{}{}", BASE, query_string(&query))).await?;
        Ok((envelope.data, envelope.pagination))
    }

    async fn create(self, draft: MaterialDraft) -> Result<Material, ApiError> {
        let envelope: ItemEnvelope<Material> = api_client::post_json(BASE, &draft).await?;
        Ok(envelope.data)
    }

    async fn update(self, uuid: Uuid, draft: MaterialDraft) -> Result<Material, ApiError> {
        let envelope: ItemEnvelope<Material> =
            api_client::put_json(&format!("{}/{}", BASE, uuid), &draft).await?;
        Ok(envelope.data)
    }

    async fn remove(self, uuid: Uuid) -> Result<(), ApiError> {
        api_client::delete(&format!("{}/{}", BASE, uuid)).await
    }

    async fn set_status(self, uuid: Uuid, status: EntityStatus) -> Result<Material, ApiError> {
        let envelope: ItemEnvelope<Material> = api_client::patch_json(
            &format!("{}/{}/status", BASE, uuid),
            &StatusPayload { status },
        )
        .await?;
        Ok(envelope.data)
    }
}
