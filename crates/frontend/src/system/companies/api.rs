use contracts::common::{
    ApiError, EntityStatus, ItemEnvelope, ListEnvelope, ListQuery, Pagination, StatusPayload,
};
use contracts::system::company::{Company, CompanyDraft};
use uuid::Uuid;

use crate::shared::api_client::{self, query_string};
use crate::shared::list_controller::EntityApi;

const BASE: &str = "/api/system/companies";

#[derive(Clone, Copy)]
pub struct CompaniesApi;

impl EntityApi for CompaniesApi {
    type Entity = Company;
    type Draft = CompanyDraft;

    fn label(self) -> &'static str {
        "Company"
    }

    async fn fetch_page(self, query: ListQuery) -> Result<(Vec<Company>, Pagination), ApiError> {
        let envelope: ListEnvelope<Company> =
            api_client::get_json(&format!("{}{}", BASE, query_string(&query))).await?;
        Ok((envelope.data, envelope.pagination))
    }

    async fn create(self, draft: CompanyDraft) -> Result<Company, ApiError> {
        let envelope: ItemEnvelope<Company> = api_client::post_json(BASE, &draft).await?;
        Ok(envelope.data)
    }

    async fn update(self, uuid: Uuid, draft: CompanyDraft) -> Result<Company, ApiError> {
        let envelope: ItemEnvelope<Company> =
            api_client::put_json(&format!("{}/{}", BASE, uuid), &draft).await?;
        Ok(envelope.data)
    }

    async fn remove(self, uuid: Uuid) -> Result<(), ApiError> {
        api_client::delete(&format!("{}/{}", BASE, uuid)).await
    }

    async fn set_status(self, uuid: Uuid, status: EntityStatus) -> Result<Company, ApiError> {
        let envelope: ItemEnvelope<Company> = api_client::patch_json(
            &format!("{}/{}/status", BASE, uuid),
            &StatusPayload { status },
        )
        .await?;
        Ok(envelope.data)
    }
}
