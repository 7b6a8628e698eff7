use crate::api::rest_client::RestClient;
use crate::error::AppError;
use crate::models::wedding::Wedding;

#[async_trait::async_trait]
pub trait WeddingApi {
    async fn list_weddings(&self) -> Result<Vec<Wedding>, AppError>;
    async fn get_wedding_by_id(&self, id: &str) -> Result<Wedding, AppError>;
    async fn create_wedding(&self, wedding: &Wedding) -> Result<Wedding, AppError>;
    async fn create_wedding_profile(&self, profile: &Wedding) -> Result<Wedding, AppError>;
    async fn update_wedding(&self, id: &str, wedding: &Wedding) -> Result<Wedding, AppError>;
    async fn delete_wedding(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl WeddingApi for RestClient {
    async fn list_weddings(&self) -> Result<Vec<Wedding>, AppError> {
        self.get_json("/wedding").await
    }

    async fn get_wedding_by_id(&self, id: &str) -> Result<Wedding, AppError> {
        self.get_json(&format!("/wedding/{}", id)).await
    }

    async fn create_wedding(&self, wedding: &Wedding) -> Result<Wedding, AppError> {
        self.post_json("/wedding", wedding).await
    }

    async fn create_wedding_profile(&self, profile: &Wedding) -> Result<Wedding, AppError> {
        self.post_json("/wedding/profile", profile).await
    }

    async fn update_wedding(&self, id: &str, wedding: &Wedding) -> Result<Wedding, AppError> {
        self.put_json(&format!("/wedding/{}", id), wedding).await
    }

    async fn delete_wedding(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/wedding/{}", id)).await
    }
}
