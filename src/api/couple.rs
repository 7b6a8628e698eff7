use crate::api::rest_client::RestClient;
use crate::error::AppError;
use crate::models::couple::Couple;

#[async_trait::async_trait]
pub trait CoupleApi {
    async fn list_couples(&self) -> Result<Vec<Couple>, AppError>;
    async fn get_couple_by_id(&self, id: &str) -> Result<Couple, AppError>;
    async fn create_couple(&self, couple: &Couple) -> Result<Couple, AppError>;
    async fn update_couple(&self, id: &str, couple: &Couple) -> Result<Couple, AppError>;
    async fn delete_couple(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl CoupleApi for RestClient {
    async fn list_couples(&self) -> Result<Vec<Couple>, AppError> {
        self.get_json("/couple").await
    }

    async fn get_couple_by_id(&self, id: &str) -> Result<Couple, AppError> {
        self.get_json(&format!("/couple/{}", id)).await
    }

    async fn create_couple(&self, couple: &Couple) -> Result<Couple, AppError> {
        self.post_json("/couple", couple).await
    }

    async fn update_couple(&self, id: &str, couple: &Couple) -> Result<Couple, AppError> {
        self.put_json(&format!("/couple/{}", id), couple).await
    }

    async fn delete_couple(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/couple/{}", id)).await
    }
}
