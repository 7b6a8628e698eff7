use crate::api::rest_client::RestClient;
use crate::error::AppError;
use crate::models::review::Review;

#[async_trait::async_trait]
pub trait ReviewApi {
    async fn list_reviews(&self) -> Result<Vec<Review>, AppError>;
    async fn get_review_by_id(&self, id: &str) -> Result<Review, AppError>;
    async fn reviews_by_vendor(&self, vendor_id: &str) -> Result<Vec<Review>, AppError>;
    async fn create_review(&self, review: &Review) -> Result<Review, AppError>;
    async fn update_review(&self, id: &str, review: &Review) -> Result<Review, AppError>;
    async fn delete_review(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl ReviewApi for RestClient {
    async fn list_reviews(&self) -> Result<Vec<Review>, AppError> {
        self.get_json("/review").await
    }

    async fn get_review_by_id(&self, id: &str) -> Result<Review, AppError> {
        self.get_json(&format!("/review/{}", id)).await
    }

    async fn reviews_by_vendor(&self, vendor_id: &str) -> Result<Vec<Review>, AppError> {
        self.get_json(&format!("/review/vendor/{}", vendor_id)).await
    }

    async fn create_review(&self, review: &Review) -> Result<Review, AppError> {
        self.post_json("/review", review).await
    }

    async fn update_review(&self, id: &str, review: &Review) -> Result<Review, AppError> {
        self.put_json(&format!("/review/{}", id), review).await
    }

    async fn delete_review(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/review/{}", id)).await
    }
}
