use crate::api::rest_client::RestClient;
use crate::error::AppError;
use crate::models::task::WeddingTask;

#[async_trait::async_trait]
pub trait TaskApi {
    async fn list_tasks(&self) -> Result<Vec<WeddingTask>, AppError>;
    async fn get_task_by_id(&self, id: &str) -> Result<WeddingTask, AppError>;
    async fn tasks_by_wedding(&self, wedding_id: &str) -> Result<Vec<WeddingTask>, AppError>;
    async fn create_task(&self, task: &WeddingTask) -> Result<WeddingTask, AppError>;
    async fn update_task(&self, id: &str, task: &WeddingTask) -> Result<WeddingTask, AppError>;
    async fn delete_task(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl TaskApi for RestClient {
    async fn list_tasks(&self) -> Result<Vec<WeddingTask>, AppError> {
        self.get_json("/task").await
    }

    async fn get_task_by_id(&self, id: &str) -> Result<WeddingTask, AppError> {
        self.get_json(&format!("/task/{}", id)).await
    }

    async fn tasks_by_wedding(&self, wedding_id: &str) -> Result<Vec<WeddingTask>, AppError> {
        self.get_json(&format!("/task/wedding/{}", wedding_id)).await
    }

    async fn create_task(&self, task: &WeddingTask) -> Result<WeddingTask, AppError> {
        self.post_json("/task", task).await
    }

    async fn update_task(&self, id: &str, task: &WeddingTask) -> Result<WeddingTask, AppError> {
        self.put_json(&format!("/task/{}", id), task).await
    }

    async fn delete_task(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/task/{}", id)).await
    }
}
