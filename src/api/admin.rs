use crate::api::rest_client::RestClient;
use crate::error::AppError;
use crate::models::admin::{Admin, AdminLoginRequest, AdminStats, ManagedUser};
use crate::models::vendor::Vendor;

#[async_trait::async_trait]
pub trait AdminApi {
    /// Admin authentication is the one role delegated to the backend; the
    /// endpoint returns the admin record directly on success.
    async fn admin_login(&self, email: &str, password: &str) -> Result<Admin, AppError>;
    async fn list_users(&self) -> Result<Vec<ManagedUser>, AppError>;
    async fn list_all_vendors(&self) -> Result<Vec<Vendor>, AppError>;
    async fn stats(&self) -> Result<AdminStats, AppError>;
    async fn approve_vendor(&self, vendor_id: &str) -> Result<(), AppError>;
    async fn reject_vendor(&self, vendor_id: &str, reason: &str) -> Result<(), AppError>;
    async fn delete_user(&self, user_id: &str) -> Result<(), AppError>;
    async fn delete_vendor_account(&self, vendor_id: &str) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl AdminApi for RestClient {
    async fn admin_login(&self, email: &str, password: &str) -> Result<Admin, AppError> {
        let credentials = AdminLoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/admin/login", &credentials).await
    }

    async fn list_users(&self) -> Result<Vec<ManagedUser>, AppError> {
        self.get_json("/admin/users").await
    }

    async fn list_all_vendors(&self) -> Result<Vec<Vendor>, AppError> {
        self.get_json("/admin/vendors").await
    }

    async fn stats(&self) -> Result<AdminStats, AppError> {
        self.get_json("/admin/stats").await
    }

    async fn approve_vendor(&self, vendor_id: &str) -> Result<(), AppError> {
        self.put_empty(&format!("/admin/vendor/{}/approve", vendor_id)).await
    }

    async fn reject_vendor(&self, vendor_id: &str, reason: &str) -> Result<(), AppError> {
        let payload = serde_json::json!({ "reason": reason });
        self.put_json_discard(&format!("/admin/vendor/{}/reject", vendor_id), &payload).await
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        self.delete(&format!("/admin/users/{}", user_id)).await
    }

    async fn delete_vendor_account(&self, vendor_id: &str) -> Result<(), AppError> {
        self.delete(&format!("/admin/vendors/{}", vendor_id)).await
    }
}
