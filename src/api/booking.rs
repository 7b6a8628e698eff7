use crate::api::rest_client::RestClient;
use crate::error::AppError;
use crate::models::booking::Booking;

#[async_trait::async_trait]
pub trait BookingApi {
    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError>;
    async fn get_booking_by_id(&self, id: &str) -> Result<Booking, AppError>;
    async fn create_booking(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn update_booking(&self, id: &str, booking: &Booking) -> Result<Booking, AppError>;
    async fn delete_booking(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl BookingApi for RestClient {
    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        self.get_json("/booking").await
    }

    async fn get_booking_by_id(&self, id: &str) -> Result<Booking, AppError> {
        self.get_json(&format!("/booking/{}", id)).await
    }

    async fn create_booking(&self, booking: &Booking) -> Result<Booking, AppError> {
        self.post_json("/booking", booking).await
    }

    async fn update_booking(&self, id: &str, booking: &Booking) -> Result<Booking, AppError> {
        self.put_json(&format!("/booking/{}", id), booking).await
    }

    async fn delete_booking(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/booking/{}", id)).await
    }
}
