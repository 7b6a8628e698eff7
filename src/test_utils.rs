use crate::api::{AdminApi, BookingApi, CoupleApi, ReviewApi, TaskApi, VendorApi, WeddingApi};
use crate::error::AppError;
use crate::models::admin::{Admin, AdminStats, ManagedUser};
use crate::models::booking::Booking;
use crate::models::couple::{Couple, CoupleRegistration};
use crate::models::review::Review;
use crate::models::task::WeddingTask;
use crate::models::vendor::{PortfolioItem, ServicePackage, SocialPlatform, Vendor, VendorLocation, VendorSearchCriteria};
use crate::models::wedding::Wedding;
use crate::session::clock::Clock;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

/// Deterministic clock for session expiry tests.
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// In-memory implementation of every data-access trait. Collections are
/// seeded by the test; write operations are captured so assertions can
/// inspect exactly what was submitted.
#[derive(Default)]
pub struct MockApi {
    pub couples: Vec<Couple>,
    pub vendors: Vec<Vendor>,
    pub weddings: Vec<Wedding>,
    pub bookings: Vec<Booking>,
    pub tasks: Vec<WeddingTask>,
    pub reviews: Vec<Review>,
    pub admins: Vec<Admin>,
    pub users: Vec<ManagedUser>,
    pub stats: Option<AdminStats>,
    /// Every call fails as if the backend were unreachable.
    pub fail_all: bool,
    /// Only the stats endpoint fails.
    pub fail_stats: bool,
    /// Vendor detail lookups that fail, for enrichment tests.
    pub failing_vendor_ids: HashSet<String>,
    pub submitted_bookings: Mutex<Vec<Booking>>,
    pub submitted_tasks: Mutex<Vec<WeddingTask>>,
    pub submitted_reviews: Mutex<Vec<Review>>,
    pub admin_actions: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<(), AppError> {
        if self.fail_all {
            return Err(AppError::backend_message("mock backend offline"));
        }
        Ok(())
    }

    fn record_action(&self, action: String) {
        if let Ok(mut actions) = self.admin_actions.lock() {
            actions.push(action);
        }
    }
}

#[async_trait::async_trait]
impl CoupleApi for MockApi {
    async fn list_couples(&self) -> Result<Vec<Couple>, AppError> {
        self.guard()?;
        Ok(self.couples.clone())
    }

    async fn get_couple_by_id(&self, id: &str) -> Result<Couple, AppError> {
        self.guard()?;
        self.couples
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn create_couple(&self, couple: &Couple) -> Result<Couple, AppError> {
        self.guard()?;
        Ok(couple.clone())
    }

    async fn update_couple(&self, _id: &str, couple: &Couple) -> Result<Couple, AppError> {
        self.guard()?;
        Ok(couple.clone())
    }

    async fn delete_couple(&self, _id: &str) -> Result<(), AppError> {
        self.guard()
    }
}

#[async_trait::async_trait]
impl WeddingApi for MockApi {
    async fn list_weddings(&self) -> Result<Vec<Wedding>, AppError> {
        self.guard()?;
        Ok(self.weddings.clone())
    }

    async fn get_wedding_by_id(&self, id: &str) -> Result<Wedding, AppError> {
        self.guard()?;
        self.weddings
            .iter()
            .find(|w| w.wedding_id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn create_wedding(&self, wedding: &Wedding) -> Result<Wedding, AppError> {
        self.guard()?;
        Ok(wedding.clone())
    }

    async fn create_wedding_profile(&self, profile: &Wedding) -> Result<Wedding, AppError> {
        self.guard()?;
        Ok(profile.clone())
    }

    async fn update_wedding(&self, _id: &str, wedding: &Wedding) -> Result<Wedding, AppError> {
        self.guard()?;
        Ok(wedding.clone())
    }

    async fn delete_wedding(&self, _id: &str) -> Result<(), AppError> {
        self.guard()
    }
}

#[async_trait::async_trait]
impl VendorApi for MockApi {
    async fn list_vendors(&self) -> Result<Vec<Vendor>, AppError> {
        self.guard()?;
        Ok(self.vendors.clone())
    }

    async fn get_vendor_by_id(&self, id: &str) -> Result<Vendor, AppError> {
        self.guard()?;
        if self.failing_vendor_ids.contains(id) {
            return Err(AppError::backend_message(format!("vendor {} unavailable", id)));
        }
        self.vendors
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn create_vendor(&self, vendor: &Vendor) -> Result<Vendor, AppError> {
        self.guard()?;
        Ok(vendor.clone())
    }

    async fn create_vendor_profile(&self, profile: &Vendor) -> Result<Vendor, AppError> {
        self.guard()?;
        Ok(profile.clone())
    }

    async fn update_vendor(&self, _id: &str, vendor: &Vendor) -> Result<Vendor, AppError> {
        self.guard()?;
        Ok(vendor.clone())
    }

    async fn delete_vendor(&self, _id: &str) -> Result<(), AppError> {
        self.guard()
    }

    async fn search_vendors(&self, _criteria: &VendorSearchCriteria) -> Result<Vec<Vendor>, AppError> {
        self.guard()?;
        Ok(self.vendors.clone())
    }

    async fn top_rated_vendors(&self) -> Result<Vec<Vendor>, AppError> {
        self.guard()?;
        let mut vendors = self.vendors.clone();
        vendors.sort_by(|a, b| b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)));
        Ok(vendors)
    }

    async fn vendors_by_price_range(&self, min_price: Option<f64>, max_price: Option<f64>) -> Result<Vec<Vendor>, AppError> {
        self.guard()?;
        Ok(self
            .vendors
            .iter()
            .filter(|v| {
                let price = v.base_price.unwrap_or(0.0);
                min_price.is_none_or(|min| price >= min) && max_price.is_none_or(|max| price <= max)
            })
            .cloned()
            .collect())
    }

    async fn vendors_sorted_by_price(&self) -> Result<Vec<Vendor>, AppError> {
        self.guard()?;
        let mut vendors = self.vendors.clone();
        vendors.sort_by(|a, b| a.base_price.unwrap_or(0.0).total_cmp(&b.base_price.unwrap_or(0.0)));
        Ok(vendors)
    }

    async fn vendor_portfolio(&self, _id: &str) -> Result<Vec<PortfolioItem>, AppError> {
        self.guard()?;
        Ok(Vec::new())
    }

    async fn add_portfolio_item(&self, _id: &str, item: &PortfolioItem) -> Result<PortfolioItem, AppError> {
        self.guard()?;
        Ok(item.clone())
    }

    async fn remove_portfolio_item(&self, _vendor_id: &str, _item_id: &str) -> Result<(), AppError> {
        self.guard()
    }

    async fn vendor_packages(&self, _id: &str) -> Result<Vec<ServicePackage>, AppError> {
        self.guard()?;
        Ok(Vec::new())
    }

    async fn add_service_package(&self, _id: &str, package: &ServicePackage) -> Result<ServicePackage, AppError> {
        self.guard()?;
        Ok(package.clone())
    }

    async fn remove_service_package(&self, _vendor_id: &str, _package_id: &str) -> Result<(), AppError> {
        self.guard()
    }

    async fn vendor_location(&self, _id: &str) -> Result<VendorLocation, AppError> {
        self.guard()?;
        Ok(VendorLocation::default())
    }

    async fn update_vendor_location(&self, _id: &str, _location: &VendorLocation) -> Result<(), AppError> {
        self.guard()
    }

    async fn vendor_social_links(&self, _id: &str) -> Result<HashMap<SocialPlatform, String>, AppError> {
        self.guard()?;
        Ok(HashMap::new())
    }

    async fn add_social_link(&self, _id: &str, _platform: SocialPlatform, _link: &str) -> Result<(), AppError> {
        self.guard()
    }

    async fn remove_social_link(&self, _id: &str, _platform: SocialPlatform) -> Result<(), AppError> {
        self.guard()
    }
}

#[async_trait::async_trait]
impl BookingApi for MockApi {
    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        self.guard()?;
        Ok(self.bookings.clone())
    }

    async fn get_booking_by_id(&self, id: &str) -> Result<Booking, AppError> {
        self.guard()?;
        self.bookings
            .iter()
            .find(|b| b.ident() == Some(id))
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn create_booking(&self, booking: &Booking) -> Result<Booking, AppError> {
        self.guard()?;
        if let Ok(mut submitted) = self.submitted_bookings.lock() {
            submitted.push(booking.clone());
        }
        Ok(booking.clone())
    }

    async fn update_booking(&self, _id: &str, booking: &Booking) -> Result<Booking, AppError> {
        self.guard()?;
        if let Ok(mut submitted) = self.submitted_bookings.lock() {
            submitted.push(booking.clone());
        }
        Ok(booking.clone())
    }

    async fn delete_booking(&self, _id: &str) -> Result<(), AppError> {
        self.guard()
    }
}

#[async_trait::async_trait]
impl TaskApi for MockApi {
    async fn list_tasks(&self) -> Result<Vec<WeddingTask>, AppError> {
        self.guard()?;
        Ok(self.tasks.clone())
    }

    async fn get_task_by_id(&self, id: &str) -> Result<WeddingTask, AppError> {
        self.guard()?;
        self.tasks
            .iter()
            .find(|t| t.task_id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn tasks_by_wedding(&self, wedding_id: &str) -> Result<Vec<WeddingTask>, AppError> {
        self.guard()?;
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.wedding_id.as_deref() == Some(wedding_id))
            .cloned()
            .collect())
    }

    async fn create_task(&self, task: &WeddingTask) -> Result<WeddingTask, AppError> {
        self.guard()?;
        if let Ok(mut submitted) = self.submitted_tasks.lock() {
            submitted.push(task.clone());
        }
        Ok(task.clone())
    }

    async fn update_task(&self, _id: &str, task: &WeddingTask) -> Result<WeddingTask, AppError> {
        self.guard()?;
        if let Ok(mut submitted) = self.submitted_tasks.lock() {
            submitted.push(task.clone());
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, _id: &str) -> Result<(), AppError> {
        self.guard()
    }
}

#[async_trait::async_trait]
impl ReviewApi for MockApi {
    async fn list_reviews(&self) -> Result<Vec<Review>, AppError> {
        self.guard()?;
        Ok(self.reviews.clone())
    }

    async fn get_review_by_id(&self, id: &str) -> Result<Review, AppError> {
        self.guard()?;
        self.reviews
            .iter()
            .find(|r| r.review_id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn reviews_by_vendor(&self, vendor_id: &str) -> Result<Vec<Review>, AppError> {
        self.guard()?;
        Ok(self
            .reviews
            .iter()
            .filter(|r| r.vendor_id.as_deref() == Some(vendor_id))
            .cloned()
            .collect())
    }

    async fn create_review(&self, review: &Review) -> Result<Review, AppError> {
        self.guard()?;
        if let Ok(mut submitted) = self.submitted_reviews.lock() {
            submitted.push(review.clone());
        }
        Ok(review.clone())
    }

    async fn update_review(&self, _id: &str, review: &Review) -> Result<Review, AppError> {
        self.guard()?;
        Ok(review.clone())
    }

    async fn delete_review(&self, _id: &str) -> Result<(), AppError> {
        self.guard()
    }
}

#[async_trait::async_trait]
impl AdminApi for MockApi {
    async fn admin_login(&self, email: &str, password: &str) -> Result<Admin, AppError> {
        self.guard()?;
        self.admins
            .iter()
            .find(|a| a.email.as_deref() == Some(email) && a.password.as_deref() == Some(password))
            .cloned()
            .ok_or_else(|| AppError::backend_message("admin login rejected"))
    }

    async fn list_users(&self) -> Result<Vec<ManagedUser>, AppError> {
        self.guard()?;
        Ok(self.users.clone())
    }

    async fn list_all_vendors(&self) -> Result<Vec<Vendor>, AppError> {
        self.guard()?;
        Ok(self.vendors.clone())
    }

    async fn stats(&self) -> Result<AdminStats, AppError> {
        self.guard()?;
        if self.fail_stats {
            return Err(AppError::backend_message("stats unavailable"));
        }
        Ok(self.stats.clone().unwrap_or_default())
    }

    async fn approve_vendor(&self, vendor_id: &str) -> Result<(), AppError> {
        self.guard()?;
        self.record_action(format!("approve:{}", vendor_id));
        Ok(())
    }

    async fn reject_vendor(&self, vendor_id: &str, reason: &str) -> Result<(), AppError> {
        self.guard()?;
        self.record_action(format!("reject:{}:{}", vendor_id, reason));
        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        self.guard()?;
        self.record_action(format!("delete-user:{}", user_id));
        Ok(())
    }

    async fn delete_vendor_account(&self, vendor_id: &str) -> Result<(), AppError> {
        self.guard()?;
        self.record_action(format!("delete-vendor:{}", vendor_id));
        Ok(())
    }
}

pub fn couple_record(id: &str, email: &str, password: &str) -> Couple {
    Couple {
        id: id.to_string(),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        name: Some("Amal & Nadia".to_string()),
        phone: Some("0771234567".to_string()),
        partner_id: Some("partner-1".to_string()),
        budget: Some(10_000.0),
        wedding_date: Some("2026-12-05".to_string()),
        ..Couple::default()
    }
}

pub fn vendor_record(id: &str, email: &str, password: &str) -> Vendor {
    Vendor {
        id: id.to_string(),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        name: Some(format!("Vendor {}", id)),
        phone: Some("0779876543".to_string()),
        vendor_type: Some("FLORIST".to_string()),
        ..Vendor::default()
    }
}

pub fn wedding_record(wedding_id: &str, couple_id: &str) -> Wedding {
    Wedding {
        wedding_id: wedding_id.to_string(),
        couple_id: Some(couple_id.to_string()),
        ..Wedding::default()
    }
}

pub fn booking_record(id: &str, couple_id: &str, vendor_id: &str) -> Booking {
    Booking {
        booking_id: Some(id.to_string()),
        couple_id: Some(couple_id.to_string()),
        vendor_id: Some(vendor_id.to_string()),
        ..Booking::default()
    }
}

pub fn task_record(task_id: &str, wedding_id: &str) -> WeddingTask {
    WeddingTask {
        task_id: task_id.to_string(),
        wedding_id: Some(wedding_id.to_string()),
        name: Some(format!("Task {}", task_id)),
        ..WeddingTask::default()
    }
}

pub fn review_record(review_id: &str, vendor_id: &str, rating: i32) -> Review {
    Review {
        review_id: review_id.to_string(),
        vendor_id: Some(vendor_id.to_string()),
        couple_id: Some("couple-1".to_string()),
        rating: Some(rating),
        ..Review::default()
    }
}

pub fn admin_record(id: &str, email: &str, password: &str) -> Admin {
    Admin {
        id: id.to_string(),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        name: Some("Site Admin".to_string()),
        ..Admin::default()
    }
}

pub fn couple_registration() -> CoupleRegistration {
    CoupleRegistration {
        email: "pair@example.com".to_string(),
        password: "secret1".to_string(),
        first_name: "Amal".to_string(),
        last_name: "Perera".to_string(),
        phone: Some("0771234567".to_string()),
        partner_name: Some("Nadia Perera".to_string()),
        wedding_date: Some("2026-12-05".to_string()),
        budget: Some(10_000.0),
        style: None,
    }
}
