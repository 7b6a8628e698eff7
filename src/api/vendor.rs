use crate::api::rest_client::RestClient;
use crate::error::AppError;
use crate::models::vendor::{PortfolioItem, ServicePackage, SocialPlatform, Vendor, VendorLocation, VendorSearchCriteria};
use std::collections::HashMap;

#[async_trait::async_trait]
pub trait VendorApi {
    async fn list_vendors(&self) -> Result<Vec<Vendor>, AppError>;
    async fn get_vendor_by_id(&self, id: &str) -> Result<Vendor, AppError>;
    async fn create_vendor(&self, vendor: &Vendor) -> Result<Vendor, AppError>;
    async fn create_vendor_profile(&self, profile: &Vendor) -> Result<Vendor, AppError>;
    async fn update_vendor(&self, id: &str, vendor: &Vendor) -> Result<Vendor, AppError>;
    async fn delete_vendor(&self, id: &str) -> Result<(), AppError>;
    async fn search_vendors(&self, criteria: &VendorSearchCriteria) -> Result<Vec<Vendor>, AppError>;
    async fn top_rated_vendors(&self) -> Result<Vec<Vendor>, AppError>;
    async fn vendors_by_price_range(&self, min_price: Option<f64>, max_price: Option<f64>) -> Result<Vec<Vendor>, AppError>;
    /// Server-side price ordering; the backend owns the sort.
    async fn vendors_sorted_by_price(&self) -> Result<Vec<Vendor>, AppError>;
    async fn vendor_portfolio(&self, id: &str) -> Result<Vec<PortfolioItem>, AppError>;
    async fn add_portfolio_item(&self, id: &str, item: &PortfolioItem) -> Result<PortfolioItem, AppError>;
    async fn remove_portfolio_item(&self, vendor_id: &str, item_id: &str) -> Result<(), AppError>;
    async fn vendor_packages(&self, id: &str) -> Result<Vec<ServicePackage>, AppError>;
    async fn add_service_package(&self, id: &str, package: &ServicePackage) -> Result<ServicePackage, AppError>;
    async fn remove_service_package(&self, vendor_id: &str, package_id: &str) -> Result<(), AppError>;
    async fn vendor_location(&self, id: &str) -> Result<VendorLocation, AppError>;
    async fn update_vendor_location(&self, id: &str, location: &VendorLocation) -> Result<(), AppError>;
    async fn vendor_social_links(&self, id: &str) -> Result<HashMap<SocialPlatform, String>, AppError>;
    async fn add_social_link(&self, id: &str, platform: SocialPlatform, link: &str) -> Result<(), AppError>;
    async fn remove_social_link(&self, id: &str, platform: SocialPlatform) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl VendorApi for RestClient {
    async fn list_vendors(&self) -> Result<Vec<Vendor>, AppError> {
        self.get_json("/vendor").await
    }

    async fn get_vendor_by_id(&self, id: &str) -> Result<Vendor, AppError> {
        self.get_json(&format!("/vendor/{}", id)).await
    }

    async fn create_vendor(&self, vendor: &Vendor) -> Result<Vendor, AppError> {
        self.post_json("/vendor", vendor).await
    }

    async fn create_vendor_profile(&self, profile: &Vendor) -> Result<Vendor, AppError> {
        self.post_json("/vendor/profile", profile).await
    }

    async fn update_vendor(&self, id: &str, vendor: &Vendor) -> Result<Vendor, AppError> {
        self.put_json(&format!("/vendor/{}", id), vendor).await
    }

    async fn delete_vendor(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/vendor/{}", id)).await
    }

    async fn search_vendors(&self, criteria: &VendorSearchCriteria) -> Result<Vec<Vendor>, AppError> {
        self.post_json("/vendor/search", criteria).await
    }

    async fn top_rated_vendors(&self) -> Result<Vec<Vendor>, AppError> {
        self.get_json("/vendor/top-rated").await
    }

    async fn vendors_by_price_range(&self, min_price: Option<f64>, max_price: Option<f64>) -> Result<Vec<Vendor>, AppError> {
        let mut query: Vec<(&str, f64)> = Vec::new();
        if let Some(min) = min_price {
            query.push(("minPrice", min));
        }
        if let Some(max) = max_price {
            query.push(("maxPrice", max));
        }
        self.get_json_query("/vendor/price-range", &query).await
    }

    async fn vendors_sorted_by_price(&self) -> Result<Vec<Vendor>, AppError> {
        self.get_json("/vendor-list/sorted").await
    }

    async fn vendor_portfolio(&self, id: &str) -> Result<Vec<PortfolioItem>, AppError> {
        self.get_json(&format!("/vendor/{}/portfolio", id)).await
    }

    async fn add_portfolio_item(&self, id: &str, item: &PortfolioItem) -> Result<PortfolioItem, AppError> {
        self.post_json(&format!("/vendor/{}/portfolio", id), item).await
    }

    async fn remove_portfolio_item(&self, vendor_id: &str, item_id: &str) -> Result<(), AppError> {
        self.delete(&format!("/vendor/{}/portfolio/{}", vendor_id, item_id)).await
    }

    async fn vendor_packages(&self, id: &str) -> Result<Vec<ServicePackage>, AppError> {
        self.get_json(&format!("/vendor/{}/packages", id)).await
    }

    async fn add_service_package(&self, id: &str, package: &ServicePackage) -> Result<ServicePackage, AppError> {
        self.post_json(&format!("/vendor/{}/packages", id), package).await
    }

    async fn remove_service_package(&self, vendor_id: &str, package_id: &str) -> Result<(), AppError> {
        self.delete(&format!("/vendor/{}/packages/{}", vendor_id, package_id)).await
    }

    async fn vendor_location(&self, id: &str) -> Result<VendorLocation, AppError> {
        self.get_json(&format!("/vendor/{}/location", id)).await
    }

    async fn update_vendor_location(&self, id: &str, location: &VendorLocation) -> Result<(), AppError> {
        // The backend takes location updates as query parameters with an
        // empty body.
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(address) = &location.address {
            query.push(("address", address.clone()));
        }
        if let Some(radius) = location.service_radius {
            query.push(("serviceRadius", radius.to_string()));
        }
        self.put_query(&format!("/vendor/{}/location", id), &query).await
    }

    async fn vendor_social_links(&self, id: &str) -> Result<HashMap<SocialPlatform, String>, AppError> {
        self.get_json(&format!("/vendor/{}/social-media", id)).await
    }

    async fn add_social_link(&self, id: &str, platform: SocialPlatform, link: &str) -> Result<(), AppError> {
        let query = [("platform", platform.as_str()), ("link", link)];
        self.post_query(&format!("/vendor/{}/social-media", id), &query).await
    }

    async fn remove_social_link(&self, id: &str, platform: SocialPlatform) -> Result<(), AppError> {
        self.delete(&format!("/vendor/{}/social-media/{}", id, platform.as_str())).await
    }
}
