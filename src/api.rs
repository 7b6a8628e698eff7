pub mod admin;
pub mod booking;
pub mod couple;
pub mod rest_client;
pub mod review;
pub mod task;
pub mod vendor;
pub mod wedding;

pub use admin::AdminApi;
pub use booking::BookingApi;
pub use couple::CoupleApi;
pub use rest_client::RestClient;
pub use review::ReviewApi;
pub use task::TaskApi;
pub use vendor::VendorApi;
pub use wedding::WeddingApi;
