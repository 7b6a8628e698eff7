use crate::api::AdminApi;
use crate::error::AppError;
use crate::models::admin::AdminStats;
use crate::models::vendor::{Vendor, VendorStatus};
use tracing::{info, warn};

/// Overview numbers for the admin dashboard. When the stats endpoint is
/// unreachable the totals are derived from the user and vendor lists so
/// the screen still renders.
pub async fn overview_stats<A>(api: &A) -> Result<AdminStats, AppError>
where
    A: AdminApi + Sync,
{
    match api.stats().await {
        Ok(stats) => Ok(stats),
        Err(e) if e.is_transient() || matches!(e, AppError::NotFound(_)) => {
            warn!(error = %e, "stats endpoint unavailable, deriving from lists");
            let users = api.list_users().await?;
            let vendors = api.list_all_vendors().await?;
            let pending = vendors.iter().filter(|v| is_pending(v)).count();
            Ok(AdminStats {
                total_users: Some(users.len() as i64),
                total_vendors: Some(vendors.len() as i64),
                pending_vendors: Some(pending as i64),
                ..AdminStats::default()
            })
        }
        Err(e) => Err(e),
    }
}

fn is_pending(vendor: &Vendor) -> bool {
    matches!(vendor.status, Some(VendorStatus::Pending))
}

/// Vendors awaiting moderation.
pub async fn pending_vendors<A>(api: &A) -> Result<Vec<Vendor>, AppError>
where
    A: AdminApi + Sync,
{
    let vendors = api.list_all_vendors().await?;
    Ok(vendors.into_iter().filter(|v| is_pending(v)).collect())
}

pub async fn approve_vendor<A>(api: &A, vendor_id: &str) -> Result<(), AppError>
where
    A: AdminApi + Sync,
{
    api.approve_vendor(vendor_id).await?;
    info!(vendor_id = %vendor_id, "vendor approved");
    Ok(())
}

pub async fn reject_vendor<A>(api: &A, vendor_id: &str, reason: &str) -> Result<(), AppError>
where
    A: AdminApi + Sync,
{
    api.reject_vendor(vendor_id, reason).await?;
    info!(vendor_id = %vendor_id, reason = %reason, "vendor rejected");
    Ok(())
}

pub async fn remove_user<A>(api: &A, user_id: &str) -> Result<(), AppError>
where
    A: AdminApi + Sync,
{
    api.delete_user(user_id).await?;
    info!(user_id = %user_id, "user removed");
    Ok(())
}
