use crate::api::{BookingApi, CoupleApi, VendorApi};
use crate::error::AppError;
use crate::models::booking::{Booking, BookingStatus};
use futures::future::join_all;
use tracing::warn;

pub const FALLBACK_VENDOR_NAME: &str = "Unknown Vendor";
pub const FALLBACK_VENDOR_TYPE: &str = "Vendor";
pub const FALLBACK_COUPLE_NAME: &str = "Unknown Couple";

/// A booking row augmented with the counterparty details the tables show.
#[derive(Debug, Clone)]
pub struct EnrichedBooking {
    pub booking: Booking,
    pub counterparty_name: String,
    pub counterparty_type: String,
    pub counterparty_phone: Option<String>,
}

/// All bookings belonging to a couple, newest first, each enriched with
/// vendor details. A failed vendor lookup falls back to placeholder text
/// instead of dropping the row or failing the page.
pub async fn bookings_for_couple<A>(api: &A, couple_id: &str) -> Result<Vec<EnrichedBooking>, AppError>
where
    A: BookingApi + VendorApi + Sync,
{
    let all = api.list_bookings().await?;
    let mine = sorted_newest_first(
        all.into_iter().filter(|b| b.couple_id.as_deref() == Some(couple_id)).collect(),
    );

    let rows = join_all(mine.into_iter().map(|booking| async move {
        let vendor = match booking.vendor_id.as_deref() {
            Some(vendor_id) => match api.get_vendor_by_id(vendor_id).await {
                Ok(vendor) => Some(vendor),
                Err(e) => {
                    warn!(vendor_id = %vendor_id, error = %e, "could not fetch vendor details");
                    None
                }
            },
            None => None,
        };
        match vendor {
            Some(vendor) => EnrichedBooking {
                counterparty_name: vendor.name.unwrap_or_else(|| FALLBACK_VENDOR_NAME.to_string()),
                counterparty_type: vendor.vendor_type.unwrap_or_else(|| FALLBACK_VENDOR_TYPE.to_string()),
                counterparty_phone: vendor.phone,
                booking,
            },
            None => fallback_vendor_row(booking),
        }
    }))
    .await;

    Ok(rows)
}

fn fallback_vendor_row(booking: Booking) -> EnrichedBooking {
    EnrichedBooking {
        booking,
        counterparty_name: FALLBACK_VENDOR_NAME.to_string(),
        counterparty_type: FALLBACK_VENDOR_TYPE.to_string(),
        counterparty_phone: None,
    }
}

/// All bookings for a vendor, enriched with the booking couple's name.
pub async fn bookings_for_vendor<A>(api: &A, vendor_id: &str) -> Result<Vec<EnrichedBooking>, AppError>
where
    A: BookingApi + CoupleApi + Sync,
{
    let all = api.list_bookings().await?;
    let mine = sorted_newest_first(
        all.into_iter().filter(|b| b.vendor_id.as_deref() == Some(vendor_id)).collect(),
    );

    let rows = join_all(mine.into_iter().map(|booking| async move {
        let couple = match booking.couple_id.as_deref() {
            Some(couple_id) => api.get_couple_by_id(couple_id).await.ok(),
            None => None,
        };
        match couple {
            Some(couple) => EnrichedBooking {
                counterparty_name: couple.name.unwrap_or_else(|| FALLBACK_COUPLE_NAME.to_string()),
                counterparty_type: "Couple".to_string(),
                counterparty_phone: couple.phone,
                booking,
            },
            None => EnrichedBooking {
                booking,
                counterparty_name: FALLBACK_COUPLE_NAME.to_string(),
                counterparty_type: "Couple".to_string(),
                counterparty_phone: None,
            },
        }
    }))
    .await;

    Ok(rows)
}

fn sorted_newest_first(mut bookings: Vec<Booking>) -> Vec<Booking> {
    // Undated bookings sort to the end.
    bookings.sort_by(|a, b| b.occurs_at().cmp(&a.occurs_at()));
    bookings
}

/// Status filter used by the booking tables; `None` means "all".
pub fn filter_by_status(rows: Vec<EnrichedBooking>, status: Option<&BookingStatus>) -> Vec<EnrichedBooking> {
    match status {
        None => rows,
        Some(wanted) => rows.into_iter().filter(|row| row.booking.status.as_ref() == Some(wanted)).collect(),
    }
}

/// Read-merge-write status change: fetch the current record so fields this
/// client never modeled survive the resubmit, then overlay the new status.
/// Falls back to a direct patch when the read fails.
pub async fn set_booking_status<A>(api: &A, id: &str, status: BookingStatus) -> Result<Booking, AppError>
where
    A: BookingApi + Sync,
{
    if id.is_empty() {
        return Err(AppError::MissingPrerequisite("booking id".to_string()));
    }

    match api.get_booking_by_id(id).await {
        Ok(mut current) => {
            current.status = Some(status);
            // Both identifier spellings must survive the round trip.
            current.booking_id = Some(id.to_string());
            current.id = current.id.or_else(|| Some(id.to_string()));
            api.update_booking(id, &current).await
        }
        Err(e) => {
            warn!(booking_id = %id, error = %e, "merge read failed, sending direct update");
            let patch = Booking {
                booking_id: Some(id.to_string()),
                status: Some(status),
                ..Booking::default()
            };
            api.update_booking(id, &patch).await
        }
    }
}

pub async fn confirm_booking<A>(api: &A, id: &str) -> Result<Booking, AppError>
where
    A: BookingApi + Sync,
{
    set_booking_status(api, id, BookingStatus::Confirmed).await
}

pub async fn cancel_booking<A>(api: &A, id: &str) -> Result<Booking, AppError>
where
    A: BookingApi + Sync,
{
    set_booking_status(api, id, BookingStatus::Cancelled).await
}
