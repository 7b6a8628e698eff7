use crate::api::VendorApi;
use crate::error::AppError;
use crate::models::vendor::{Vendor, VendorStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorOrder {
    PriceAscending,
    PriceDescending,
    RatingDescending,
}

/// Client-side filters applied to an already-fetched vendor list.
#[derive(Debug, Clone, Default)]
pub struct VendorFilter {
    pub vendor_type: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// The couple-facing browse screen: fetch once, then filter and sort
/// locally. Only approved vendors are shown.
pub async fn browse_vendors<A>(api: &A, filter: &VendorFilter, order: Option<VendorOrder>) -> Result<Vec<Vendor>, AppError>
where
    A: VendorApi + Sync,
{
    let vendors = api.list_vendors().await?;
    let mut approved: Vec<Vendor> = vendors
        .into_iter()
        .filter(|v| matches!(v.status, None | Some(VendorStatus::Approved)))
        .collect();
    approved = apply_filter(approved, filter);
    if let Some(order) = order {
        sort_vendors(&mut approved, order);
    }
    Ok(approved)
}

pub fn apply_filter(vendors: Vec<Vendor>, filter: &VendorFilter) -> Vec<Vendor> {
    vendors
        .into_iter()
        .filter(|vendor| {
            if let Some(wanted) = &filter.vendor_type
                && vendor.vendor_type.as_deref() != Some(wanted.as_str())
            {
                return false;
            }
            if let Some(min) = filter.min_price
                && vendor.base_price.unwrap_or(0.0) < min
            {
                return false;
            }
            if let Some(max) = filter.max_price
                && vendor.base_price.unwrap_or(0.0) > max
            {
                return false;
            }
            if let Some(term) = &filter.search {
                return matches_search(vendor, term);
            }
            true
        })
        .collect()
}

fn matches_search(vendor: &Vendor, term: &str) -> bool {
    let needle = term.to_lowercase();
    [&vendor.name, &vendor.business_name, &vendor.description]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn sort_vendors(vendors: &mut [Vendor], order: VendorOrder) {
    match order {
        VendorOrder::PriceAscending => {
            vendors.sort_by(|a, b| a.base_price.unwrap_or(0.0).total_cmp(&b.base_price.unwrap_or(0.0)));
        }
        VendorOrder::PriceDescending => {
            vendors.sort_by(|a, b| b.base_price.unwrap_or(0.0).total_cmp(&a.base_price.unwrap_or(0.0)));
        }
        VendorOrder::RatingDescending => {
            vendors.sort_by(|a, b| b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockApi, vendor_record};

    fn vendor(id: &str, vendor_type: &str, price: f64, rating: f64) -> Vendor {
        let mut v = vendor_record(id, "v@example.com", "x");
        v.vendor_type = Some(vendor_type.to_string());
        v.base_price = Some(price);
        v.rating = Some(rating);
        v
    }

    #[tokio::test]
    async fn browse_hides_unapproved_vendors() {
        let mut api = MockApi::new();
        let mut pending = vendor("vendor-1", "FLORIST", 100.0, 4.0);
        pending.status = Some(VendorStatus::Pending);
        let mut approved = vendor("vendor-2", "FLORIST", 200.0, 4.5);
        approved.status = Some(VendorStatus::Approved);
        api.vendors = vec![pending, approved];

        let listed = browse_vendors(&api, &VendorFilter::default(), None).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "vendor-2");
    }

    #[test]
    fn type_filter_is_exact_and_search_is_case_insensitive() {
        let mut bloom = vendor("vendor-1", "FLORIST", 100.0, 4.0);
        bloom.name = Some("Bloom & Co".to_string());
        let snap = vendor("vendor-2", "PHOTOGRAPHY", 900.0, 4.9);

        let by_type = apply_filter(
            vec![bloom.clone(), snap.clone()],
            &VendorFilter {
                vendor_type: Some("FLORIST".to_string()),
                ..VendorFilter::default()
            },
        );
        assert_eq!(by_type.len(), 1);

        let by_search = apply_filter(
            vec![bloom, snap],
            &VendorFilter {
                search: Some("bloom".to_string()),
                ..VendorFilter::default()
            },
        );
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].id, "vendor-1");
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let cheap = vendor("vendor-1", "FLORIST", 500.0, 4.0);
        let dear = vendor("vendor-2", "FLORIST", 3000.0, 4.0);

        let mid = apply_filter(
            vec![cheap, dear],
            &VendorFilter {
                min_price: Some(500.0),
                max_price: Some(1000.0),
                ..VendorFilter::default()
            },
        );
        assert_eq!(mid.len(), 1);
        assert_eq!(mid[0].id, "vendor-1");
    }

    #[test]
    fn sorting_handles_missing_prices_as_zero() {
        let mut priced = vendor("vendor-1", "FLORIST", 900.0, 3.0);
        priced.rating = None;
        let mut unpriced = vendor("vendor-2", "FLORIST", 0.0, 5.0);
        unpriced.base_price = None;

        let mut vendors = vec![priced, unpriced];
        sort_vendors(&mut vendors, VendorOrder::PriceAscending);
        assert_eq!(vendors[0].id, "vendor-2");

        sort_vendors(&mut vendors, VendorOrder::RatingDescending);
        assert_eq!(vendors[0].id, "vendor-2");
    }
}
