use crate::api::ReviewApi;
use crate::error::AppError;
use crate::models::booking::parse_when;
use crate::models::review::Review;

/// Reviews left for a vendor, newest first.
pub async fn reviews_for_vendor<A>(api: &A, vendor_id: &str) -> Result<Vec<Review>, AppError>
where
    A: ReviewApi + Sync,
{
    let mut reviews = api.reviews_by_vendor(vendor_id).await?;
    reviews.sort_by(|a, b| {
        let left = a.review_date.as_deref().and_then(parse_when);
        let right = b.review_date.as_deref().and_then(parse_when);
        right.cmp(&left)
    });
    Ok(reviews)
}

/// Mean star rating across reviews that carry one; `None` when no review
/// has a rating yet.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    let ratings: Vec<i32> = reviews.iter().filter_map(|r| r.rating).collect();
    if ratings.is_empty() {
        return None;
    }
    Some(f64::from(ratings.iter().sum::<i32>()) / ratings.len() as f64)
}

/// Submit a review with the star rating clamped to the widget's 1..=5.
pub async fn submit_review<A>(api: &A, mut review: Review) -> Result<Review, AppError>
where
    A: ReviewApi + Sync,
{
    if review.vendor_id.is_none() {
        return Err(AppError::MissingPrerequisite("vendor id".to_string()));
    }
    review.rating = review.rating.map(|stars| stars.clamp(1, 5));
    api.create_review(&review).await
}
