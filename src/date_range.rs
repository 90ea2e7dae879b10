//! Client-side date-range scanning over customer experience reviews.
//!
//! The upstream API has no date filtering on the review archive, so this
//! module walks the paginated listing and filters each page locally. Wide
//! ranges on large archives can touch many pages, which makes the scan
//! heavier than a single listing call.

use crate::client::{ExperienceReviewPages, ReevooClient};
use crate::error::{Error, Result};
use crate::models::{DateField, ExperienceReview, MAX_PER_PAGE};
use chrono::NaiveDate;
use tracing::{debug, info};

impl ReevooClient {
    /// Collects the customer experience reviews whose `date_field` value
    /// falls within the given date range.
    ///
    /// At least one bound must be supplied. Both bounds are taken as
    /// inclusive, with the wrinkle that the bound arithmetic excludes
    /// records dated exactly `end_date` (see [`filter_reviews`]).
    pub async fn experience_reviews_in_date_range(
        &self,
        trkref: &str,
        branch_code: &str,
        date_field: DateField,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<ExperienceReview>> {
        collect(self, trkref, branch_code, date_field, start_date, end_date).await
    }
}

/// Walks the paginated review archive and returns the records inside the
/// date range, reading pages from any [`ExperienceReviewPages`] source.
///
/// Page 1 is fetched once up front purely for its page count and its records
/// are discarded, so a forward scan requests page 1 twice. The walk runs
/// forward from page 1 whenever `start_date` is present and backward from
/// the last page when only `end_date` is, stopping at the first page that
/// contributes fewer than [`MAX_PER_PAGE`] matching records. That stop is a
/// heuristic: a full page whose matches happen to fall short ends the scan
/// exactly like running off the edge of the range does. A backward walk
/// sorts what it collected into ascending publish order before returning
/// from that early stop; a backward walk that exhausts every page returns
/// the records in fetch order instead.
pub async fn collect(
    pages: &impl ExperienceReviewPages,
    trkref: &str,
    branch_code: &str,
    date_field: DateField,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<Vec<ExperienceReview>> {
    // The probe runs before the bounds check, so an unbounded call still
    // costs one request.
    let probe = pages
        .fetch_page(trkref, branch_code, 1, MAX_PER_PAGE)
        .await?;
    let total_pages = probe.total_pages();

    if start_date.is_none() && end_date.is_none() {
        return Err(Error::MissingDateBounds);
    }

    info!("Scanning {} pages of reviews for {}", total_pages, trkref);

    let mut collected: Vec<ExperienceReview> = Vec::new();

    if start_date.is_some() {
        // Walk from the first page toward the last
        let mut page = 1;
        while page <= total_pages {
            let fetched = pages
                .fetch_page(trkref, branch_code, page, MAX_PER_PAGE)
                .await?;
            let matched = filter_reviews(
                fetched.customer_experience_reviews,
                date_field,
                start_date,
                end_date,
                true,
                true,
            )?;
            let matched_len = matched.len();
            collected.extend(matched);

            debug!("Page {} contributed {} matching reviews", page, matched_len);

            if matched_len < MAX_PER_PAGE as usize {
                debug!("Short page, scan complete");
                break;
            }
            page += 1;
        }
    } else {
        // Walk from the last page toward the first
        let mut page = total_pages;
        let mut stopped_short = false;
        while page >= 1 {
            let fetched = pages
                .fetch_page(trkref, branch_code, page, MAX_PER_PAGE)
                .await?;
            let matched = filter_reviews(
                fetched.customer_experience_reviews,
                date_field,
                start_date,
                end_date,
                true,
                true,
            )?;
            let matched_len = matched.len();
            collected.extend(matched);

            debug!("Page {} contributed {} matching reviews", page, matched_len);

            if matched_len < MAX_PER_PAGE as usize {
                debug!("Short page, scan complete");
                stopped_short = true;
                break;
            }
            page -= 1;
        }

        // Only the short-page stop re-sorts; an exhausted backward walk
        // returns the records in fetch order.
        if stopped_short {
            collected = sort_by_publish_date(collected)?;
        }
    }

    info!("Collected {} reviews in date range", collected.len());
    Ok(collected)
}

/// Filters one page of reviews down to those inside the date range.
///
/// A bound whose inclusive flag is set moves one day into the past before
/// the strictly-between comparison, and a missing bound is open. With both
/// flags set (as the archive scan does) a record dated exactly `start_date`
/// is kept while records dated `end_date` or the day before are dropped:
/// the end bound shifts backward by the same day as the start bound. A
/// record whose `date_field` value is absent or not a `YYYY-MM-DD` string
/// fails the whole call rather than being skipped.
pub fn filter_reviews(
    reviews: Vec<ExperienceReview>,
    date_field: DateField,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    start_inclusive: bool,
    end_inclusive: bool,
) -> Result<Vec<ExperienceReview>> {
    let effective_start = match start_date {
        Some(date) if start_inclusive => date.pred_opt().unwrap_or(NaiveDate::MIN),
        Some(date) => date,
        None => NaiveDate::MIN,
    };
    // The end bound shifts backward as well, not forward
    let effective_end = match end_date {
        Some(date) if end_inclusive => date.pred_opt().unwrap_or(NaiveDate::MIN),
        Some(date) => date,
        None => NaiveDate::MAX,
    };

    let mut in_range = Vec::new();
    for review in reviews {
        let date = review_date(&review, date_field)?;
        if effective_start < date && date < effective_end {
            in_range.push(review);
        }
    }
    Ok(in_range)
}

/// Reads and parses a review's date field.
fn review_date(review: &ExperienceReview, field: DateField) -> Result<NaiveDate> {
    let value = review
        .get(field.key())
        .and_then(|value| value.as_str())
        .ok_or(Error::MissingDateField { field })?;

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| Error::DateParse {
        value: value.to_string(),
        source,
    })
}

/// Sorts reviews ascending by their raw `publish_date` value.
///
/// Archive dates are `YYYY-MM-DD` strings, so their lexicographic order is
/// their chronological order. The key is always the publish date, whatever
/// field the filter ran on; a review without one is an error.
fn sort_by_publish_date(reviews: Vec<ExperienceReview>) -> Result<Vec<ExperienceReview>> {
    let publish_key = DateField::PublishDate;

    let mut keyed = Vec::with_capacity(reviews.len());
    for review in reviews {
        let key = review
            .get(publish_key.key())
            .and_then(|value| value.as_str())
            .map(str::to_owned)
            .ok_or(Error::MissingDateField { field: publish_key })?;
        keyed.push((key, review));
    }

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, review)| review).collect())
}
