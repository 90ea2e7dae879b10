//! Data models for Reevoo review payloads and query parameters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Largest page size the customer experience review listing accepts.
pub const MAX_PER_PAGE: u32 = 30;

/// Smallest page size the listing accepts, and the default for single calls.
pub const DEFAULT_PER_PAGE: u32 = 15;

/// One customer experience review as returned by the API.
///
/// Reviews are kept as opaque JSON objects. The crate itself only ever reads
/// the date fields named by [`DateField`]; everything else passes through to
/// the caller untouched.
pub type ExperienceReview = Map<String, Value>;

/// One page of customer experience reviews with its listing summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceReviewPage {
    /// Reviews on this page, in upstream order
    pub customer_experience_reviews: Vec<ExperienceReview>,
    /// Aggregate information about the whole listing
    pub summary: ReviewSummary,
}

impl ExperienceReviewPage {
    /// Returns the number of reviews on this page.
    pub fn len(&self) -> usize {
        self.customer_experience_reviews.len()
    }

    /// Returns true if the page holds no reviews.
    pub fn is_empty(&self) -> bool {
        self.customer_experience_reviews.is_empty()
    }

    /// Returns the total page count reported for the listing.
    pub fn total_pages(&self) -> u32 {
        self.summary.pagination.total_pages
    }
}

/// Summary block attached to a review listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// Pagination counters for the listing
    pub pagination: Pagination,
}

/// Pagination counters reported by list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based index of the returned page
    #[serde(default)]
    pub current_page: u32,
    /// Page size the listing was cut into
    #[serde(default)]
    pub per_page: u32,
    /// Total number of pages in the listing
    pub total_pages: u32,
    /// Total number of records across all pages
    #[serde(default)]
    pub total_entries: u64,
}

/// Date fields a customer experience review can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    /// Date the review was published
    #[default]
    PublishDate,
    /// Date the reviewed order was delivered
    DeliveryDate,
    /// Date the reviewed order was placed
    PurchaseDate,
}

impl DateField {
    /// Returns the JSON key this field is stored under in a review.
    pub fn key(&self) -> &'static str {
        match self {
            DateField::PublishDate => "publish_date",
            DateField::DeliveryDate => "delivery_date",
            DateField::PurchaseDate => "purchase_date",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for DateField {
    type Err = DateFieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "publish_date" | "publish" | "published" => Ok(DateField::PublishDate),
            "delivery_date" | "delivery" | "delivered" => Ok(DateField::DeliveryDate),
            "purchase_date" | "purchase" | "purchased" => Ok(DateField::PurchaseDate),
            _ => Err(DateFieldParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DateFieldParseError(String);

impl fmt::Display for DateFieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown date field '{}'. Valid fields: publish_date, delivery_date, purchase_date",
            self.0
        )
    }
}

impl std::error::Error for DateFieldParseError {}

/// Region scopes accepted by the published review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewRegion {
    MyLocale,
    MyCountry,
    MyLanguages,
    English,
    Worldwide,
}

impl ReviewRegion {
    /// Returns the query parameter value for this region scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewRegion::MyLocale => "my-locale",
            ReviewRegion::MyCountry => "my-country",
            ReviewRegion::MyLanguages => "my-languages",
            ReviewRegion::English => "english",
            ReviewRegion::Worldwide => "worldwide",
        }
    }
}

impl fmt::Display for ReviewRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReviewRegion {
    type Err = ReviewRegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "my-locale" | "my_locale" => Ok(ReviewRegion::MyLocale),
            "my-country" | "my_country" => Ok(ReviewRegion::MyCountry),
            "my-languages" | "my_languages" => Ok(ReviewRegion::MyLanguages),
            "english" => Ok(ReviewRegion::English),
            "worldwide" => Ok(ReviewRegion::Worldwide),
            _ => Err(ReviewRegionParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReviewRegionParseError(String);

impl fmt::Display for ReviewRegionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown region '{}'. Valid regions: my-locale, my-country, my-languages, english, worldwide",
            self.0
        )
    }
}

impl std::error::Error for ReviewRegionParseError {}

/// Fuel types accepted by the automotive listing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Diesel,
    Petrol,
}

impl FuelType {
    /// Returns the query parameter value for this fuel type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Diesel => "diesel",
            FuelType::Petrol => "petrol",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = FuelTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "diesel" => Ok(FuelType::Diesel),
            "petrol" => Ok(FuelType::Petrol),
            _ => Err(FuelTypeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FuelTypeParseError(String);

impl fmt::Display for FuelTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown fuel type '{}'. Valid types: diesel, petrol", self.0)
    }
}

impl std::error::Error for FuelTypeParseError {}

/// Extra listing parameters for organisations with automotive reviewables.
///
/// Manufacturer and model are always sent; every other field is added to the
/// query string only when set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutomotiveOptions {
    /// Vehicle manufacturer
    pub manufacturer: String,
    /// Vehicle model
    pub model: String,
    /// Trim or variant of the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_variant: Option<String>,
    /// Model year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_year: Option<i32>,
    /// Image URL for the vehicle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Body type (hatchback, saloon, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    /// Number of doors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<u8>,
    /// Whether the vehicle is second-hand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<bool>,
    /// Vehicle type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    /// Fuel type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
    /// Transmission (manual, automatic, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    /// Display name override for the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_display: Option<String>,
    /// Free-text specification description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_description: Option<String>,
    /// Engine size in liters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_size_in_liters: Option<f64>,
}

impl AutomotiveOptions {
    /// Creates options with the two mandatory fields set.
    pub fn new(manufacturer: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    /// Flattens the options into query string pairs, skipping unset fields.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("manufacturer", self.manufacturer.clone()),
            ("model", self.model.clone()),
        ];
        if let Some(v) = &self.model_variant {
            pairs.push(("model_variant", v.clone()));
        }
        if let Some(v) = self.model_year {
            pairs.push(("model_year", v.to_string()));
        }
        if let Some(v) = &self.image_url {
            pairs.push(("image_url", v.clone()));
        }
        if let Some(v) = &self.body_type {
            pairs.push(("body_type", v.clone()));
        }
        if let Some(v) = self.doors {
            pairs.push(("doors", v.to_string()));
        }
        if let Some(v) = self.used {
            pairs.push(("used", v.to_string()));
        }
        if let Some(v) = &self.vehicle_type {
            pairs.push(("vehicle_type", v.clone()));
        }
        if let Some(v) = self.fuel_type {
            pairs.push(("fuel_type", v.as_str().to_string()));
        }
        if let Some(v) = &self.transmission {
            pairs.push(("transmission", v.clone()));
        }
        if let Some(v) = &self.model_display {
            pairs.push(("model_display", v.clone()));
        }
        if let Some(v) = &self.spec_description {
            pairs.push(("spec_description", v.clone()));
        }
        if let Some(v) = self.engine_size_in_liters {
            pairs.push(("engine_size_in_liters", v.to_string()));
        }
        pairs
    }
}

/// Order reference and SKU pair used to match purchases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRef {
    /// Order reference recorded at purchase time
    pub order_ref: String,
    /// SKU of the purchased product
    pub sku: String,
}

impl PurchaseRef {
    /// Creates a new purchase reference.
    pub fn new(order_ref: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            order_ref: order_ref.into(),
            sku: sku.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_field_parsing() {
        assert_eq!(
            DateField::from_str("publish_date").unwrap(),
            DateField::PublishDate
        );
        assert_eq!(
            DateField::from_str("delivery_date").unwrap(),
            DateField::DeliveryDate
        );
        assert_eq!(
            DateField::from_str("purchase_date").unwrap(),
            DateField::PurchaseDate
        );

        // Short forms and case insensitivity
        assert_eq!(DateField::from_str("publish").unwrap(), DateField::PublishDate);
        assert_eq!(DateField::from_str("DELIVERED").unwrap(), DateField::DeliveryDate);

        // Invalid
        assert!(DateField::from_str("order_date").is_err());
        assert!(DateField::from_str("").is_err());
    }

    #[test]
    fn test_date_field_key_and_display() {
        assert_eq!(DateField::PublishDate.key(), "publish_date");
        assert_eq!(DateField::DeliveryDate.key(), "delivery_date");
        assert_eq!(DateField::PurchaseDate.key(), "purchase_date");
        assert_eq!(DateField::PublishDate.to_string(), "publish_date");
    }

    #[test]
    fn test_date_field_default() {
        assert_eq!(DateField::default(), DateField::PublishDate);
    }

    #[test]
    fn test_date_field_serde() {
        let json = serde_json::to_string(&DateField::DeliveryDate).unwrap();
        assert_eq!(json, "\"delivery_date\"");

        let parsed: DateField = serde_json::from_str("\"purchase_date\"").unwrap();
        assert_eq!(parsed, DateField::PurchaseDate);
    }

    #[test]
    fn test_date_field_parse_error_display() {
        let err = DateField::from_str("order_date").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("order_date"));
        assert!(msg.contains("Valid fields"));
    }

    #[test]
    fn test_review_region_parsing() {
        assert_eq!(
            ReviewRegion::from_str("my-locale").unwrap(),
            ReviewRegion::MyLocale
        );
        assert_eq!(
            ReviewRegion::from_str("my_country").unwrap(),
            ReviewRegion::MyCountry
        );
        assert_eq!(
            ReviewRegion::from_str("my-languages").unwrap(),
            ReviewRegion::MyLanguages
        );
        assert_eq!(ReviewRegion::from_str("english").unwrap(), ReviewRegion::English);
        assert_eq!(
            ReviewRegion::from_str("WORLDWIDE").unwrap(),
            ReviewRegion::Worldwide
        );
        assert!(ReviewRegion::from_str("everywhere").is_err());
    }

    #[test]
    fn test_review_region_display() {
        assert_eq!(ReviewRegion::MyLocale.to_string(), "my-locale");
        assert_eq!(ReviewRegion::MyCountry.to_string(), "my-country");
        assert_eq!(ReviewRegion::MyLanguages.to_string(), "my-languages");
        assert_eq!(ReviewRegion::English.to_string(), "english");
        assert_eq!(ReviewRegion::Worldwide.to_string(), "worldwide");
    }

    #[test]
    fn test_review_region_serde() {
        let json = serde_json::to_string(&ReviewRegion::MyLocale).unwrap();
        assert_eq!(json, "\"my-locale\"");

        let parsed: ReviewRegion = serde_json::from_str("\"worldwide\"").unwrap();
        assert_eq!(parsed, ReviewRegion::Worldwide);
    }

    #[test]
    fn test_fuel_type() {
        assert_eq!(FuelType::from_str("diesel").unwrap(), FuelType::Diesel);
        assert_eq!(FuelType::from_str("Petrol").unwrap(), FuelType::Petrol);
        assert!(FuelType::from_str("electric").is_err());

        assert_eq!(FuelType::Diesel.to_string(), "diesel");
        assert_eq!(serde_json::to_string(&FuelType::Petrol).unwrap(), "\"petrol\"");
    }

    #[test]
    fn test_pagination_defaults() {
        let pagination: Pagination =
            serde_json::from_str("{\"total_pages\": 7}").unwrap();
        assert_eq!(pagination.total_pages, 7);
        assert_eq!(pagination.current_page, 0);
        assert_eq!(pagination.per_page, 0);
        assert_eq!(pagination.total_entries, 0);
    }

    #[test]
    fn test_experience_review_page_deserialize() {
        let body = r#"{
            "customer_experience_reviews": [
                {"review_id": "1", "publish_date": "2016-01-02", "overall_rating": 9},
                {"review_id": "2", "publish_date": "2016-01-03"}
            ],
            "summary": {
                "pagination": {
                    "current_page": 1,
                    "per_page": 30,
                    "total_pages": 4,
                    "total_entries": 97
                }
            }
        }"#;

        let page: ExperienceReviewPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.len(), 2);
        assert!(!page.is_empty());
        assert_eq!(page.total_pages(), 4);
        assert_eq!(
            page.customer_experience_reviews[0]["publish_date"],
            "2016-01-02"
        );
    }

    #[test]
    fn test_empty_page() {
        let body = r#"{
            "customer_experience_reviews": [],
            "summary": {"pagination": {"total_pages": 0}}
        }"#;

        let page: ExperienceReviewPage = serde_json::from_str(body).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn test_automotive_options_mandatory_pairs() {
        let options = AutomotiveOptions::new("Ford", "Focus");
        let pairs = options.query_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("manufacturer", "Ford".to_string()));
        assert_eq!(pairs[1], ("model", "Focus".to_string()));
    }

    #[test]
    fn test_automotive_options_full_pairs() {
        let options = AutomotiveOptions {
            model_variant: Some("Titanium".to_string()),
            model_year: Some(2015),
            image_url: Some("https://example.com/focus.jpg".to_string()),
            body_type: Some("hatchback".to_string()),
            doors: Some(5),
            used: Some(false),
            vehicle_type: Some("car".to_string()),
            fuel_type: Some(FuelType::Diesel),
            transmission: Some("manual".to_string()),
            model_display: Some("Focus Titanium".to_string()),
            spec_description: Some("1.6 TDCi".to_string()),
            engine_size_in_liters: Some(1.6),
            ..AutomotiveOptions::new("Ford", "Focus")
        };

        let pairs = options.query_pairs();
        assert_eq!(pairs.len(), 14);
        assert!(pairs.contains(&("model_year", "2015".to_string())));
        assert!(pairs.contains(&("doors", "5".to_string())));
        assert!(pairs.contains(&("used", "false".to_string())));
        assert!(pairs.contains(&("fuel_type", "diesel".to_string())));
        assert!(pairs.contains(&("engine_size_in_liters", "1.6".to_string())));
    }

    #[test]
    fn test_automotive_options_serde_skips_unset() {
        let options = AutomotiveOptions::new("Ford", "Focus");
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("manufacturer"));
        assert!(!json.contains("model_variant"));
        assert!(!json.contains("fuel_type"));
    }

    #[test]
    fn test_purchase_ref() {
        let purchase = PurchaseRef::new("ORDER-1", "SKU-9");
        assert_eq!(purchase.order_ref, "ORDER-1");
        assert_eq!(purchase.sku, "SKU-9");

        let json = serde_json::to_string(&purchase).unwrap();
        assert!(json.contains("\"order_ref\":\"ORDER-1\""));
        assert!(json.contains("\"sku\":\"SKU-9\""));

        let parsed: PurchaseRef = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, purchase);
    }
}
