//! reevoo-rs - Async client library for the Reevoo Cloud review-platform API
//!
//! Wraps the `/v4` REST surface with HTTP basic auth, handing raw responses
//! back to the caller, and adds a client-side date-range scan over the
//! customer experience review archive (the API itself cannot filter the
//! archive by date).
//!
//! ```no_run
//! use reevoo_rs::{Config, DateField, ReevooClient};
//!
//! #[tokio::main]
//! async fn main() -> reevoo_rs::Result<()> {
//!     let config = Config::load(None)?.with_env();
//!     let client = ReevooClient::new(&config)?;
//!
//!     let start = "2016-01-01".parse().ok();
//!     let reviews = client
//!         .experience_reviews_in_date_range("TST", "", DateField::PublishDate, start, None)
//!         .await?;
//!     println!("{} reviews since 2016", reviews.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod date_range;
pub mod error;
pub mod models;

pub use client::{ExperienceReviewPages, ReevooClient, ReviewListQuery};
pub use config::Config;
pub use error::{Error, Result};
pub use models::{
    AutomotiveOptions, DateField, ExperienceReview, ExperienceReviewPage, FuelType, PurchaseRef,
    ReviewRegion,
};
