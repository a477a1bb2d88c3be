mod browse;
mod personal;
mod service;

pub use browse::HOME_LISTING_COUNT;
pub use service::ListingQueryService;
