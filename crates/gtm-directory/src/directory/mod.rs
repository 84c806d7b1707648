pub mod aggregate;
pub mod currency;
pub mod domain;
pub mod router;
mod service;
pub mod source;
pub mod stats;

pub use aggregate::{average_of, count, top_tags, ListingRollup, TagTally};
pub use currency::DisplayCurrency;
pub use domain::{Agency, Job, ListingRecord, ListingStatus};
pub use router::directory_router;
pub use service::{AgencyPageStats, DirectoryService, JobPageStats};
pub use source::{
    DirectoryImportError, DirectoryImporter, DirectoryQuery, InMemoryDirectory, ListingSource,
    SourceError,
};
pub use stats::{JobMarketStats, ListingSummary, LocationStats, RoleCount};
