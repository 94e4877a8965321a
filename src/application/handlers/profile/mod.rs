//! Profile query handlers.

mod get_profile_detail;
mod get_profile_summary;

pub use get_profile_detail::{GetProfileDetailHandler, GetProfileDetailQuery};
pub use get_profile_summary::{GetProfileSummaryHandler, GetProfileSummaryQuery};
