//! Application handlers.
//!
//! Query handlers that assemble the aggregated portfolio reads from the
//! repository ports. Plain CRUD goes straight to the repositories.

pub mod profile;
pub mod project;
pub mod search;
pub mod skill;

pub use profile::{
    GetProfileDetailHandler, GetProfileDetailQuery, GetProfileSummaryHandler,
    GetProfileSummaryQuery,
};
pub use project::{
    GetProjectDetailHandler, GetProjectDetailQuery, ListProjectsBySkillHandler,
    ListProjectsBySkillQuery, ProjectsBySkill,
};
pub use search::{SearchPortfolioHandler, SearchPortfolioQuery};
pub use skill::{GetTopSkillsHandler, GetTopSkillsQuery};
