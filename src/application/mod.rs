//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    GetProfileDetailHandler, GetProfileDetailQuery, GetProfileSummaryHandler,
    GetProfileSummaryQuery, GetProjectDetailHandler, GetProjectDetailQuery, GetTopSkillsHandler,
    GetTopSkillsQuery, ListProjectsBySkillHandler, ListProjectsBySkillQuery, ProjectsBySkill,
    SearchPortfolioHandler, SearchPortfolioQuery,
};
