//! Shared application state.

use crate::application::handlers::{
    GetProfileDetailHandler, GetProfileSummaryHandler, GetProjectDetailHandler,
    GetTopSkillsHandler, ListProjectsBySkillHandler, SearchPortfolioHandler,
};
use crate::domain::foundation::ProfileId;
use crate::ports::Repositories;

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AppState {
    pub repositories: Repositories,
    /// Profile the summary endpoint falls back to when the request names none
    pub default_profile: Option<ProfileId>,
}

impl AppState {
    pub fn new(repositories: Repositories) -> Self {
        Self {
            repositories,
            default_profile: None,
        }
    }

    pub fn with_default_profile(mut self, profile: Option<ProfileId>) -> Self {
        self.default_profile = profile;
        self
    }

    pub fn profile_detail_handler(&self) -> GetProfileDetailHandler {
        GetProfileDetailHandler::new(self.repositories.clone())
    }

    pub fn profile_summary_handler(&self) -> GetProfileSummaryHandler {
        GetProfileSummaryHandler::new(
            self.repositories.profiles.clone(),
            self.repositories.skills.clone(),
            self.repositories.projects.clone(),
        )
        .with_default_profile(self.default_profile)
    }

    pub fn project_detail_handler(&self) -> GetProjectDetailHandler {
        GetProjectDetailHandler::new(self.repositories.projects.clone())
    }

    pub fn projects_by_skill_handler(&self) -> ListProjectsBySkillHandler {
        ListProjectsBySkillHandler::new(self.repositories.projects.clone())
    }

    pub fn top_skills_handler(&self) -> GetTopSkillsHandler {
        GetTopSkillsHandler::new(self.repositories.skills.clone())
    }

    pub fn search_handler(&self) -> SearchPortfolioHandler {
        SearchPortfolioHandler::new(
            self.repositories.projects.clone(),
            self.repositories.skills.clone(),
            self.repositories.work_experience.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPortfolioStore;

    #[test]
    fn state_creates_handlers() {
        let state = AppState::new(InMemoryPortfolioStore::new().repositories())
            .with_default_profile(Some(ProfileId::new(1)));
        let _ = state.profile_detail_handler();
        let _ = state.profile_summary_handler();
        let _ = state.project_detail_handler();
        let _ = state.projects_by_skill_handler();
        let _ = state.top_skills_handler();
        let _ = state.search_handler();
    }
}
