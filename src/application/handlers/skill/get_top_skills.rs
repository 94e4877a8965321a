//! GetTopSkillsHandler - Skills ranked by how many projects use them.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::portfolio::{rank_top_skills, SkillUsage, DEFAULT_TOP_SKILLS_LIMIT};
use crate::ports::SkillRepository;

/// Query for the `limit` highest-ranked skills.
#[derive(Debug, Clone)]
pub struct GetTopSkillsQuery {
    pub limit: usize,
}

impl Default for GetTopSkillsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TOP_SKILLS_LIMIT,
        }
    }
}

pub struct GetTopSkillsHandler {
    skills: Arc<dyn SkillRepository>,
}

impl GetTopSkillsHandler {
    pub fn new(skills: Arc<dyn SkillRepository>) -> Self {
        Self { skills }
    }

    pub async fn handle(&self, query: GetTopSkillsQuery) -> Result<Vec<SkillUsage>, DomainError> {
        let usage = self.skills.usage().await?;
        Ok(rank_top_skills(usage, query.limit))
    }
}
