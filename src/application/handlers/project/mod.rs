//! Project query handlers.

mod get_project_detail;
mod list_projects_by_skill;

pub use get_project_detail::{GetProjectDetailHandler, GetProjectDetailQuery};
pub use list_projects_by_skill::{
    ListProjectsBySkillHandler, ListProjectsBySkillQuery, ProjectsBySkill,
};

use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::portfolio::{Project, ProjectDetail};
use crate::ports::ProjectRepository;

/// Attaches links and skill associations to each project, keeping the
/// order of `projects`. Two queries regardless of how many projects.
pub(crate) async fn load_project_details(
    repository: &dyn ProjectRepository,
    projects: Vec<Project>,
) -> Result<Vec<ProjectDetail>, DomainError> {
    if projects.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<ProjectId> = projects.iter().map(|p| p.id).collect();
    let mut links: HashMap<ProjectId, Vec<_>> = HashMap::new();
    for link in repository.links_for(&ids).await? {
        links.entry(link.project).or_default().push(link);
    }
    let mut skills: HashMap<ProjectId, Vec<_>> = HashMap::new();
    for project_skill in repository.skills_for(&ids).await? {
        skills.entry(project_skill.project).or_default().push(project_skill);
    }

    Ok(projects
        .into_iter()
        .map(|project| ProjectDetail {
            links: links.remove(&project.id).unwrap_or_default(),
            project_skills: skills.remove(&project.id).unwrap_or_default(),
            project,
        })
        .collect())
}
