//! Repositories - every repository port behind one handle.

use std::sync::Arc;

use super::{
    EducationRepository, ProfileRepository, ProjectRepository, SkillRepository,
    SocialLinkRepository, WorkExperienceRepository,
};

/// The full set of repository ports, shared by the HTTP layer and the seed
/// loader. Cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub profiles: Arc<dyn ProfileRepository>,
    pub education: Arc<dyn EducationRepository>,
    pub skills: Arc<dyn SkillRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub work_experience: Arc<dyn WorkExperienceRepository>,
    pub social_links: Arc<dyn SocialLinkRepository>,
}
