//! In-Memory Portfolio Store
//!
//! Keeps every table in ordered maps behind one lock and applies the same
//! integrity rules as the PostgreSQL schema: foreign keys must resolve,
//! unique pairs stay unique, and deletes cascade.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, EducationId, ProfileId, ProjectId, ProjectLinkId, ProjectSkillId, SkillId,
    SocialLinkId, Timestamp, ValidationError, WorkExperienceId,
};
use crate::domain::portfolio::{
    contains_ignore_case, project_matches, skill_matches, work_experience_matches, Education,
    EducationDraft, Profile, ProfileDraft, Project, ProjectDraft, ProjectLink, ProjectLinkDraft,
    ProjectSkill, Skill, SkillDraft, SkillUsage, SocialLink, SocialLinkDraft, WorkExperience,
    WorkExperienceDraft,
};
use crate::ports::{
    EducationRepository, ProfileRepository, ProjectRepository, Repositories, SkillRepository,
    SocialLinkRepository, WorkExperienceRepository,
};

#[derive(Debug, Default)]
struct Sequences {
    profile: i64,
    education: i64,
    skill: i64,
    project: i64,
    project_link: i64,
    project_skill: i64,
    work_experience: i64,
    social_link: i64,
}

fn next(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

#[derive(Debug, Clone, Copy)]
struct Association {
    project: ProjectId,
    skill: SkillId,
}

#[derive(Debug, Default)]
struct Tables {
    seq: Sequences,
    profiles: BTreeMap<ProfileId, Profile>,
    education: BTreeMap<EducationId, Education>,
    skills: BTreeMap<SkillId, Skill>,
    projects: BTreeMap<ProjectId, Project>,
    project_links: BTreeMap<ProjectLinkId, ProjectLink>,
    project_skills: BTreeMap<ProjectSkillId, Association>,
    work_experience: BTreeMap<WorkExperienceId, WorkExperience>,
    social_links: BTreeMap<SocialLinkId, SocialLink>,
}

impl Tables {
    fn require_profile(&self, id: ProfileId) -> Result<(), DomainError> {
        if self.profiles.contains_key(&id) {
            Ok(())
        } else {
            Err(ValidationError::missing_reference("profile", id.as_i64()).into())
        }
    }

    fn check_skill_unique(&self, draft: &SkillDraft, own: Option<SkillId>) -> Result<(), DomainError> {
        let taken = self.skills.values().any(|s| {
            Some(s.id) != own && s.profile == draft.profile && s.name == draft.name
        });
        if taken {
            return Err(ValidationError::not_unique(&["profile", "name"]).into());
        }
        Ok(())
    }

    fn check_platform_unique(
        &self,
        draft: &SocialLinkDraft,
        own: Option<SocialLinkId>,
    ) -> Result<(), DomainError> {
        let taken = self.social_links.values().any(|l| {
            Some(l.id) != own && l.profile == draft.profile && l.platform == draft.platform
        });
        if taken {
            return Err(ValidationError::not_unique(&["profile", "platform"]).into());
        }
        Ok(())
    }

    fn project_skill_view(&self, id: ProjectSkillId, assoc: &Association) -> Option<ProjectSkill> {
        self.skills.get(&assoc.skill).map(|skill| ProjectSkill {
            id,
            project: assoc.project,
            skill: assoc.skill,
            skill_name: skill.name.clone(),
            skill_level: skill.level,
        })
    }

    fn projects_count(&self, skill: SkillId) -> usize {
        self.project_skills
            .values()
            .filter(|a| a.skill == skill)
            .map(|a| a.project)
            .collect::<BTreeSet<_>>()
            .len()
    }

    fn skill_usage(&self, skill: &Skill) -> SkillUsage {
        SkillUsage {
            skill: skill.clone(),
            projects_count: self.projects_count(skill.id),
        }
    }

    fn remove_skill(&mut self, id: SkillId) -> bool {
        self.project_skills.retain(|_, a| a.skill != id);
        self.skills.remove(&id).is_some()
    }

    fn remove_project(&mut self, id: ProjectId) -> bool {
        self.project_links.retain(|_, l| l.project != id);
        self.project_skills.retain(|_, a| a.project != id);
        self.projects.remove(&id).is_some()
    }

    fn remove_profile(&mut self, id: ProfileId) -> bool {
        let skills: Vec<SkillId> = self
            .skills
            .values()
            .filter(|s| s.profile == id)
            .map(|s| s.id)
            .collect();
        for skill in skills {
            self.remove_skill(skill);
        }
        let projects: Vec<ProjectId> = self
            .projects
            .values()
            .filter(|p| p.profile == id)
            .map(|p| p.id)
            .collect();
        for project in projects {
            self.remove_project(project);
        }
        self.education.retain(|_, e| e.profile != id);
        self.work_experience.retain(|_, w| w.profile != id);
        self.social_links.retain(|_, l| l.profile != id);
        self.profiles.remove(&id).is_some()
    }
}

/// In-memory implementation of every portfolio repository port.
///
/// Clones share the same underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPortfolioStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryPortfolioStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Every repository port, all backed by this store.
    pub fn repositories(&self) -> Repositories {
        Repositories {
            profiles: Arc::new(self.clone()),
            education: Arc::new(self.clone()),
            skills: Arc::new(self.clone()),
            projects: Arc::new(self.clone()),
            work_experience: Arc::new(self.clone()),
            social_links: Arc::new(self.clone()),
        }
    }

    /// Number of stored project links
    pub async fn project_link_count(&self) -> usize {
        self.tables.read().await.project_links.len()
    }

    /// Number of stored project/skill associations
    pub async fn project_skill_count(&self) -> usize {
        self.tables.read().await.project_skills.len()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryPortfolioStore {
    async fn list(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self.tables.read().await.profiles.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, DomainError> {
        Ok(self.tables.read().await.profiles.get(&id).cloned())
    }

    async fn first(&self) -> Result<Option<Profile>, DomainError> {
        Ok(self.tables.read().await.profiles.values().next().cloned())
    }

    async fn create(&self, draft: &ProfileDraft) -> Result<Profile, DomainError> {
        let mut tables = self.tables.write().await;
        let now = Timestamp::now();
        let profile = Profile {
            id: ProfileId::new(next(&mut tables.seq.profile)),
            name: draft.name.clone(),
            email: draft.email.clone(),
            bio: draft.bio.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn update(&self, id: ProfileId, draft: &ProfileDraft) -> Result<Profile, DomainError> {
        let mut tables = self.tables.write().await;
        let profile = tables
            .profiles
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Profile", id))?;
        profile.name = draft.name.clone();
        profile.email = draft.email.clone();
        profile.bio = draft.bio.clone();
        profile.updated_at = Timestamp::now();
        Ok(profile.clone())
    }

    async fn delete(&self, id: ProfileId) -> Result<(), DomainError> {
        if self.tables.write().await.remove_profile(id) {
            Ok(())
        } else {
            Err(DomainError::not_found("Profile", id))
        }
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let mut tables = self.tables.write().await;
        let ids: Vec<ProfileId> = tables.profiles.keys().copied().collect();
        for id in &ids {
            tables.remove_profile(*id);
        }
        Ok(ids.len() as u64)
    }
}

#[async_trait]
impl EducationRepository for InMemoryPortfolioStore {
    async fn list(&self) -> Result<Vec<Education>, DomainError> {
        Ok(self.tables.read().await.education.values().cloned().collect())
    }

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Education>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .education
            .values()
            .filter(|e| e.profile == profile)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: EducationId) -> Result<Option<Education>, DomainError> {
        Ok(self.tables.read().await.education.get(&id).cloned())
    }

    async fn create(&self, draft: &EducationDraft) -> Result<Education, DomainError> {
        let mut tables = self.tables.write().await;
        tables.require_profile(draft.profile)?;
        let entry = Education {
            id: EducationId::new(next(&mut tables.seq.education)),
            profile: draft.profile,
            institution: draft.institution.clone(),
            degree: draft.degree.clone(),
            field_of_study: draft.field_of_study.clone(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            description: draft.description.clone(),
        };
        tables.education.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn update(
        &self,
        id: EducationId,
        draft: &EducationDraft,
    ) -> Result<Education, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.education.contains_key(&id) {
            return Err(DomainError::not_found("Education", id));
        }
        tables.require_profile(draft.profile)?;
        let entry = Education {
            id,
            profile: draft.profile,
            institution: draft.institution.clone(),
            degree: draft.degree.clone(),
            field_of_study: draft.field_of_study.clone(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            description: draft.description.clone(),
        };
        tables.education.insert(id, entry.clone());
        Ok(entry)
    }

    async fn delete(&self, id: EducationId) -> Result<(), DomainError> {
        match self.tables.write().await.education.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Education", id)),
        }
    }
}

#[async_trait]
impl SkillRepository for InMemoryPortfolioStore {
    async fn list(&self) -> Result<Vec<Skill>, DomainError> {
        Ok(self.tables.read().await.skills.values().cloned().collect())
    }

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Skill>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .skills
            .values()
            .filter(|s| s.profile == profile)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: SkillId) -> Result<Option<Skill>, DomainError> {
        Ok(self.tables.read().await.skills.get(&id).cloned())
    }

    async fn create(&self, draft: &SkillDraft) -> Result<Skill, DomainError> {
        let mut tables = self.tables.write().await;
        tables.require_profile(draft.profile)?;
        tables.check_skill_unique(draft, None)?;
        let skill = Skill {
            id: SkillId::new(next(&mut tables.seq.skill)),
            profile: draft.profile,
            name: draft.name.clone(),
            level: draft.level,
            years_experience: draft.years_experience,
        };
        tables.skills.insert(skill.id, skill.clone());
        Ok(skill)
    }

    async fn update(&self, id: SkillId, draft: &SkillDraft) -> Result<Skill, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.skills.contains_key(&id) {
            return Err(DomainError::not_found("Skill", id));
        }
        tables.require_profile(draft.profile)?;
        tables.check_skill_unique(draft, Some(id))?;
        let skill = Skill {
            id,
            profile: draft.profile,
            name: draft.name.clone(),
            level: draft.level,
            years_experience: draft.years_experience,
        };
        tables.skills.insert(id, skill.clone());
        Ok(skill)
    }

    async fn delete(&self, id: SkillId) -> Result<(), DomainError> {
        if self.tables.write().await.remove_skill(id) {
            Ok(())
        } else {
            Err(DomainError::not_found("Skill", id))
        }
    }

    async fn count_by_profile(&self, profile: ProfileId) -> Result<usize, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .skills
            .values()
            .filter(|s| s.profile == profile)
            .count())
    }

    async fn usage(&self) -> Result<Vec<SkillUsage>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.skills.values().map(|s| tables.skill_usage(s)).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<SkillUsage>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .skills
            .values()
            .filter(|s| skill_matches(s, term))
            .map(|s| tables.skill_usage(s))
            .collect())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryPortfolioStore {
    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        Ok(self.tables.read().await.projects.values().cloned().collect())
    }

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Project>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .projects
            .values()
            .filter(|p| p.profile == profile)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, DomainError> {
        Ok(self.tables.read().await.projects.get(&id).cloned())
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<Project, DomainError> {
        let mut tables = self.tables.write().await;
        tables.require_profile(draft.profile)?;
        let project = Project {
            id: ProjectId::new(next(&mut tables.seq.project)),
            profile: draft.profile,
            title: draft.title.clone(),
            description: draft.description.clone(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            is_ongoing: draft.is_ongoing,
            created_at: Timestamp::now(),
        };
        tables.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, id: ProjectId, draft: &ProjectDraft) -> Result<Project, DomainError> {
        let mut tables = self.tables.write().await;
        tables.require_profile(draft.profile)?;
        let project = tables
            .projects
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Project", id))?;
        project.profile = draft.profile;
        project.title = draft.title.clone();
        project.description = draft.description.clone();
        project.start_date = draft.start_date;
        project.end_date = draft.end_date;
        project.is_ongoing = draft.is_ongoing;
        Ok(project.clone())
    }

    async fn delete(&self, id: ProjectId) -> Result<(), DomainError> {
        if self.tables.write().await.remove_project(id) {
            Ok(())
        } else {
            Err(DomainError::not_found("Project", id))
        }
    }

    async fn count_by_profile(&self, profile: ProfileId) -> Result<usize, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .projects
            .values()
            .filter(|p| p.profile == profile)
            .count())
    }

    async fn search(&self, term: &str) -> Result<Vec<Project>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .projects
            .values()
            .filter(|p| project_matches(p, term))
            .cloned()
            .collect())
    }

    async fn find_by_skill_name(&self, term: &str) -> Result<Vec<Project>, DomainError> {
        let tables = self.tables.read().await;
        let ids: BTreeSet<ProjectId> = tables
            .project_skills
            .values()
            .filter(|a| {
                tables
                    .skills
                    .get(&a.skill)
                    .is_some_and(|s| contains_ignore_case(&s.name, term))
            })
            .map(|a| a.project)
            .collect();
        Ok(ids
            .iter()
            .filter_map(|id| tables.projects.get(id).cloned())
            .collect())
    }

    async fn links_for(&self, projects: &[ProjectId]) -> Result<Vec<ProjectLink>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .project_links
            .values()
            .filter(|l| projects.contains(&l.project))
            .cloned()
            .collect())
    }

    async fn add_link(&self, draft: &ProjectLinkDraft) -> Result<ProjectLink, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.projects.contains_key(&draft.project) {
            return Err(ValidationError::missing_reference("project", draft.project.as_i64()).into());
        }
        let link = ProjectLink {
            id: ProjectLinkId::new(next(&mut tables.seq.project_link)),
            project: draft.project,
            url: draft.url.clone(),
            link_type: draft.link_type,
            description: draft.description.clone(),
        };
        tables.project_links.insert(link.id, link.clone());
        Ok(link)
    }

    async fn delete_link(&self, id: ProjectLinkId) -> Result<(), DomainError> {
        match self.tables.write().await.project_links.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Project link", id)),
        }
    }

    async fn skills_for(&self, projects: &[ProjectId]) -> Result<Vec<ProjectSkill>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .project_skills
            .iter()
            .filter(|(_, a)| projects.contains(&a.project))
            .filter_map(|(id, a)| tables.project_skill_view(*id, a))
            .collect())
    }

    async fn attach_skill(
        &self,
        project: ProjectId,
        skill: SkillId,
    ) -> Result<ProjectSkill, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.projects.contains_key(&project) {
            return Err(ValidationError::missing_reference("project", project.as_i64()).into());
        }
        if !tables.skills.contains_key(&skill) {
            return Err(ValidationError::missing_reference("skill", skill.as_i64()).into());
        }
        if tables
            .project_skills
            .values()
            .any(|a| a.project == project && a.skill == skill)
        {
            return Err(ValidationError::not_unique(&["project", "skill"]).into());
        }
        let id = ProjectSkillId::new(next(&mut tables.seq.project_skill));
        let assoc = Association { project, skill };
        tables.project_skills.insert(id, assoc);
        tables
            .project_skill_view(id, &assoc)
            .ok_or_else(|| DomainError::not_found("Skill", skill))
    }

    async fn detach_skill(&self, id: ProjectSkillId) -> Result<(), DomainError> {
        match self.tables.write().await.project_skills.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Project skill", id)),
        }
    }
}

#[async_trait]
impl WorkExperienceRepository for InMemoryPortfolioStore {
    async fn list(&self) -> Result<Vec<WorkExperience>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .work_experience
            .values()
            .cloned()
            .collect())
    }

    async fn list_by_profile(
        &self,
        profile: ProfileId,
    ) -> Result<Vec<WorkExperience>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .work_experience
            .values()
            .filter(|w| w.profile == profile)
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        id: WorkExperienceId,
    ) -> Result<Option<WorkExperience>, DomainError> {
        Ok(self.tables.read().await.work_experience.get(&id).cloned())
    }

    async fn create(&self, draft: &WorkExperienceDraft) -> Result<WorkExperience, DomainError> {
        let mut tables = self.tables.write().await;
        tables.require_profile(draft.profile)?;
        let id = WorkExperienceId::new(next(&mut tables.seq.work_experience));
        let entry = work_experience_from_draft(id, draft);
        tables.work_experience.insert(id, entry.clone());
        Ok(entry)
    }

    async fn update(
        &self,
        id: WorkExperienceId,
        draft: &WorkExperienceDraft,
    ) -> Result<WorkExperience, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.work_experience.contains_key(&id) {
            return Err(DomainError::not_found("Work experience", id));
        }
        tables.require_profile(draft.profile)?;
        let entry = work_experience_from_draft(id, draft);
        tables.work_experience.insert(id, entry.clone());
        Ok(entry)
    }

    async fn delete(&self, id: WorkExperienceId) -> Result<(), DomainError> {
        match self.tables.write().await.work_experience.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Work experience", id)),
        }
    }

    async fn search(&self, term: &str) -> Result<Vec<WorkExperience>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .work_experience
            .values()
            .filter(|w| work_experience_matches(w, term))
            .cloned()
            .collect())
    }
}

fn work_experience_from_draft(id: WorkExperienceId, draft: &WorkExperienceDraft) -> WorkExperience {
    WorkExperience {
        id,
        profile: draft.profile,
        company: draft.company.clone(),
        position: draft.position.clone(),
        location: draft.location.clone(),
        start_date: draft.start_date,
        end_date: draft.end_date,
        is_current: draft.is_current,
        description: draft.description.clone(),
    }
}

#[async_trait]
impl SocialLinkRepository for InMemoryPortfolioStore {
    async fn list(&self) -> Result<Vec<SocialLink>, DomainError> {
        Ok(self.tables.read().await.social_links.values().cloned().collect())
    }

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<SocialLink>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .social_links
            .values()
            .filter(|l| l.profile == profile)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: SocialLinkId) -> Result<Option<SocialLink>, DomainError> {
        Ok(self.tables.read().await.social_links.get(&id).cloned())
    }

    async fn create(&self, draft: &SocialLinkDraft) -> Result<SocialLink, DomainError> {
        let mut tables = self.tables.write().await;
        tables.require_profile(draft.profile)?;
        tables.check_platform_unique(draft, None)?;
        let link = SocialLink {
            id: SocialLinkId::new(next(&mut tables.seq.social_link)),
            profile: draft.profile,
            platform: draft.platform,
            url: draft.url.clone(),
            description: draft.description.clone(),
        };
        tables.social_links.insert(link.id, link.clone());
        Ok(link)
    }

    async fn update(
        &self,
        id: SocialLinkId,
        draft: &SocialLinkDraft,
    ) -> Result<SocialLink, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.social_links.contains_key(&id) {
            return Err(DomainError::not_found("Social link", id));
        }
        tables.require_profile(draft.profile)?;
        tables.check_platform_unique(draft, Some(id))?;
        let link = SocialLink {
            id,
            profile: draft.profile,
            platform: draft.platform,
            url: draft.url.clone(),
            description: draft.description.clone(),
        };
        tables.social_links.insert(id, link.clone());
        Ok(link)
    }

    async fn delete(&self, id: SocialLinkId) -> Result<(), DomainError> {
        match self.tables.write().await.social_links.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Social link", id)),
        }
    }
}
