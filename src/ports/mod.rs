//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `ProfileRepository` - Profiles, the root of every portfolio
//! - `EducationRepository`, `SkillRepository`, `WorkExperienceRepository`,
//!   `SocialLinkRepository` - Records owned by a profile
//! - `ProjectRepository` - Projects with their links and skill associations
//!
//! `Repositories` bundles one of each.
//!
//! All repositories enforce referential integrity: a write naming a missing
//! parent fails validation, and deleting a parent removes its dependents.

mod education_repository;
mod profile_repository;
mod project_repository;
mod repositories;
mod skill_repository;
mod social_link_repository;
mod work_experience_repository;

pub use education_repository::EducationRepository;
pub use profile_repository::ProfileRepository;
pub use project_repository::ProjectRepository;
pub use repositories::Repositories;
pub use skill_repository::SkillRepository;
pub use social_link_repository::SocialLinkRepository;
pub use work_experience_repository::WorkExperienceRepository;
