//! Sample portfolio loader.
//!
//! Writes one complete portfolio through the repository ports, so it works
//! against any storage backend.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ProfileId, ProjectId, SkillId};
use crate::domain::portfolio::{
    EducationDraft, LinkType, Platform, Profile, ProfileDraft, ProjectDraft, ProjectLinkDraft,
    SkillDraft, SkillLevel, SocialLinkDraft, WorkExperienceDraft,
};
use crate::ports::Repositories;

/// What a seed run wrote.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub profiles_removed: u64,
    pub profile: Profile,
}

const SKILLS: &[(&str, SkillLevel, u32)] = &[
    ("Python", SkillLevel::Expert, 5),
    ("Django", SkillLevel::Expert, 4),
    ("JavaScript", SkillLevel::Advanced, 4),
    ("React", SkillLevel::Advanced, 3),
    ("PostgreSQL", SkillLevel::Advanced, 3),
    ("Docker", SkillLevel::Intermediate, 2),
    ("AWS", SkillLevel::Intermediate, 2),
    ("Git", SkillLevel::Expert, 5),
    ("HTML/CSS", SkillLevel::Expert, 5),
    ("Node.js", SkillLevel::Intermediate, 2),
];

struct SampleProject {
    title: &'static str,
    description: &'static str,
    start: (i32, u32, u32),
    end: Option<(i32, u32, u32)>,
    is_ongoing: bool,
    links: &'static [(&'static str, LinkType, Option<&'static str>)],
    skills: &'static [&'static str],
}

const PROJECTS: &[SampleProject] = &[
    SampleProject {
        title: "E-commerce Platform",
        description: "A full-featured e-commerce platform built with Django and React. \
                      Features include user authentication, product catalog, shopping cart, \
                      payment integration, and admin dashboard.",
        start: (2023, 1, 1),
        end: Some((2023, 6, 30)),
        is_ongoing: false,
        links: &[
            (
                "https://github.com/johndoe/ecommerce-platform",
                LinkType::Github,
                Some("Source code repository"),
            ),
            (
                "https://ecommerce-demo.example.com",
                LinkType::Demo,
                Some("Live demo"),
            ),
        ],
        skills: &["Python", "Django", "React", "PostgreSQL"],
    },
    SampleProject {
        title: "Task Management API",
        description: "RESTful API for task management with user authentication, \
                      project organization, and real-time notifications using WebSockets.",
        start: (2022, 8, 1),
        end: Some((2022, 12, 31)),
        is_ongoing: false,
        links: &[(
            "https://github.com/johndoe/task-api",
            LinkType::Github,
            None,
        )],
        skills: &["Python", "Django", "PostgreSQL"],
    },
    SampleProject {
        title: "Weather Dashboard",
        description: "React-based weather dashboard that displays current weather and \
                      forecasts for multiple cities with interactive charts.",
        start: (2023, 7, 1),
        end: None,
        is_ongoing: true,
        links: &[(
            "https://github.com/johndoe/weather-dashboard",
            LinkType::Github,
            None,
        )],
        skills: &["JavaScript", "React", "HTML/CSS"],
    },
];

fn date((year, month, day): (i32, u32, u32)) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DomainError::validation("date", format!("Invalid date {}-{}-{}", year, month, day))
    })
}

/// Removes every profile (and by cascade everything else), then loads the
/// sample portfolio.
pub async fn reset_and_seed(repos: &Repositories) -> Result<SeedReport, DomainError> {
    let profiles_removed = repos.profiles.delete_all().await?;
    tracing::info!(profiles_removed, "Cleared existing portfolio data");

    let profile = seed_sample_portfolio(repos).await?;
    Ok(SeedReport {
        profiles_removed,
        profile,
    })
}

/// Loads the sample portfolio next to whatever is already stored and
/// returns the new profile.
pub async fn seed_sample_portfolio(repos: &Repositories) -> Result<Profile, DomainError> {
    let profile = repos
        .profiles
        .create(&ProfileDraft {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            bio: Some(
                "Full-stack developer with 5+ years of experience building web \
                 applications. Passionate about clean code, scalable architecture, \
                 and solving complex problems."
                    .to_string(),
            ),
        })
        .await?;

    repos
        .education
        .create(&EducationDraft {
            profile: profile.id,
            institution: "University of Technology".to_string(),
            degree: "Bachelor of Science".to_string(),
            field_of_study: Some("Computer Science".to_string()),
            start_date: date((2018, 9, 1))?,
            end_date: Some(date((2022, 6, 30))?),
            description: Some(
                "Focused on software engineering, algorithms, and database systems.".to_string(),
            ),
        })
        .await?;

    let skills = seed_skills(repos, profile.id).await?;
    seed_work_experience(repos, profile.id).await?;
    seed_projects(repos, profile.id, &skills).await?;
    seed_social_links(repos, profile.id).await?;

    tracing::info!(profile_id = %profile.id, "Sample portfolio loaded");
    Ok(profile)
}

async fn seed_skills(
    repos: &Repositories,
    profile: ProfileId,
) -> Result<Vec<(&'static str, SkillId)>, DomainError> {
    let mut created = Vec::with_capacity(SKILLS.len());
    for &(name, level, years_experience) in SKILLS {
        let skill = repos
            .skills
            .create(&SkillDraft {
                profile,
                name: name.to_string(),
                level,
                years_experience,
            })
            .await?;
        created.push((name, skill.id));
    }
    Ok(created)
}

async fn seed_work_experience(repos: &Repositories, profile: ProfileId) -> Result<(), DomainError> {
    let entries = [
        WorkExperienceDraft {
            profile,
            company: "Tech Solutions Inc.".to_string(),
            position: "Senior Full Stack Developer".to_string(),
            location: Some("San Francisco, CA".to_string()),
            start_date: date((2022, 7, 1))?,
            end_date: None,
            is_current: true,
            description: Some(
                "Lead development of web applications using Django and React. \
                 Mentor junior developers and collaborate with cross-functional teams."
                    .to_string(),
            ),
        },
        WorkExperienceDraft {
            profile,
            company: "StartupXYZ".to_string(),
            position: "Full Stack Developer".to_string(),
            location: Some("Remote".to_string()),
            start_date: date((2021, 1, 15))?,
            end_date: Some(date((2022, 6, 30))?),
            is_current: false,
            description: Some(
                "Developed and maintained multiple web applications. \
                 Implemented CI/CD pipelines and improved application performance by 40%."
                    .to_string(),
            ),
        },
    ];
    for entry in &entries {
        repos.work_experience.create(entry).await?;
    }
    Ok(())
}

async fn seed_projects(
    repos: &Repositories,
    profile: ProfileId,
    skills: &[(&'static str, SkillId)],
) -> Result<(), DomainError> {
    for sample in PROJECTS {
        let project = repos
            .projects
            .create(&ProjectDraft {
                profile,
                title: sample.title.to_string(),
                description: sample.description.to_string(),
                start_date: Some(date(sample.start)?),
                end_date: sample.end.map(date).transpose()?,
                is_ongoing: sample.is_ongoing,
            })
            .await?;

        for &(url, link_type, description) in sample.links {
            repos
                .projects
                .add_link(&ProjectLinkDraft {
                    project: project.id,
                    url: url.to_string(),
                    link_type,
                    description: description.map(str::to_string),
                })
                .await?;
        }

        attach_skills(repos, project.id, sample.skills, skills).await?;
    }
    Ok(())
}

async fn attach_skills(
    repos: &Repositories,
    project: ProjectId,
    names: &[&str],
    skills: &[(&'static str, SkillId)],
) -> Result<(), DomainError> {
    for name in names {
        let skill = skills
            .iter()
            .find(|(skill_name, _)| skill_name == name)
            .map(|(_, id)| *id)
            .ok_or_else(|| DomainError::validation("skill", format!("Unknown skill {}", name)))?;
        repos.projects.attach_skill(project, skill).await?;
    }
    Ok(())
}

async fn seed_social_links(repos: &Repositories, profile: ProfileId) -> Result<(), DomainError> {
    let links = [
        (
            Platform::Github,
            "https://github.com/johndoe",
            "Personal GitHub profile",
        ),
        (
            Platform::Linkedin,
            "https://linkedin.com/in/johndoe",
            "Professional LinkedIn profile",
        ),
        (
            Platform::Portfolio,
            "https://johndoe.dev",
            "Personal portfolio website",
        ),
    ];
    for (platform, url, description) in links {
        repos
            .social_links
            .create(&SocialLinkDraft {
                profile,
                platform,
                url: url.to_string(),
                description: Some(description.to_string()),
            })
            .await?;
    }
    Ok(())
}
