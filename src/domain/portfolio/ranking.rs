//! Ordering of skills by how much they are used.

use std::cmp::Reverse;

use super::skill::SkillUsage;

/// Default number of skills returned by the top skills query.
pub const DEFAULT_TOP_SKILLS_LIMIT: usize = 10;

/// Ranks skills by referencing projects, then years of experience, both
/// descending, and keeps the first `limit`. Remaining ties fall back to id order.
pub fn rank_top_skills(mut usages: Vec<SkillUsage>, limit: usize) -> Vec<SkillUsage> {
    usages.sort_by_key(|u| {
        (
            Reverse(u.projects_count),
            Reverse(u.skill.years_experience),
            u.skill.id,
        )
    });
    usages.truncate(limit);
    usages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProfileId, SkillId};
    use crate::domain::portfolio::{Skill, SkillLevel};
    use proptest::prelude::*;

    fn usage(id: i64, projects_count: usize, years: u32) -> SkillUsage {
        SkillUsage {
            skill: Skill {
                id: SkillId::new(id),
                profile: ProfileId::new(1),
                name: format!("skill-{}", id),
                level: SkillLevel::Intermediate,
                years_experience: years,
            },
            projects_count,
        }
    }

    #[test]
    fn most_referenced_skill_ranks_first() {
        let ranked = rank_top_skills(
            vec![usage(1, 0, 9), usage(2, 1, 2), usage(3, 3, 1), usage(4, 1, 5)],
            2,
        );

        let ids: Vec<i64> = ranked.iter().map(|u| u.skill.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn years_break_ties_in_project_count() {
        let ranked = rank_top_skills(vec![usage(1, 2, 3), usage(2, 2, 4)], 10);
        assert_eq!(ranked[0].skill.id, SkillId::new(2));
    }

    #[test]
    fn zero_limit_returns_nothing() {
        assert!(rank_top_skills(vec![usage(1, 1, 1)], 0).is_empty());
    }

    proptest! {
        #[test]
        fn ranking_is_ordered_and_bounded(
            entries in proptest::collection::vec((0usize..5, 0u32..10), 0..20),
            limit in 0usize..25,
        ) {
            let usages: Vec<SkillUsage> = entries
                .iter()
                .enumerate()
                .map(|(i, (count, years))| usage(i as i64 + 1, *count, *years))
                .collect();
            let total = usages.len();

            let ranked = rank_top_skills(usages, limit);

            prop_assert_eq!(ranked.len(), total.min(limit));
            for pair in ranked.windows(2) {
                let a = (pair[0].projects_count, pair[0].skill.years_experience);
                let b = (pair[1].projects_count, pair[1].skill.years_experience);
                prop_assert!(a >= b);
            }
        }
    }
}
