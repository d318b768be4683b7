#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use replan::libs::plan::{PlanError, PlanRequest};
    use replan::libs::task::MuscleGroup;

    fn request(group: MuscleGroup, pause_days: u32) -> PlanRequest {
        PlanRequest {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            name: "Test".to_string(),
            muscle_group: group,
            pause_days,
        }
    }

    #[test]
    fn test_high_impact_requires_pause_days() {
        let plan = request(MuscleGroup::HighImpact, 0);
        assert_eq!(plan.validate(), Err(PlanError::HighImpactWithoutPause));
    }

    #[test]
    fn test_high_impact_with_pause_days_is_valid() {
        let plan = request(MuscleGroup::HighImpact, 1);
        assert_eq!(plan.validate(), Ok(()));
    }

    #[test]
    fn test_other_groups_allow_zero_pause() {
        for group in [MuscleGroup::LowImpact, MuscleGroup::StrengthStability, MuscleGroup::Wrist] {
            assert_eq!(request(group, 0).validate(), Ok(()));
        }
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let mut plan = request(MuscleGroup::Wrist, 1);
        plan.start_date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(
            plan.validate(),
            Err(PlanError::ReversedRange(plan.start_date, plan.end_date))
        );
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let mut plan = request(MuscleGroup::Wrist, 3);
        plan.end_date = plan.start_date;
        assert_eq!(plan.validate(), Ok(()));
    }
}
