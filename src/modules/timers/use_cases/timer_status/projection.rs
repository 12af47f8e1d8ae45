use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunningTimerRow {
    pub timer_id: String,
    pub user_id: String,
    pub project_id: String,
    pub description: String,
    pub started_at: i64,
}

impl RunningTimerRow {
    /// Whole minutes since the start, never negative.
    pub fn elapsed_minutes(&self, now: i64) -> i64 {
        ((now - self.started_at) / 60_000).max(0)
    }
}

#[cfg(test)]
mod running_timer_row_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(59_999, 0)]
    #[case(60_000, 1)]
    #[case(5_430_000, 90)]
    #[case(-10, 0)]
    fn it_should_floor_elapsed_minutes(#[case] elapsed_millis: i64, #[case] minutes: i64) {
        let row = RunningTimerRow {
            timer_id: "t-1".into(),
            user_id: "u-1".into(),
            project_id: "p-1".into(),
            description: String::new(),
            started_at: 1_000_000,
        };
        assert_eq!(row.elapsed_minutes(1_000_000 + elapsed_millis), minutes);
    }
}
