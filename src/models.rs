use crate::dashboard::{DashboardState, TaskSlot, WEEK};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub task: u8,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToggleQuery {
    pub next: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayMinutes {
    pub day: String,
    pub minutes: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskStatus {
    pub task: u8,
    pub label: String,
    pub done: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub weekly_goal: i64,
    pub days: Vec<DayMinutes>,
    pub tasks: Vec<TaskStatus>,
    pub total_minutes: i64,
    pub progress_percent: u8,
    pub open_tasks: usize,
    pub done_tasks: usize,
}

impl From<&DashboardState> for DashboardResponse {
    fn from(state: &DashboardState) -> Self {
        Self {
            weekly_goal: state.weekly_goal,
            days: WEEK
                .iter()
                .map(|day| DayMinutes {
                    day: day.to_string(),
                    minutes: state.minutes_on(*day),
                })
                .collect(),
            tasks: TaskSlot::ALL
                .iter()
                .map(|task| TaskStatus {
                    task: task.number(),
                    label: task.label().to_string(),
                    done: state.task_done(*task),
                })
                .collect(),
            total_minutes: state.total_minutes(),
            progress_percent: state.progress_percent(),
            open_tasks: state.open_tasks(),
            done_tasks: state.done_tasks(),
        }
    }
}
