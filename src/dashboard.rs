//! Focus-time and task state for a single dashboard session.
//!
//! Everything shown on the pages is derived from [`DashboardState`] on
//! every read; nothing derived is stored.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const DEFAULT_WEEKLY_GOAL: i64 = 600;
const DEFAULT_MINUTES: [i64; 7] = [90, 60, 120, 45, 80, 150, 100];
const DEFAULT_TASKS: [bool; 4] = [false, true, false, false];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskSlot {
    One,
    Two,
    Three,
    Four,
}

impl TaskSlot {
    pub const ALL: [TaskSlot; 4] = [TaskSlot::One, TaskSlot::Two, TaskSlot::Three, TaskSlot::Four];

    /// Parses a 1-based task number.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::One => "Finish SHAP explainability notebook",
            Self::Two => "Refine customer churn README",
            Self::Three => "Add tests to VisionSense API",
            Self::Four => "Sketch next AI agent architecture",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
            Self::Four => 3,
        }
    }
}

/// Raw dashboard inputs. The weekly goal and day minutes are not validated;
/// out-of-range values are only handled where a value is derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardState {
    pub weekly_goal: i64,
    pub minutes: [i64; 7],
    pub task_done: [bool; 4],
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            weekly_goal: DEFAULT_WEEKLY_GOAL,
            minutes: DEFAULT_MINUTES,
            task_done: DEFAULT_TASKS,
        }
    }
}

impl DashboardState {
    pub fn with_weekly_goal(mut self, weekly_goal: i64) -> Self {
        self.weekly_goal = weekly_goal;
        self
    }

    pub fn with_minutes(mut self, day: Weekday, minutes: i64) -> Self {
        self.minutes[day.num_days_from_monday() as usize] = minutes;
        self
    }

    pub fn minutes_on(&self, day: Weekday) -> i64 {
        self.minutes[day.num_days_from_monday() as usize]
    }

    pub fn task_done(&self, task: TaskSlot) -> bool {
        self.task_done[task.index()]
    }

    pub fn total_minutes(&self) -> i64 {
        self.minutes
            .iter()
            .fold(0i64, |total, minutes| total.saturating_add(*minutes))
    }

    /// Share of the weekly goal reached, in whole percent within `0..=100`.
    ///
    /// A goal of zero or below always reports `0`.
    pub fn progress_percent(&self) -> u8 {
        if self.weekly_goal <= 0 {
            return 0;
        }
        let pct = i128::from(self.total_minutes()) * 100 / i128::from(self.weekly_goal);
        pct.clamp(0, 100) as u8
    }

    pub fn open_tasks(&self) -> usize {
        self.task_done.iter().filter(|done| !**done).count()
    }

    pub fn done_tasks(&self) -> usize {
        self.task_done.iter().filter(|done| **done).count()
    }

    pub fn toggle_task(&mut self, task: TaskSlot) {
        let flag = &mut self.task_done[task.index()];
        *flag = !*flag;
    }

    pub fn toggle_task_1(&mut self) {
        self.toggle_task(TaskSlot::One);
    }

    pub fn toggle_task_2(&mut self) {
        self.toggle_task(TaskSlot::Two);
    }

    pub fn toggle_task_3(&mut self) {
        self.toggle_task(TaskSlot::Three);
    }

    pub fn toggle_task_4(&mut self) {
        self.toggle_task(TaskSlot::Four);
    }
}
