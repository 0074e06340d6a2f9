use serde::{Deserialize, Serialize};

use crate::DayPlan;

/// A journey step as stored by the persistence layer.
///
/// Only `day_number` is mandatory; every text field may be missing or blank.
/// When `day_plan` is present it was authored as a structured script.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StepRecord {
    pub day_number: u32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub goal: Option<String>,
    pub explanation: Option<String>,
    pub task: Option<String>,
    pub closing_message: Option<String>,
    pub language: Option<String>,
    pub tone: Option<String>,
    pub day_plan: Option<DayPlan>,
}

impl StepRecord {
    #[must_use]
    pub fn new(day_number: u32) -> Self {
        Self {
            day_number,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    #[must_use]
    pub fn goal(&self) -> Option<&str> {
        non_blank(self.goal.as_deref())
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        non_blank(self.explanation.as_deref())
    }

    #[must_use]
    pub fn task(&self) -> Option<&str> {
        non_blank(self.task.as_deref())
    }

    #[must_use]
    pub fn closing_message(&self) -> Option<&str> {
        non_blank(self.closing_message.as_deref())
    }

    #[must_use]
    pub fn tone(&self) -> Option<&str> {
        non_blank(self.tone.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
