use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::domain::ports::Describable;
use crate::utils::error::{Result, RosterError};

pub const GRADE_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const NO_GRADES: &str = "No grades available.";
pub const NO_AVERAGE: &str = "No grades to calculate average.";
pub const AVERAGE_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StudentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    name: String,
    id: StudentId,
}

impl Person {
    pub fn new(name: impl Into<String>, id: StudentId) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> StudentId {
        self.id
    }
}

impl Describable for Person {
    fn describe(&self) -> String {
        format!("Name: {}, ID: {}", self.name, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    grades: Vec<f64>,
}

impl Student {
    pub fn new(name: impl Into<String>, id: StudentId) -> Self {
        Self {
            person: Person::new(name, id),
            grades: Vec::new(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn id(&self) -> StudentId {
        self.person.id()
    }

    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    /// Appends `grade` if it lies in `[0, 100]`. NaN is rejected.
    pub fn add_grade(&mut self, grade: f64) -> Result<()> {
        if !GRADE_RANGE.contains(&grade) {
            return Err(RosterError::GradeOutOfRange { grade });
        }
        self.grades.push(grade);
        Ok(())
    }

    pub fn grades_summary(&self) -> String {
        if self.grades.is_empty() {
            return NO_GRADES.to_string();
        }
        self.grades
            .iter()
            .map(|g| format_grade(*g))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let total: f64 = self.grades.iter().sum();
        Some(total / self.grades.len() as f64)
    }

    pub fn average_summary(&self) -> String {
        self.average()
            .map(|avg| format!("{:.2}", avg))
            .unwrap_or_else(|| NO_AVERAGE.to_string())
    }
}

impl Describable for Student {
    fn describe(&self) -> String {
        let average = self
            .average()
            .map(|avg| format!("{:.2}", avg))
            .unwrap_or_else(|| AVERAGE_PLACEHOLDER.to_string());
        format!(
            "{}, Grades: [{}], Average Grade: {}",
            self.person.describe(),
            self.grades_summary(),
            average
        )
    }
}

/// Renders a grade the way it was written: `85`, `85.5`.
pub fn format_grade(grade: f64) -> String {
    if grade == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    grade.to_string()
}

/// One call against the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    AddStudent { name: String, id: StudentId },
    AddGrade { id: StudentId, grade: f64 },
    ViewStudent { id: StudentId },
    ListStudents,
}
