use crate::config::toml_config::OUTPUT_FORMATS;
use crate::core::session::Outcome;
use crate::domain::model::format_grade;
use crate::domain::ports::{Describable, Reporter};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation;
use serde_json::json;
use std::io::Write;

pub const EMPTY_ROSTER: &str = "No students in roster.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Result<Self> {
        validation::validate_one_of("format", name, &OUTPUT_FORMATS)?;
        Ok(match name {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}

/// The human-readable lines for one outcome, in print order.
pub fn outcome_lines(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::StudentAdded { student } => vec![format!(
            "Student {} (ID: {}) added successfully.",
            student.name(),
            student.id()
        )],
        Outcome::GradeAdded { student, grade } => {
            vec![grade_added_line(*grade, &student.id().to_string())]
        }
        Outcome::GradeRejected {
            id,
            grade,
            echo_confirmation,
        } => {
            let mut lines = vec![RosterError::GradeOutOfRange { grade: *grade }.to_string()];
            if *echo_confirmation {
                lines.push(grade_added_line(*grade, &id.to_string()));
            }
            lines
        }
        Outcome::StudentDetails { student } => vec![student.describe()],
        Outcome::StudentList { students } if students.is_empty() => {
            vec![EMPTY_ROSTER.to_string()]
        }
        Outcome::StudentList { students } => students.iter().map(|s| s.describe()).collect(),
        Outcome::AlreadyExists { id } => vec![RosterError::DuplicateId { id: *id }.to_string()],
        Outcome::NotFound { id } => vec![RosterError::NotFound { id: *id }.to_string()],
    }
}

fn grade_added_line(grade: f64, id: &str) -> String {
    format!("Grade {} added to student ID: {}.", format_grade(grade), id)
}

pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, outcome: &Outcome) -> Result<()> {
        for line in outcome_lines(outcome) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }
}

/// One JSON object per line.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, outcome: &Outcome) -> Result<()> {
        let mut value = json!({
            "status": outcome.status(),
            "message": outcome_lines(outcome).join("\n"),
        });

        match outcome {
            Outcome::StudentAdded { student }
            | Outcome::GradeAdded { student, .. }
            | Outcome::StudentDetails { student } => {
                value["student"] = serde_json::to_value(student)?;
            }
            Outcome::StudentList { students } => {
                value["students"] = serde_json::to_value(students)?;
            }
            _ => {}
        }

        serde_json::to_writer(&mut self.out, &value)?;
        writeln!(self.out)?;
        Ok(())
    }
}
