use crate::core::roster::Roster;
use crate::domain::model::{Operation, Student, StudentId};
use crate::domain::ports::{Reporter, SessionSettings};
use crate::utils::error::{Result, RosterError};

/// Result of applying one [`Operation`]; carries snapshots so it can be
/// rendered after the roster has moved on.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    StudentAdded { student: Student },
    GradeAdded { student: Student, grade: f64 },
    /// `echo_confirmation` keeps the historic "grade added" line after a rejection.
    GradeRejected {
        id: StudentId,
        grade: f64,
        echo_confirmation: bool,
    },
    StudentDetails { student: Student },
    StudentList { students: Vec<Student> },
    AlreadyExists { id: StudentId },
    NotFound { id: StudentId },
}

impl Outcome {
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::StudentAdded { .. } => "student_added",
            Outcome::GradeAdded { .. } => "grade_added",
            Outcome::GradeRejected { .. } => "grade_rejected",
            Outcome::StudentDetails { .. } => "student_details",
            Outcome::StudentList { .. } => "student_list",
            Outcome::AlreadyExists { .. } => "already_exists",
            Outcome::NotFound { .. } => "not_found",
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            Outcome::GradeRejected { .. } | Outcome::AlreadyExists { .. } | Outcome::NotFound { .. }
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub rejected: usize,
}

pub struct Session {
    roster: Roster,
    legacy_grade_echo: bool,
}

impl Session {
    pub fn new(settings: &impl SessionSettings) -> Self {
        Self {
            roster: Roster::new(),
            legacy_grade_echo: settings.legacy_grade_echo(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn apply(&mut self, operation: &Operation) -> Outcome {
        let echo = self.legacy_grade_echo;
        match operation {
            Operation::AddStudent { name, id } => match self.roster.add_student(name.as_str(), *id) {
                Ok(student) => Outcome::StudentAdded {
                    student: student.clone(),
                },
                Err(e) => rejection(*id, e, echo),
            },
            Operation::AddGrade { id, grade } => {
                match self.roster.add_grade_to_student(*id, *grade) {
                    Ok(student) => Outcome::GradeAdded {
                        student: student.clone(),
                        grade: *grade,
                    },
                    Err(e) => rejection(*id, e, echo),
                }
            }
            Operation::ViewStudent { id } => match self.roster.view_student(*id) {
                Ok(student) => Outcome::StudentDetails {
                    student: student.clone(),
                },
                Err(e) => rejection(*id, e, echo),
            },
            Operation::ListStudents => Outcome::StudentList {
                students: self.roster.students().to_vec(),
            },
        }
    }

    /// Applies `operations` in order, reporting each outcome before the next runs.
    pub fn run<R: Reporter>(
        &mut self,
        operations: &[Operation],
        reporter: &mut R,
    ) -> Result<RunSummary> {
        tracing::info!("Running {} roster operation(s)", operations.len());

        let mut summary = RunSummary::default();
        for operation in operations {
            tracing::debug!("Applying {:?}", operation);
            let outcome = self.apply(operation);
            if outcome.is_success() {
                summary.applied += 1;
            } else {
                summary.rejected += 1;
            }
            reporter.report(&outcome)?;
        }

        tracing::info!(
            "Finished: {} applied, {} rejected, {} student(s) on roster",
            summary.applied,
            summary.rejected,
            self.roster.len()
        );
        Ok(summary)
    }
}

fn rejection(id: StudentId, error: RosterError, echo_confirmation: bool) -> Outcome {
    tracing::info!("Operation on student {} rejected: {}", id, error);
    match error {
        RosterError::DuplicateId { .. } => Outcome::AlreadyExists { id },
        RosterError::GradeOutOfRange { grade } => Outcome::GradeRejected {
            id,
            grade,
            echo_confirmation,
        },
        // lookups fail with nothing else
        _ => Outcome::NotFound { id },
    }
}
