use crate::domain::model::{Student, StudentId};
use crate::utils::error::{Result, RosterError};

/// Insertion-ordered student list with unique ids.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id() == id)
    }

    /// Only insertion point; the id check here keeps ids unique.
    pub fn add_student(&mut self, name: impl Into<String>, id: StudentId) -> Result<&Student> {
        if self.position(id).is_some() {
            tracing::debug!("Rejecting duplicate student id {}", id);
            return Err(RosterError::DuplicateId { id });
        }

        let student = Student::new(name, id);
        tracing::debug!("Adding student {} (ID: {})", student.name(), id);
        self.students.push(student);
        Ok(&self.students[self.students.len() - 1])
    }

    pub fn view_student(&self, id: StudentId) -> Result<&Student> {
        self.students
            .iter()
            .find(|s| s.id() == id)
            .ok_or(RosterError::NotFound { id })
    }

    pub fn add_grade_to_student(&mut self, id: StudentId, grade: f64) -> Result<&Student> {
        let index = self.position(id).ok_or(RosterError::NotFound { id })?;
        let student = &mut self.students[index];
        student.add_grade(grade)?;
        tracing::debug!(
            "Student {} now has {} grade(s)",
            id,
            student.grades().len()
        );
        Ok(&*student)
    }
}
