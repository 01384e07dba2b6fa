use crate::domain::model::{Operation, StudentId};

/// The built-in walkthrough run when no script is given.
pub fn operations() -> Vec<Operation> {
    let add_student = |name: &str, id: u64| Operation::AddStudent {
        name: name.to_string(),
        id: StudentId(id),
    };
    let add_grade = |id: u64, grade: f64| Operation::AddGrade {
        id: StudentId(id),
        grade,
    };
    let view = |id: u64| Operation::ViewStudent { id: StudentId(id) };

    vec![
        add_student("Alex", 1),
        add_student("Sam", 2),
        add_grade(1, 85.0),
        add_grade(1, 90.0),
        add_grade(2, 78.0),
        add_grade(2, 88.0),
        view(1),
        view(2),
        // unknown id
        view(3),
        // duplicate id
        add_student("Chris", 1),
    ]
}
