pub mod demo;
pub mod roster;
pub mod session;

pub use crate::domain::model::{Operation, Person, Student, StudentId};
pub use crate::domain::ports::{Describable, Reporter, SessionSettings};
pub use crate::utils::error::Result;
