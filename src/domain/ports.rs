use crate::core::session::Outcome;
use crate::utils::error::Result;

/// Anything that can produce a one-line human description of itself.
pub trait Describable {
    fn describe(&self) -> String;
}

/// Sink for session outcomes, written in invocation order.
pub trait Reporter {
    fn report(&mut self, outcome: &Outcome) -> Result<()>;
}

pub trait SessionSettings {
    fn legacy_grade_echo(&self) -> bool;
}
