//! # Session Module
//!
//! Tracks which operator is currently authenticated on this terminal.
//! One terminal, one operator at a time; the session gates cart and
//! checkout operations but carries no money-handling rule of its own.

use tracing::{info, warn};

use crate::error::{TerminalError, TerminalResult};
use boucherie_core::validation::validate_pin;
use boucherie_core::{Employee, EmployeeDirectory};

/// The operator session for this terminal.
#[derive(Debug, Clone)]
pub struct Session {
    directory: EmployeeDirectory,
    current: Option<Employee>,
}

impl Session {
    /// A logged-out session over the given employee directory.
    pub fn new(directory: EmployeeDirectory) -> Self {
        Session {
            directory,
            current: None,
        }
    }

    /// Logs an operator in by id + PIN.
    ///
    /// A wrong PIN and an unknown id are indistinguishable to the caller;
    /// the login screen shows one message for both.
    pub fn login(&mut self, employee_id: u32, pin: &str) -> TerminalResult<&Employee> {
        validate_pin(pin).map_err(boucherie_core::CoreError::from)?;

        match self.directory.authenticate(employee_id, pin).cloned() {
            Some(employee) => {
                info!(employee = %employee.name, "operator logged in");
                Ok(&*self.current.insert(employee))
            }
            None => {
                warn!(employee_id, "login rejected");
                Err(TerminalError::InvalidCredentials)
            }
        }
    }

    /// Logs the current operator out. No-op when nobody is logged in.
    pub fn logout(&mut self) {
        if let Some(employee) = self.current.take() {
            info!(employee = %employee.name, "operator logged out");
        }
    }

    /// The currently authenticated operator, if any.
    #[inline]
    pub fn operator(&self) -> Option<&Employee> {
        self.current.as_ref()
    }

    /// Checks if an operator is logged in.
    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The employee directory, for the login screen's operator picker.
    #[inline]
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(EmployeeDirectory::default_staff())
    }

    #[test]
    fn test_login_logout() {
        let mut session = session();
        assert!(!session.is_authenticated());

        let employee = session.login(1, "1234").unwrap();
        assert_eq!(employee.name, "Aïcha");
        assert!(session.is_authenticated());

        session.logout();
        assert!(session.operator().is_none());
    }

    #[test]
    fn test_wrong_pin_and_unknown_id_look_the_same() {
        let mut session = session();

        let wrong_pin = session.login(1, "9999").unwrap_err();
        let unknown_id = session.login(99, "1234").unwrap_err();

        assert!(matches!(wrong_pin, TerminalError::InvalidCredentials));
        assert!(matches!(unknown_id, TerminalError::InvalidCredentials));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_malformed_pin_is_a_validation_error() {
        let mut session = session();
        let err = session.login(1, "12a4").unwrap_err();
        assert!(matches!(err, TerminalError::Core(_)));
    }

    #[test]
    fn test_relogin_replaces_operator() {
        let mut session = session();
        session.login(1, "1234").unwrap();
        session.login(2, "2580").unwrap();
        assert_eq!(session.operator().unwrap().name, "Moussa");
    }
}
