//! # Staff Module
//!
//! The fixed employee directory. Like the catalog, it is loaded once and
//! not mutated by normal operation; hiring is a deployment, not a feature.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Employee;

/// The fixed list of employees allowed to operate the terminal.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
}

impl EmployeeDirectory {
    /// Builds a directory from an explicit employee list.
    pub fn new(employees: Vec<Employee>) -> Self {
        EmployeeDirectory { employees }
    }

    /// Looks up an employee by id.
    pub fn get(&self, employee_id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == employee_id)
    }

    /// Checks an id/PIN pair; returns the employee on success.
    ///
    /// Plain equality on the PIN (see [`Employee`]): this gates the UI
    /// flow, it is not a security boundary.
    pub fn authenticate(&self, employee_id: u32, pin: &str) -> Option<&Employee> {
        self.get(employee_id).filter(|e| e.verify_pin(pin))
    }

    /// All employees, for the login screen's operator picker.
    #[inline]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// The stock staff list.
    pub fn default_staff() -> Self {
        fn employee(id: u32, name: &str, pin: &str) -> Employee {
            Employee {
                id,
                name: name.to_string(),
                pin: pin.to_string(),
            }
        }

        EmployeeDirectory::new(vec![
            employee(1, "Aïcha", "1234"),
            employee(2, "Moussa", "2580"),
            employee(3, "Fatoumata", "1111"),
        ])
    }
}
