use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity assigned to an employee by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An employee record
///
/// A record without an id has not been persisted yet. The id is only ever
/// set by a repository, through [`Employee::with_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<EmployeeId>,
    pub name: String,
    pub role: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            role: role.into(),
        }
    }

    pub fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// The persisted form of this record under `id`.
    pub fn with_id(self, id: EmployeeId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Drop any client-supplied identity.
    pub fn without_id(self) -> Self {
        Self { id: None, ..self }
    }
}

/// Body accepted when creating an employee
///
/// Has no identity field: whatever a client sends as `id` is skipped during
/// deserialization, whatever its JSON type.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    pub role: String,
}

impl From<EmployeePayload> for Employee {
    fn from(payload: EmployeePayload) -> Self {
        Employee::new(payload.name, payload.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_without_id_is_new() {
        let employee: Employee =
            serde_json::from_value(json!({ "name": "Samwise Gamgee", "role": "gardener" })).unwrap();
        assert!(employee.is_new());
        assert_eq!(employee, Employee::new("Samwise Gamgee", "gardener"));
    }

    #[test]
    fn test_payload_skips_any_id() {
        for id in [json!(-1), json!("x"), json!(3.5), json!(null), json!({ "n": 1 })] {
            let payload: EmployeePayload =
                serde_json::from_value(json!({ "id": id, "name": "Sam", "role": "gardener" }))
                    .unwrap();
            assert!(Employee::from(payload).is_new());
        }
    }

    #[test]
    fn test_id_serializes_as_number() {
        let employee = Employee::new("Frodo Baggins", "ring bearer").with_id(EmployeeId::new(7));
        assert_eq!(
            serde_json::to_value(&employee).unwrap(),
            json!({ "id": 7, "name": "Frodo Baggins", "role": "ring bearer" })
        );
    }

    #[test]
    fn test_without_id_clears_identity() {
        let employee = Employee::new("Bilbo Baggins", "burglar")
            .with_id(EmployeeId::new(3))
            .without_id();
        assert!(employee.is_new());
    }
}
