use super::model::{Employee, EmployeeId};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Employee id sequence exhausted")]
    SequenceExhausted,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Persistence contract for employees
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All stored employees, ordered by id.
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError>;

    /// Store `employee`, assigning the next id when it has none.
    ///
    /// A record that already has an id is an upsert and replaces whatever is
    /// stored under it. A newly assigned id never replaces an existing record.
    /// The returned record carries the identity it was stored under.
    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError>;
}

/// Process-local repository backed by a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: DashMap<EmployeeId, Employee>,
    sequence: AtomicU64,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> Result<EmployeeId, RepositoryError> {
        self.sequence
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|last| EmployeeId::new(last + 1))
            .map_err(|_| RepositoryError::SequenceExhausted)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let mut employees: Vec<Employee> = self
            .employees
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        employees.sort_by_key(Employee::id);
        Ok(employees)
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.employees.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        if let Some(id) = employee.id() {
            self.sequence.fetch_max(id.get(), Ordering::SeqCst);
            self.employees.insert(id, employee.clone());
            tracing::debug!(%id, "Replaced employee");
            return Ok(employee);
        }

        // An upsert can land on the next sequence value before it is bumped;
        // skip any id that is already taken.
        loop {
            let id = self.next_id()?;
            if let Entry::Vacant(slot) = self.employees.entry(id) {
                let saved = employee.with_id(id);
                slot.insert(saved.clone());
                tracing::debug!(%id, "Saved employee");
                return Ok(saved);
            }
        }
    }
}
