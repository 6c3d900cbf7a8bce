//! The employee resource: domain model, persistence, representation and
//! HTTP handlers.

pub mod assembler;
pub mod controller;
pub mod loader;
pub mod model;
pub mod repository;

pub use assembler::{EMPLOYEES_REL, EmployeeAssembler};
pub use controller::EmployeeController;
pub use loader::DemoDataLoader;
pub use model::{Employee, EmployeeId, EmployeePayload};
pub use repository::{EmployeeRepository, InMemoryEmployeeRepository, RepositoryError};
