use super::model::Employee;
use crate::hateoas::{CollectionModel, EntityModel, SELF_REL};
use crate::routes::LinkTarget;

/// Relation naming the employee collection
pub const EMPLOYEES_REL: &str = "employees";

/// Turns employees into their linked representations
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeAssembler;

impl EmployeeAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Employee with a `self` link (once it has an id) and an `employees` link.
    pub fn to_model(&self, employee: Employee) -> EntityModel<Employee> {
        let id = employee.id();
        let mut model = EntityModel::new(employee);
        if let Some(id) = id {
            model.add_link(LinkTarget::Employee(id).link(SELF_REL));
        }
        model.add_link(LinkTarget::Employees.link(EMPLOYEES_REL));
        model
    }

    pub fn to_collection_model(
        &self,
        employees: impl IntoIterator<Item = Employee>,
    ) -> CollectionModel<EntityModel<Employee>> {
        let models = employees
            .into_iter()
            .map(|employee| self.to_model(employee))
            .collect();
        CollectionModel::new(EMPLOYEES_REL, models).with_link(LinkTarget::Employees.link(SELF_REL))
    }
}
