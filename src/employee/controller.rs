use super::assembler::{EMPLOYEES_REL, EmployeeAssembler};
use super::model::{Employee, EmployeeId, EmployeePayload};
use super::repository::EmployeeRepository;
use crate::common::{Created, Hal};
use crate::error::{ApiError, Result};
use crate::hateoas::{CollectionModel, EntityModel, RepresentationModel, SELF_REL};
use crate::routes::{LinkTarget, Route};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::MethodRouter,
};
use std::sync::Arc;
use strum::IntoEnumIterator;

/// HTTP surface of the employee resource
///
/// Built from explicit collaborators; holds no mutable state of its own.
pub struct EmployeeController {
    repository: Arc<dyn EmployeeRepository>,
    assembler: Arc<EmployeeAssembler>,
}

impl EmployeeController {
    pub fn new(repository: Arc<dyn EmployeeRepository>, assembler: Arc<EmployeeAssembler>) -> Self {
        Self {
            repository,
            assembler,
        }
    }

    /// Router serving every [`Route`].
    pub fn router(self: Arc<Self>) -> Router {
        Route::iter()
            .fold(Router::new(), |router, route| {
                router.route(route.template(), handler_for(route))
            })
            .with_state(self)
    }

    /// Discovery document linking to itself and the employee collection.
    pub fn root(&self) -> RepresentationModel {
        RepresentationModel::new()
            .with_link(LinkTarget::Root.link(SELF_REL))
            .with_link(LinkTarget::Employees.link(EMPLOYEES_REL))
    }

    pub async fn find_all(&self) -> Result<CollectionModel<EntityModel<Employee>>> {
        let employees = self.repository.find_all().await?;
        Ok(self.assembler.to_collection_model(employees))
    }

    /// Persist a new employee. Any id in the payload is discarded.
    pub async fn new_employee(&self, employee: Employee) -> Result<Created<EntityModel<Employee>>> {
        let saved = self.repository.save(employee.without_id()).await?;
        let id = saved.id().ok_or(ApiError::CreationFailed)?;
        tracing::info!(%id, "Created employee");
        Ok(Created::new(
            LinkTarget::Employee(id).href(),
            self.assembler.to_model(saved),
        ))
    }

    pub async fn find_one(&self, id: EmployeeId) -> Result<EntityModel<Employee>> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|employee| self.assembler.to_model(employee))
            .ok_or(ApiError::NotFound { id })
    }
}

type ControllerState = State<Arc<EmployeeController>>;

fn handler_for(route: Route) -> MethodRouter<Arc<EmployeeController>> {
    match route {
        Route::Root => route.on(root),
        Route::Employees => route.on(find_all),
        Route::NewEmployee => route.on(new_employee),
        Route::Employee => route.on(find_one),
    }
}

async fn root(State(controller): ControllerState) -> Hal<RepresentationModel> {
    Hal(controller.root())
}

async fn find_all(
    State(controller): ControllerState,
) -> Result<Hal<CollectionModel<EntityModel<Employee>>>> {
    controller.find_all().await.map(Hal)
}

async fn new_employee(
    State(controller): ControllerState,
    Json(payload): Json<EmployeePayload>,
) -> Result<Created<EntityModel<Employee>>> {
    controller.new_employee(payload.into()).await
}

async fn find_one(
    State(controller): ControllerState,
    Path(id): Path<EmployeeId>,
) -> Result<Hal<EntityModel<Employee>>> {
    controller.find_one(id).await.map(Hal)
}
