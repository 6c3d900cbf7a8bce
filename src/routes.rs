//! Route table
//!
//! Every HTTP operation the service exposes is named here together with its
//! method and path template. The router registers handlers from this table and
//! outbound links are expanded from it, so a link always points at a path the
//! router serves.

use crate::employee::EmployeeId;
use crate::hateoas::Link;
use axum::handler::Handler;
use axum::routing::{MethodFilter, MethodRouter, on};
use strum_macros::{Display, EnumIter};

const ID_PARAM: &str = "{id}";

/// Named operations of the employee service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Route {
    /// `GET /`, the discovery document
    Root,
    /// `GET /employees`
    Employees,
    /// `POST /employees`
    NewEmployee,
    /// `GET /employees/{id}`
    Employee,
}

impl Route {
    pub fn method(self) -> MethodFilter {
        match self {
            Route::NewEmployee => MethodFilter::POST,
            Route::Root | Route::Employees | Route::Employee => MethodFilter::GET,
        }
    }

    /// Path template in axum's capture syntax.
    pub fn template(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Employees | Route::NewEmployee => "/employees",
            Route::Employee => "/employees/{id}",
        }
    }

    pub fn is_templated(self) -> bool {
        self.template().contains(ID_PARAM)
    }

    /// Wrap `handler` in a method router bound to this route's method.
    pub fn on<H, T, S>(self, handler: H) -> MethodRouter<S>
    where
        H: Handler<T, S>,
        T: 'static,
        S: Clone + Send + Sync + 'static,
    {
        on(self.method(), handler)
    }
}

/// A linkable resource, carrying whatever its route template needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Root,
    Employees,
    Employee(EmployeeId),
}

impl LinkTarget {
    pub fn route(self) -> Route {
        match self {
            LinkTarget::Root => Route::Root,
            LinkTarget::Employees => Route::Employees,
            LinkTarget::Employee(_) => Route::Employee,
        }
    }

    pub fn href(self) -> String {
        let template = self.route().template();
        match self {
            LinkTarget::Employee(id) => template.replace(ID_PARAM, &id.to_string()),
            LinkTarget::Root | LinkTarget::Employees => template.to_string(),
        }
    }

    pub fn link(self, rel: impl Into<String>) -> Link {
        Link::new(rel, self.href())
    }
}
