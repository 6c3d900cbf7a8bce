use super::model::Employee;
use super::repository::EmployeeRepository;
use crate::lifecycle::{OnModuleInit, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Preloads a couple of well-known employees at startup
pub struct DemoDataLoader {
    repository: Arc<dyn EmployeeRepository>,
}

impl DemoDataLoader {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    pub fn demo_employees() -> [Employee; 2] {
        [
            Employee::new("Frodo Baggins", "ring bearer"),
            Employee::new("Bilbo Baggins", "burglar"),
        ]
    }
}

#[async_trait]
impl OnModuleInit for DemoDataLoader {
    async fn on_module_init(&mut self) -> Result<()> {
        for employee in Self::demo_employees() {
            let saved = self.repository.save(employee).await?;
            tracing::info!("Preloading {:?}", saved);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::InMemoryEmployeeRepository;

    #[tokio::test]
    async fn test_loader_seeds_repository() {
        let repository = Arc::new(InMemoryEmployeeRepository::new());
        let mut loader = DemoDataLoader::new(repository.clone());

        loader.on_module_init().await.unwrap();

        let names: Vec<String> = repository
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|employee| employee.name)
            .collect();
        assert_eq!(names, vec!["Frodo Baggins", "Bilbo Baggins"]);
    }
}
