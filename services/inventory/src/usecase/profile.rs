use uuid::Uuid;

use stockroom_domain::employee::Employee;

use crate::domain::repository::EmployeeRepository;
use crate::domain::types::EmployeeProfileDraft;
use crate::error::InventoryError;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> GetProfileUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Employee, InventoryError> {
        self.repo
            .find_by_user_id(user_id)
            .await?
            .ok_or(InventoryError::EmployeeNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> UpdateProfileUseCase<R> {
    /// Updates the employee record linked to `user_id`. Callers pass their
    /// own id; ownership of foreign ids is rejected in the handler before
    /// this runs.
    pub async fn execute(
        &self,
        user_id: Uuid,
        draft: EmployeeProfileDraft,
    ) -> Result<(), InventoryError> {
        let employee = self
            .repo
            .find_by_user_id(user_id)
            .await?
            .ok_or(InventoryError::EmployeeNotFound)?;
        self.repo.update_profile(employee.id, &draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockEmployeeRepo {
        employees: Mutex<Vec<Employee>>,
    }

    impl EmployeeRepository for MockEmployeeRepo {
        async fn find_by_user_id(
            &self,
            user_id: Uuid,
        ) -> Result<Option<Employee>, InventoryError> {
            Ok(self
                .employees
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.user_id == Some(user_id))
                .cloned())
        }

        async fn update_profile(
            &self,
            id: i64,
            draft: &EmployeeProfileDraft,
        ) -> Result<(), InventoryError> {
            let mut employees = self.employees.lock().unwrap();
            let employee = employees.iter_mut().find(|e| e.id == id).unwrap();
            employee.name = draft.name.clone();
            employee.position = draft.position.clone();
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_update_only_the_callers_record() {
        let user_a = Uuid::now_v7();
        let user_b = Uuid::now_v7();
        let repo = MockEmployeeRepo {
            employees: Mutex::new(vec![
                Employee {
                    id: 1,
                    user_id: Some(user_a),
                    name: "A".into(),
                    position: "Clerk".into(),
                },
                Employee {
                    id: 2,
                    user_id: Some(user_b),
                    name: "B".into(),
                    position: "Clerk".into(),
                },
            ]),
        };
        let usecase = UpdateProfileUseCase { repo };
        usecase
            .execute(
                user_a,
                EmployeeProfileDraft {
                    name: "Updated A".into(),
                    position: "Manager".into(),
                },
            )
            .await
            .unwrap();

        let employees = usecase.repo.employees.lock().unwrap();
        assert_eq!(employees[0].name, "Updated A");
        assert_eq!(employees[0].position, "Manager");
        assert_eq!(employees[1].name, "B");
    }

    #[tokio::test]
    async fn should_return_not_found_for_detached_user() {
        let usecase = GetProfileUseCase {
            repo: MockEmployeeRepo {
                employees: Mutex::new(vec![]),
            },
        };
        let result = usecase.execute(Uuid::now_v7()).await;
        assert!(matches!(result, Err(InventoryError::EmployeeNotFound)));
    }
}
