//! Test fixtures and factories

use async_trait::async_trait;
use eztest_access::auth::rbac::{PolicyStore, PrivilegeAssignment, Role, RolePrivilege};
use eztest_access::{AccessError, Result, UserInfo};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use uuid::Uuid;

/// Factory for identities
pub struct UserFactory;

impl UserFactory {
    pub fn with_role(role: &str) -> UserInfo {
        let id = Uuid::new_v4();
        UserInfo {
            id,
            email: format!("{}-{}@example.com", role, id.simple()),
            name: format!("Test {}", role),
            role: role.to_string(),
            org_id: None,
        }
    }
}

/// How a [`CountingPolicyStore`] misbehaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFault {
    None,
    Error,
    /// Sleep this long before answering
    Stall(Duration),
}

/// Policy store wrapper that counts lookups and can inject faults
pub struct CountingPolicyStore {
    inner: Arc<dyn PolicyStore>,
    lookups: AtomicUsize,
    fault: StoreFault,
}

impl CountingPolicyStore {
    pub fn new(inner: Arc<dyn PolicyStore>) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
            fault: StoreFault::None,
        }
    }

    pub fn with_fault(mut self, fault: StoreFault) -> Self {
        self.fault = fault;
        self
    }

    /// Number of resolver reads seen so far
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    async fn enter(&self) -> Result<()> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match self.fault {
            StoreFault::None => Ok(()),
            StoreFault::Error => Err(AccessError::internal("injected store failure")),
            StoreFault::Stall(delay) => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
        }
    }
}

#[async_trait]
impl PolicyStore for CountingPolicyStore {
    async fn action_score(&self, action_keyword: &str) -> Result<Option<i32>> {
        self.enter().await?;
        self.inner.action_score(action_keyword).await
    }

    async fn privilege_for(
        &self,
        role_keyword: &str,
        module_keyword: &str,
    ) -> Result<Option<PrivilegeAssignment>> {
        self.enter().await?;
        self.inner.privilege_for(role_keyword, module_keyword).await
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        self.inner.list_roles().await
    }

    async fn find_role(&self, role_keyword: &str) -> Result<Option<Role>> {
        self.inner.find_role(role_keyword).await
    }

    async fn role_privileges(&self, role_keyword: &str) -> Result<Vec<RolePrivilege>> {
        self.inner.role_privileges(role_keyword).await
    }
}
