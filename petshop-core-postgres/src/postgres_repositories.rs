use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::access::{
    ApprovalHistoryRepositoryImpl, ApprovalRepositoryImpl, ProfileRepositoryImpl,
    UserRoleRepositoryImpl,
};
use crate::repository::directory::{
    ClientRepositoryImpl, PetRepositoryImpl, VaccineRepositoryImpl,
};
use crate::repository::finance::{PetExpenseRepositoryImpl, TransactionRepositoryImpl};
use crate::repository::scheduling::AppointmentRepositoryImpl;

/// Entry point for building the concrete repositories over one pool
///
/// Every repository clones the same `Arc<PgPool>`; cross-repository
/// atomicity lives inside the repositories that need it (approval),
/// not in a session object shared between them.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn access(&self) -> AccessRepositories {
        AccessRepositories {
            profile_repository: Arc::new(ProfileRepositoryImpl::new(self.pool.clone())),
            user_role_repository: Arc::new(UserRoleRepositoryImpl::new(self.pool.clone())),
            approval_history_repository: Arc::new(ApprovalHistoryRepositoryImpl::new(
                self.pool.clone(),
            )),
            approval_repository: Arc::new(ApprovalRepositoryImpl::new(self.pool.clone())),
        }
    }

    pub fn directory(&self) -> DirectoryRepositories {
        DirectoryRepositories {
            client_repository: Arc::new(ClientRepositoryImpl::new(self.pool.clone())),
            pet_repository: Arc::new(PetRepositoryImpl::new(self.pool.clone())),
            vaccine_repository: Arc::new(VaccineRepositoryImpl::new(self.pool.clone())),
        }
    }

    pub fn scheduling(&self) -> SchedulingRepositories {
        SchedulingRepositories {
            appointment_repository: Arc::new(AppointmentRepositoryImpl::new(self.pool.clone())),
        }
    }

    pub fn finance(&self) -> FinanceRepositories {
        FinanceRepositories {
            transaction_repository: Arc::new(TransactionRepositoryImpl::new(self.pool.clone())),
            pet_expense_repository: Arc::new(PetExpenseRepositoryImpl::new(self.pool.clone())),
        }
    }
}

/// Container for the access-control repositories
pub struct AccessRepositories {
    pub profile_repository: Arc<ProfileRepositoryImpl>,
    pub user_role_repository: Arc<UserRoleRepositoryImpl>,
    pub approval_history_repository: Arc<ApprovalHistoryRepositoryImpl>,
    pub approval_repository: Arc<ApprovalRepositoryImpl>,
}

/// Container for the client/pet directory repositories
pub struct DirectoryRepositories {
    pub client_repository: Arc<ClientRepositoryImpl>,
    pub pet_repository: Arc<PetRepositoryImpl>,
    pub vaccine_repository: Arc<VaccineRepositoryImpl>,
}

/// Container for the scheduling repositories
pub struct SchedulingRepositories {
    pub appointment_repository: Arc<AppointmentRepositoryImpl>,
}

/// Container for the finance repositories
pub struct FinanceRepositories {
    pub transaction_repository: Arc<TransactionRepositoryImpl>,
    pub pet_expense_repository: Arc<PetExpenseRepositoryImpl>,
}
