use petshop_core_db::models::pet_expense::PetExpenseModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::PetExpenseRepositoryImpl;
use crate::utils::TryFromRow;

impl PetExpenseRepositoryImpl {
    pub(super) async fn list_all_impl(
        repo: &PetExpenseRepositoryImpl,
    ) -> Result<Vec<PetExpenseModel>, RepositoryError> {
        let rows = sqlx::query(r#"SELECT * FROM pet_expenses ORDER BY expense_date DESC"#)
            .fetch_all(&*repo.pool)
            .await?;

        rows.iter().map(PetExpenseModel::try_from_row).collect()
    }
}
