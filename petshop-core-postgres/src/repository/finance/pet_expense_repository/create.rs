use petshop_core_db::models::pet_expense::PetExpenseModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::PetExpenseRepositoryImpl;

impl PetExpenseRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &PetExpenseRepositoryImpl,
        expense: PetExpenseModel,
    ) -> Result<PetExpenseModel, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO pet_expenses (id, pet_id, amount, description, expense_date, category, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(expense.id)
        .bind(expense.pet_id)
        .bind(expense.amount)
        .bind(expense.description.as_str())
        .bind(expense.expense_date)
        .bind(expense.category.as_deref())
        .bind(expense.image_url.as_deref())
        .bind(expense.created_at)
        .bind(expense.updated_at)
        .execute(&*repo.pool)
        .await?;

        Ok(expense)
    }
}
