use petshop_core_db::models::pet_expense::PetExpenseModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::PetExpenseRepositoryImpl;

impl PetExpenseRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &PetExpenseRepositoryImpl,
        expense: PetExpenseModel,
    ) -> Result<PetExpenseModel, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE pet_expenses
            SET pet_id = $2, amount = $3, description = $4, expense_date = $5,
                category = $6, image_url = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(expense.id)
        .bind(expense.pet_id)
        .bind(expense.amount)
        .bind(expense.description.as_str())
        .bind(expense.expense_date)
        .bind(expense.category.as_deref())
        .bind(expense.image_url.as_deref())
        .bind(expense.updated_at)
        .execute(&*repo.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(format!("expense {} not found", expense.id).into());
        }
        Ok(expense)
    }
}
