use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use petshop_core_db::models::pet_expense::PetExpenseModel;
use petshop_core_db::repository::PetExpenseRepository;

use crate::domain::{bounded, bounded_opt, NewExpenseRequest};
use crate::error::{ApiError, ApiResult};
use crate::storage::ReceiptStore;

/// Pet expense tracking with receipt images in external storage
///
/// The receipt upload happens before the row insert so the stored URL
/// always resolves; when the insert then fails, the uploaded object is
/// removed as compensation.
pub struct ExpenseService {
    expenses: Arc<dyn PetExpenseRepository>,
    receipts: Arc<dyn ReceiptStore>,
}

impl ExpenseService {
    pub fn new(expenses: Arc<dyn PetExpenseRepository>, receipts: Arc<dyn ReceiptStore>) -> Self {
        Self { expenses, receipts }
    }

    pub async fn create(&self, request: NewExpenseRequest) -> ApiResult<PetExpenseModel> {
        request.validate()?;
        let amount = request
            .amount
            .ok_or_else(|| ApiError::ValidationError("amount is required".to_string()))?;
        if amount <= Decimal::ZERO {
            return Err(ApiError::ValidationError(
                "amount must be positive".to_string(),
            ));
        }
        let expense_date = request
            .expense_date
            .ok_or_else(|| ApiError::ValidationError("expense date is required".to_string()))?;
        // Field conversions run before the upload; no remote write can
        // precede a validation failure
        let description = bounded::<200>("description", &request.description)?;
        let category = bounded_opt::<50>("category", request.category.as_deref())?;

        let image_url = match &request.receipt {
            Some(receipt) => {
                let object_name = format!("{}-{}", Uuid::new_v4(), receipt.file_name);
                Some(self.receipts.store(&object_name, &receipt.bytes).await?)
            }
            None => None,
        };

        // Everything after the upload routes through the compensating
        // remove, the URL bound included
        let inserted = async {
            let now = Utc::now();
            let expense = PetExpenseModel {
                id: Uuid::new_v4(),
                pet_id: request.pet_id,
                amount,
                description,
                expense_date,
                category,
                image_url: bounded_opt::<300>("image url", image_url.as_deref())?,
                created_at: now,
                updated_at: now,
            };
            self.expenses.create(expense).await.map_err(ApiError::from)
        }
        .await;

        match inserted {
            Ok(expense) => Ok(expense),
            Err(err) => {
                if let Some(url) = &image_url {
                    if let Err(cleanup_err) = self.receipts.remove(url).await {
                        tracing::warn!(
                            %url,
                            error = %cleanup_err,
                            "orphaned receipt left in storage"
                        );
                    }
                }
                Err(err)
            }
        }
    }

    /// All expenses, newest expense date first
    pub async fn list(&self) -> ApiResult<Vec<PetExpenseModel>> {
        Ok(self.expenses.list_all().await?)
    }

    pub async fn update(&self, expense: PetExpenseModel) -> ApiResult<PetExpenseModel> {
        let mut expense = expense;
        expense.updated_at = Utc::now();
        Ok(self.expenses.update(expense).await?)
    }

    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        Ok(self.expenses.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReceiptUpload;
    use crate::service::memory::{Memory, MemoryReceipts};
    use chrono::NaiveDate;
    use std::sync::atomic::Ordering;

    fn request(receipt: Option<ReceiptUpload>) -> NewExpenseRequest {
        NewExpenseRequest {
            pet_id: None,
            amount: Some(Decimal::new(4500, 2)),
            description: "Ração premium".to_string(),
            expense_date: NaiveDate::from_ymd_opt(2024, 3, 5),
            category: Some("Alimentação".to_string()),
            receipt,
        }
    }

    fn receipt() -> ReceiptUpload {
        ReceiptUpload {
            file_name: "nota.jpg".to_string(),
            bytes: vec![0xff, 0xd8, 0xff],
        }
    }

    #[tokio::test]
    async fn expense_with_receipt_stores_the_url_on_the_row() {
        let memory = Memory::new();
        let receipts = Arc::new(MemoryReceipts::default());
        let svc = ExpenseService::new(Arc::new(memory.clone()), receipts.clone());

        let expense = svc.create(request(Some(receipt()))).await.unwrap();

        let url = expense.image_url.unwrap();
        assert!(url.contains("nota.jpg"));
        assert_eq!(receipts.uploads.lock().unwrap().len(), 1);
        assert!(receipts.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_upload_creates_no_row() {
        let memory = Memory::new();
        let receipts = Arc::new(MemoryReceipts::default());
        receipts.fail_upload.store(true, Ordering::SeqCst);
        let svc = ExpenseService::new(Arc::new(memory.clone()), receipts);

        let err = svc.create(request(Some(receipt()))).await;
        assert!(matches!(err, Err(ApiError::DatabaseError(_))));
        assert!(memory.0.expenses.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_insert_removes_the_uploaded_receipt() {
        let memory = Memory::new();
        memory.0.fail_expense_insert.store(true, Ordering::SeqCst);
        let receipts = Arc::new(MemoryReceipts::default());
        let svc = ExpenseService::new(Arc::new(memory.clone()), receipts.clone());

        assert!(svc.create(request(Some(receipt()))).await.is_err());

        let uploaded = receipts.uploads.lock().unwrap().clone();
        let removed = receipts.removed.lock().unwrap().clone();
        assert_eq!(uploaded, removed);
        assert!(memory.0.expenses.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn overlong_receipt_file_name_is_rejected_before_the_upload() {
        let memory = Memory::new();
        let receipts = Arc::new(MemoryReceipts::default());
        let svc = ExpenseService::new(Arc::new(memory.clone()), receipts.clone());

        let long_name = ReceiptUpload {
            file_name: format!("{}.jpg", "a".repeat(300)),
            bytes: vec![0xff, 0xd8, 0xff],
        };
        let err = svc.create(request(Some(long_name))).await;

        assert!(matches!(err, Err(ApiError::ValidationError(_))));
        // Nothing may reach storage on a validation failure
        assert!(receipts.uploads.lock().unwrap().is_empty());
        assert!(receipts.removed.lock().unwrap().is_empty());
        assert!(memory.0.expenses.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn expense_without_receipt_has_no_image_url() {
        let memory = Memory::new();
        let receipts = Arc::new(MemoryReceipts::default());
        let svc = ExpenseService::new(Arc::new(memory.clone()), receipts.clone());

        let expense = svc.create(request(None)).await.unwrap();
        assert!(expense.image_url.is_none());
        assert!(receipts.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn listing_is_newest_expense_first() {
        let memory = Memory::new();
        let receipts = Arc::new(MemoryReceipts::default());
        let svc = ExpenseService::new(Arc::new(memory.clone()), receipts);

        let mut older = request(None);
        older.expense_date = NaiveDate::from_ymd_opt(2024, 2, 1);
        let mut newer = request(None);
        newer.expense_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        svc.create(older).await.unwrap();
        svc.create(newer).await.unwrap();

        let listed = svc.list().await.unwrap();
        assert_eq!(
            listed[0].expense_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }
}
