//! In-memory repository fakes for service tests
//!
//! One store backs every repository trait; an op log records write
//! ordering so tests can assert happens-before properties (history
//! before profile deletion, upload before insert).

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use uuid::Uuid;

use petshop_core_db::change_feed::{ChangeFeed, TableChange};
use petshop_core_db::models::access::approval_history::ApprovalHistoryModel;
use petshop_core_db::models::access::profile::ProfileModel;
use petshop_core_db::models::access::user_role::{UserRole, UserRoleModel};
use petshop_core_db::models::appointment::{
    AppointmentModel, AppointmentStatus, AppointmentWithPetModel,
};
use petshop_core_db::models::client::{ClientModel, ClientWithPetCountModel};
use petshop_core_db::models::pet::{PetModel, PetWithOwnerModel};
use petshop_core_db::models::pet_expense::PetExpenseModel;
use petshop_core_db::models::transaction::{PaymentStatus, TransactionModel};
use petshop_core_db::models::vaccine::{VaccineModel, VaccineWithPetModel};
use petshop_core_db::repository::*;

use crate::storage::ReceiptStore;

pub fn hs<const N: usize>(s: &str) -> HeaplessString<N> {
    HeaplessString::from_str(s).unwrap()
}

#[derive(Default)]
pub struct MemoryStore {
    pub clients: Mutex<Vec<ClientModel>>,
    pub pets: Mutex<Vec<PetModel>>,
    pub appointments: Mutex<Vec<AppointmentModel>>,
    pub transactions: Mutex<Vec<TransactionModel>>,
    pub expenses: Mutex<Vec<PetExpenseModel>>,
    pub vaccines: Mutex<Vec<VaccineModel>>,
    pub profiles: Mutex<Vec<ProfileModel>>,
    pub roles: Mutex<Vec<UserRoleModel>>,
    pub history: Mutex<Vec<ApprovalHistoryModel>>,
    /// Chronological record of every write, e.g. "profiles:delete"
    pub op_log: Mutex<Vec<String>>,
    pub fail_pet_insert: AtomicBool,
    pub fail_expense_insert: AtomicBool,
}

impl MemoryStore {
    fn log(&self, op: &str) {
        self.op_log.lock().unwrap().push(op.to_string());
    }
}

/// Implements every repository trait over one shared [`MemoryStore`]
#[derive(Clone)]
pub struct Memory(pub Arc<MemoryStore>);

impl Memory {
    pub fn new() -> Self {
        Memory(Arc::new(MemoryStore::default()))
    }
}

#[async_trait]
impl ClientRepository for Memory {
    async fn create(&self, client: ClientModel) -> Result<ClientModel, RepositoryError> {
        self.0.clients.lock().unwrap().push(client.clone());
        self.0.log("clients:insert");
        Ok(client)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ClientModel>, RepositoryError> {
        Ok(self
            .0
            .clients
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<ClientModel>, RepositoryError> {
        let mut rows = self.0.clients.lock().unwrap().clone();
        rows.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(rows)
    }

    async fn list_with_pet_counts(
        &self,
    ) -> Result<Vec<ClientWithPetCountModel>, RepositoryError> {
        let pets = self.0.pets.lock().unwrap();
        let mut rows: Vec<ClientWithPetCountModel> = self
            .0
            .clients
            .lock()
            .unwrap()
            .iter()
            .map(|c| ClientWithPetCountModel {
                client: c.clone(),
                pet_count: pets.iter().filter(|p| p.client_id == c.id).count() as i64,
            })
            .collect();
        rows.sort_by(|a, b| a.client.full_name.cmp(&b.client.full_name));
        Ok(rows)
    }

    async fn update(&self, client: ClientModel) -> Result<ClientModel, RepositoryError> {
        let mut rows = self.0.clients.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == client.id)
            .ok_or("client not found")?;
        *row = client.clone();
        self.0.log("clients:update");
        Ok(client)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.0.clients.lock().unwrap().retain(|c| c.id != id);
        self.0.log("clients:delete");
        Ok(())
    }
}

#[async_trait]
impl PetRepository for Memory {
    async fn create(&self, pet: PetModel) -> Result<PetModel, RepositoryError> {
        if self.0.fail_pet_insert.load(Ordering::SeqCst) {
            return Err("injected pet insert failure".into());
        }
        self.0.pets.lock().unwrap().push(pet.clone());
        self.0.log("pets:insert");
        Ok(pet)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PetModel>, RepositoryError> {
        Ok(self
            .0
            .pets
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_with_owner(&self) -> Result<Vec<PetWithOwnerModel>, RepositoryError> {
        let clients = self.0.clients.lock().unwrap();
        let mut rows = Vec::new();
        for pet in self.0.pets.lock().unwrap().iter() {
            let owner = clients
                .iter()
                .find(|c| c.id == pet.client_id)
                .ok_or("pet without owner")?;
            rows.push(PetWithOwnerModel {
                pet: pet.clone(),
                owner_name: owner.full_name.clone(),
            });
        }
        rows.sort_by(|a, b| a.pet.name.cmp(&b.pet.name));
        Ok(rows)
    }

    async fn find_by_client_id(
        &self,
        client_id: Uuid,
    ) -> Result<Vec<PetModel>, RepositoryError> {
        Ok(self
            .0
            .pets
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn update(&self, pet: PetModel) -> Result<PetModel, RepositoryError> {
        let mut rows = self.0.pets.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == pet.id)
            .ok_or("pet not found")?;
        *row = pet.clone();
        self.0.log("pets:update");
        Ok(pet)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.0.pets.lock().unwrap().retain(|p| p.id != id);
        self.0.log("pets:delete");
        Ok(())
    }
}

impl Memory {
    fn join_appointment(
        &self,
        appointment: &AppointmentModel,
    ) -> Result<AppointmentWithPetModel, RepositoryError> {
        let pets = self.0.pets.lock().unwrap();
        let clients = self.0.clients.lock().unwrap();
        let pet = pets
            .iter()
            .find(|p| p.id == appointment.pet_id)
            .ok_or("appointment without pet")?;
        let owner = clients
            .iter()
            .find(|c| c.id == pet.client_id)
            .ok_or("pet without owner")?;
        Ok(AppointmentWithPetModel {
            appointment: appointment.clone(),
            pet_name: pet.name.clone(),
            pet_photo_url: pet.photo_url.clone(),
            owner_name: owner.full_name.clone(),
        })
    }
}

#[async_trait]
impl AppointmentRepository for Memory {
    async fn create_batch(
        &self,
        appointments: Vec<AppointmentModel>,
    ) -> Result<Vec<AppointmentModel>, RepositoryError> {
        let mut rows = self.0.appointments.lock().unwrap();
        rows.extend(appointments.iter().cloned());
        self.0.log("appointments:insert");
        Ok(appointments)
    }

    async fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<AppointmentWithPetModel>, RepositoryError> {
        let mut matching: Vec<AppointmentModel> = self
            .0
            .appointments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.appointment_date == date)
            .cloned()
            .collect();
        matching.sort_by_key(|a| a.created_at);
        matching
            .iter()
            .map(|a| self.join_appointment(a))
            .collect()
    }

    async fn find_by_date_and_status(
        &self,
        date: NaiveDate,
        status: AppointmentStatus,
    ) -> Result<Vec<AppointmentWithPetModel>, RepositoryError> {
        let all = self.find_by_date(date).await?;
        Ok(all
            .into_iter()
            .filter(|a| a.appointment.status == status)
            .collect())
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected: AppointmentStatus,
        next: AppointmentStatus,
    ) -> Result<bool, RepositoryError> {
        let mut rows = self.0.appointments.lock().unwrap();
        match rows.iter_mut().find(|a| a.id == id && a.status == expected) {
            Some(row) => {
                row.status = next;
                row.updated_at = Utc::now();
                self.0.log("appointments:update");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.0.appointments.lock().unwrap().retain(|a| a.id != id);
        self.0.log("appointments:delete");
        Ok(())
    }
}

#[async_trait]
impl TransactionRepository for Memory {
    async fn create(
        &self,
        transaction: TransactionModel,
    ) -> Result<TransactionModel, RepositoryError> {
        self.0.transactions.lock().unwrap().push(transaction.clone());
        self.0.log("transactions:insert");
        Ok(transaction)
    }

    async fn list_all(&self) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut rows = self.0.transactions.lock().unwrap().clone();
        rows.sort_by(|a, b| b.charge_date.cmp(&a.charge_date));
        Ok(rows)
    }

    async fn find_by_client_id(
        &self,
        client_id: Uuid,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        Ok(self
            .0
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn set_payment_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<(), RepositoryError> {
        let mut rows = self.0.transactions.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or("transaction not found")?;
        row.payment_status = status;
        row.updated_at = Utc::now();
        self.0.log("transactions:update");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.0.transactions.lock().unwrap().retain(|t| t.id != id);
        self.0.log("transactions:delete");
        Ok(())
    }
}

#[async_trait]
impl PetExpenseRepository for Memory {
    async fn create(
        &self,
        expense: PetExpenseModel,
    ) -> Result<PetExpenseModel, RepositoryError> {
        if self.0.fail_expense_insert.load(Ordering::SeqCst) {
            return Err("injected expense insert failure".into());
        }
        self.0.expenses.lock().unwrap().push(expense.clone());
        self.0.log("pet_expenses:insert");
        Ok(expense)
    }

    async fn list_all(&self) -> Result<Vec<PetExpenseModel>, RepositoryError> {
        let mut rows = self.0.expenses.lock().unwrap().clone();
        rows.sort_by(|a, b| b.expense_date.cmp(&a.expense_date));
        Ok(rows)
    }

    async fn update(
        &self,
        expense: PetExpenseModel,
    ) -> Result<PetExpenseModel, RepositoryError> {
        let mut rows = self.0.expenses.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|e| e.id == expense.id)
            .ok_or("expense not found")?;
        *row = expense.clone();
        self.0.log("pet_expenses:update");
        Ok(expense)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.0.expenses.lock().unwrap().retain(|e| e.id != id);
        self.0.log("pet_expenses:delete");
        Ok(())
    }
}

#[async_trait]
impl VaccineRepository for Memory {
    async fn create(&self, vaccine: VaccineModel) -> Result<VaccineModel, RepositoryError> {
        self.0.vaccines.lock().unwrap().push(vaccine.clone());
        self.0.log("vaccines:insert");
        Ok(vaccine)
    }

    async fn find_by_pet_id(
        &self,
        pet_id: Uuid,
    ) -> Result<Vec<VaccineModel>, RepositoryError> {
        let mut rows: Vec<VaccineModel> = self
            .0
            .vaccines
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.pet_id == pet_id)
            .cloned()
            .collect();
        rows.sort_by_key(|v| v.expiry_date);
        Ok(rows)
    }

    async fn find_expiring_before(
        &self,
        cutoff: NaiveDate,
    ) -> Result<Vec<VaccineWithPetModel>, RepositoryError> {
        let pets = self.0.pets.lock().unwrap();
        let mut rows = Vec::new();
        for vaccine in self.0.vaccines.lock().unwrap().iter() {
            if vaccine.expiry_date > cutoff {
                continue;
            }
            let pet = pets
                .iter()
                .find(|p| p.id == vaccine.pet_id)
                .ok_or("vaccine without pet")?;
            rows.push(VaccineWithPetModel {
                vaccine: vaccine.clone(),
                pet_name: pet.name.clone(),
            });
        }
        rows.sort_by_key(|v| v.vaccine.expiry_date);
        Ok(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.0.vaccines.lock().unwrap().retain(|v| v.id != id);
        self.0.log("vaccines:delete");
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for Memory {
    async fn list_all(&self) -> Result<Vec<ProfileModel>, RepositoryError> {
        let mut rows = self.0.profiles.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProfileModel>, RepositoryError> {
        Ok(self
            .0
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
}

#[async_trait]
impl UserRoleRepository for Memory {
    async fn create(&self, role: UserRoleModel) -> Result<UserRoleModel, RepositoryError> {
        let mut rows = self.0.roles.lock().unwrap();
        if rows.iter().any(|r| r.user_id == role.user_id) {
            return Err("duplicate key value violates unique constraint \"user_roles_user_id_key\"".into());
        }
        rows.push(role.clone());
        self.0.log("user_roles:insert");
        Ok(role)
    }

    async fn list_all(&self) -> Result<Vec<UserRoleModel>, RepositoryError> {
        Ok(self.0.roles.lock().unwrap().clone())
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserRoleModel>, RepositoryError> {
        Ok(self
            .0
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id)
            .cloned())
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<(), RepositoryError> {
        let mut rows = self.0.roles.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or("role assignment not found")?;
        row.role = role;
        self.0.log("user_roles:update");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.0.roles.lock().unwrap().retain(|r| r.id != id);
        self.0.log("user_roles:delete");
        Ok(())
    }
}

#[async_trait]
impl ApprovalHistoryRepository for Memory {
    async fn append(
        &self,
        record: ApprovalHistoryModel,
    ) -> Result<ApprovalHistoryModel, RepositoryError> {
        self.0.history.lock().unwrap().push(record.clone());
        self.0.log("approval_history:insert");
        Ok(record)
    }

    async fn list_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<ApprovalHistoryModel>, RepositoryError> {
        let mut rows = self.0.history.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

#[async_trait]
impl ApprovalRepository for Memory {
    async fn approve(
        &self,
        role: UserRoleModel,
        history: ApprovalHistoryModel,
    ) -> Result<(), RepositoryError> {
        // Atomic: the uniqueness check happens before anything lands
        {
            let rows = self.0.roles.lock().unwrap();
            if rows.iter().any(|r| r.user_id == role.user_id) {
                return Err("duplicate key value violates unique constraint \"user_roles_user_id_key\"".into());
            }
        }
        self.0.roles.lock().unwrap().push(role);
        self.0.log("user_roles:insert");
        self.0.history.lock().unwrap().push(history);
        self.0.log("approval_history:insert");
        Ok(())
    }

    async fn reject(
        &self,
        profile_id: Uuid,
        history: ApprovalHistoryModel,
    ) -> Result<(), RepositoryError> {
        self.0.history.lock().unwrap().push(history);
        self.0.log("approval_history:insert");
        self.0.profiles.lock().unwrap().retain(|p| p.id != profile_id);
        self.0.log("profiles:delete");
        Ok(())
    }
}

/// Fake object storage that records uploads and removals
#[derive(Default)]
pub struct MemoryReceipts {
    pub uploads: Mutex<Vec<String>>,
    pub removed: Mutex<Vec<String>>,
    pub fail_upload: AtomicBool,
    pub fail_remove: AtomicBool,
}

#[async_trait]
impl ReceiptStore for MemoryReceipts {
    async fn store(&self, file_name: &str, _bytes: &[u8]) -> Result<String, RepositoryError> {
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err("injected upload failure".into());
        }
        let url = format!("https://storage.test/expense-receipts/{file_name}");
        self.uploads.lock().unwrap().push(url.clone());
        Ok(url)
    }

    async fn remove(&self, url: &str) -> Result<(), RepositoryError> {
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err("injected remove failure".into());
        }
        self.removed.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Fake realtime feed driven directly by tests
pub struct MemoryFeed {
    tx: broadcast::Sender<TableChange>,
}

impl MemoryFeed {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(16);
        Self { tx }
    }

    pub fn emit(&self, change: TableChange) {
        // Ignore "no receivers": tests may emit before subscribing
        let _ = self.tx.send(change);
    }
}

impl ChangeFeed for MemoryFeed {
    fn subscribe(&self) -> broadcast::Receiver<TableChange> {
        self.tx.subscribe()
    }
}

// Seed model builders

pub fn client(name: &str) -> ClientModel {
    ClientModel {
        id: Uuid::new_v4(),
        user_id: None,
        full_name: hs(name),
        phone: hs("11 99999-0000"),
        email: None,
        address: None,
        emergency_contact: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn pet(client_id: Uuid, name: &str) -> PetModel {
    PetModel {
        id: Uuid::new_v4(),
        client_id,
        name: hs(name),
        breed: None,
        birth_date: None,
        sex: None,
        size: None,
        health_notes: None,
        behavior_notes: None,
        photo_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn profile(email: &str, name: &str) -> ProfileModel {
    ProfileModel {
        id: Uuid::new_v4(),
        email: hs(email),
        full_name: hs(name),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn transaction(client_id: Uuid, amount: Decimal, status: PaymentStatus, charge_date: NaiveDate) -> TransactionModel {
    TransactionModel {
        id: Uuid::new_v4(),
        client_id,
        description: hs("Mensalidade creche"),
        amount,
        charge_date,
        payment_status: status,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn vaccine(pet_id: Uuid, name: &str, expiry_date: NaiveDate) -> VaccineModel {
    VaccineModel {
        id: Uuid::new_v4(),
        pet_id,
        vaccine_name: hs(name),
        expiry_date,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
