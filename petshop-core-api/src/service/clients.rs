use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use petshop_core_db::models::client::{ClientModel, ClientWithPetCountModel};
use petshop_core_db::models::pet::PetModel;
use petshop_core_db::repository::{ClientRepository, PetRepository};

use crate::domain::{bounded, bounded_opt, NewClientRequest, UpdateClientRequest};
use crate::error::{ApiError, ApiResult};

/// Outcome of creating a client
///
/// The inline pet is best effort: its failure is reported here but does
/// not undo the client insert.
#[derive(Debug, Clone)]
pub struct CreatedClient {
    pub client: ClientModel,
    pub pet: Option<PetModel>,
    pub pet_error: Option<String>,
}

/// Client directory operations
pub struct ClientService {
    clients: Arc<dyn ClientRepository>,
    pets: Arc<dyn PetRepository>,
}

impl ClientService {
    pub fn new(clients: Arc<dyn ClientRepository>, pets: Arc<dyn PetRepository>) -> Self {
        Self { clients, pets }
    }

    /// Create a client, optionally with its first pet in the same call
    pub async fn create(&self, request: NewClientRequest) -> ApiResult<CreatedClient> {
        request.validate()?;

        let now = Utc::now();
        let client = ClientModel {
            id: Uuid::new_v4(),
            user_id: None,
            full_name: bounded::<100>("full name", &request.full_name)?,
            phone: bounded::<30>("phone", &request.phone)?,
            email: bounded_opt::<100>("email", request.email.as_deref())?,
            address: bounded_opt::<200>("address", request.address.as_deref())?,
            emergency_contact: bounded_opt::<100>(
                "emergency contact",
                request.emergency_contact.as_deref(),
            )?,
            created_at: now,
            updated_at: now,
        };
        let client = self.clients.create(client).await?;

        let (pet, pet_error) = match request.pet_name.as_deref().filter(|n| !n.trim().is_empty()) {
            Some(pet_name) => {
                let pet = PetModel {
                    id: Uuid::new_v4(),
                    client_id: client.id,
                    name: bounded::<100>("pet name", pet_name)?,
                    breed: None,
                    birth_date: None,
                    sex: None,
                    size: None,
                    health_notes: None,
                    behavior_notes: None,
                    photo_url: None,
                    created_at: now,
                    updated_at: now,
                };
                match self.pets.create(pet).await {
                    Ok(pet) => (Some(pet), None),
                    Err(err) => {
                        tracing::warn!(client_id = %client.id, error = %err, "inline pet creation failed");
                        (None, Some(err.to_string()))
                    }
                }
            }
            None => (None, None),
        };

        Ok(CreatedClient {
            client,
            pet,
            pet_error,
        })
    }

    pub async fn get(&self, id: Uuid) -> ApiResult<ClientModel> {
        self.clients
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("client {id}")))
    }

    pub async fn list(&self) -> ApiResult<Vec<ClientModel>> {
        Ok(self.clients.list_all().await?)
    }

    /// The directory listing with per-client pet counts
    pub async fn list_with_pet_counts(&self) -> ApiResult<Vec<ClientWithPetCountModel>> {
        Ok(self.clients.list_with_pet_counts().await?)
    }

    pub async fn update(&self, id: Uuid, request: UpdateClientRequest) -> ApiResult<ClientModel> {
        request.validate()?;
        let mut client = self.get(id).await?;
        client.full_name = bounded::<100>("full name", &request.full_name)?;
        client.phone = bounded::<30>("phone", &request.phone)?;
        client.emergency_contact = bounded_opt::<100>(
            "emergency contact",
            request.emergency_contact.as_deref(),
        )?;
        client.updated_at = Utc::now();
        Ok(self.clients.update(client).await?)
    }

    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        Ok(self.clients.delete(id).await?)
    }
}

/// Case-insensitive substring filter over name, phone and email
pub fn filter_clients(clients: &[ClientModel], query: &str) -> Vec<ClientModel> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return clients.to_vec();
    }
    clients
        .iter()
        .filter(|c| {
            c.full_name.to_lowercase().contains(&needle)
                || c.phone.to_lowercase().contains(&needle)
                || c.email
                    .as_ref()
                    .is_some_and(|e| e.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
