use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use petshop_core_db::models::pet::{PetModel, PetWithOwnerModel};
use petshop_core_db::models::vaccine::VaccineModel;
use petshop_core_db::repository::{ClientRepository, PetRepository, VaccineRepository};

use crate::domain::{bounded, bounded_opt, NewPetRequest, NewVaccineRequest, UpdatePetRequest};
use crate::error::{ApiError, ApiResult};

/// Pet directory operations, including each pet's vaccine card
pub struct PetService {
    pets: Arc<dyn PetRepository>,
    clients: Arc<dyn ClientRepository>,
    vaccines: Arc<dyn VaccineRepository>,
}

impl PetService {
    pub fn new(
        pets: Arc<dyn PetRepository>,
        clients: Arc<dyn ClientRepository>,
        vaccines: Arc<dyn VaccineRepository>,
    ) -> Self {
        Self {
            pets,
            clients,
            vaccines,
        }
    }

    pub async fn create(&self, request: NewPetRequest) -> ApiResult<PetModel> {
        request.validate()?;
        if self.clients.find_by_id(request.client_id).await?.is_none() {
            return Err(ApiError::NotFound(format!("client {}", request.client_id)));
        }

        let now = Utc::now();
        let pet = PetModel {
            id: Uuid::new_v4(),
            client_id: request.client_id,
            name: bounded::<100>("pet name", &request.name)?,
            breed: bounded_opt::<100>("breed", request.breed.as_deref())?,
            birth_date: request.birth_date,
            sex: bounded_opt::<20>("sex", request.sex.as_deref())?,
            size: bounded_opt::<20>("size", request.size.as_deref())?,
            health_notes: bounded_opt::<500>("health notes", request.health_notes.as_deref())?,
            behavior_notes: bounded_opt::<500>(
                "behavior notes",
                request.behavior_notes.as_deref(),
            )?,
            photo_url: bounded_opt::<300>("photo url", request.photo_url.as_deref())?,
            created_at: now,
            updated_at: now,
        };
        Ok(self.pets.create(pet).await?)
    }

    pub async fn get(&self, id: Uuid) -> ApiResult<PetModel> {
        self.pets
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("pet {id}")))
    }

    /// The pet directory, each row carrying the owner's name
    pub async fn list_with_owner(&self) -> ApiResult<Vec<PetWithOwnerModel>> {
        Ok(self.pets.list_with_owner().await?)
    }

    pub async fn list_by_client(&self, client_id: Uuid) -> ApiResult<Vec<PetModel>> {
        Ok(self.pets.find_by_client_id(client_id).await?)
    }

    pub async fn update(&self, id: Uuid, request: UpdatePetRequest) -> ApiResult<PetModel> {
        request.validate()?;
        let mut pet = self.get(id).await?;
        pet.name = bounded::<100>("pet name", &request.name)?;
        pet.breed = bounded_opt::<100>("breed", request.breed.as_deref())?;
        pet.birth_date = request.birth_date;
        pet.sex = bounded_opt::<20>("sex", request.sex.as_deref())?;
        pet.size = bounded_opt::<20>("size", request.size.as_deref())?;
        pet.health_notes = bounded_opt::<500>("health notes", request.health_notes.as_deref())?;
        pet.behavior_notes =
            bounded_opt::<500>("behavior notes", request.behavior_notes.as_deref())?;
        pet.updated_at = Utc::now();
        Ok(self.pets.update(pet).await?)
    }

    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        Ok(self.pets.delete(id).await?)
    }

    pub async fn add_vaccine(&self, request: NewVaccineRequest) -> ApiResult<VaccineModel> {
        request.validate()?;
        if self.pets.find_by_id(request.pet_id).await?.is_none() {
            return Err(ApiError::NotFound(format!("pet {}", request.pet_id)));
        }

        let now = Utc::now();
        let vaccine = VaccineModel {
            id: Uuid::new_v4(),
            pet_id: request.pet_id,
            vaccine_name: bounded::<100>("vaccine name", &request.vaccine_name)?,
            expiry_date: request.expiry_date,
            created_at: now,
            updated_at: now,
        };
        Ok(self.vaccines.create(vaccine).await?)
    }

    /// The vaccine card for one pet, soonest expiry first
    pub async fn list_vaccines(&self, pet_id: Uuid) -> ApiResult<Vec<VaccineModel>> {
        Ok(self.vaccines.find_by_pet_id(pet_id).await?)
    }

    pub async fn delete_vaccine(&self, id: Uuid) -> ApiResult<()> {
        Ok(self.vaccines.delete(id).await?)
    }
}

/// Case-insensitive substring filter over already-fetched directory rows
pub fn filter_pets(pets: &[PetWithOwnerModel], query: &str) -> Vec<PetWithOwnerModel> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return pets.to_vec();
    }
    pets.iter()
        .filter(|p| {
            p.pet.name.to_lowercase().contains(&needle)
                || p.pet
                    .breed
                    .as_ref()
                    .is_some_and(|b| b.to_lowercase().contains(&needle))
                || p.owner_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
