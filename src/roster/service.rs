use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::models::{Group, Player, Restaurant};
use super::repository::{GroupRepository, PlayerRepository, RestaurantRepository};
use crate::shared::AppError;
use crate::validation::Validator;

/// Players, restaurants and groups, with name rules enforced before any write.
pub struct RosterService {
    players: Arc<PlayerRepository>,
    restaurants: Arc<RestaurantRepository>,
    groups: Arc<GroupRepository>,
}

impl RosterService {
    pub fn new(
        players: Arc<PlayerRepository>,
        restaurants: Arc<RestaurantRepository>,
        groups: Arc<GroupRepository>,
    ) -> Self {
        Self {
            players,
            restaurants,
            groups,
        }
    }

    pub async fn players(&self) -> Result<Vec<Player>, AppError> {
        self.players.get_all().await
    }

    pub async fn player(&self, id: Uuid) -> Result<Player, AppError> {
        self.players.get(id).await?.ok_or(AppError::NotFound {
            entity: "Player",
            id,
        })
    }

    #[instrument(skip(self))]
    pub async fn add_player(&self, name: &str) -> Result<Player, AppError> {
        let existing = self.players.get_all().await?;
        let name = Validator::validate_name("Player", name, &existing, None).map_err(|e| {
            warn!(error = %e, "Rejected new player");
            e
        })?;

        let player = Player::new(name);
        self.players.save(player.clone()).await?;

        info!(player_id = %player.id, name = %player.name, "Player added");
        Ok(player)
    }

    #[instrument(skip(self))]
    pub async fn rename_player(&self, id: Uuid, name: &str) -> Result<Player, AppError> {
        let existing = self.players.get_all().await?;
        let mut player = existing
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::NotFound {
                entity: "Player",
                id,
            })?;

        player.name = Validator::validate_name("Player", name, &existing, Some(id))?;
        self.players.update(player.clone()).await?;

        info!(player_id = %id, name = %player.name, "Player renamed");
        Ok(player)
    }

    /// Removes the player from the roster. Stored games keep their snapshot
    /// of the name, and groups keep the dangling id.
    #[instrument(skip(self))]
    pub async fn delete_player(&self, id: Uuid) -> Result<(), AppError> {
        self.players.delete(id).await?;
        info!(player_id = %id, "Player deleted");
        Ok(())
    }

    pub async fn restaurants(&self) -> Result<Vec<Restaurant>, AppError> {
        self.restaurants.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn add_restaurant(
        &self,
        name: &str,
        google_maps_link: Option<String>,
    ) -> Result<Restaurant, AppError> {
        let existing = self.restaurants.get_all().await?;
        let name = Validator::validate_name("Restaurant", name, &existing, None)?;

        let mut restaurant = Restaurant::new(name);
        restaurant.google_maps_link = google_maps_link.filter(|link| !link.trim().is_empty());
        self.restaurants.save(restaurant.clone()).await?;

        info!(restaurant_id = %restaurant.id, name = %restaurant.name, "Restaurant added");
        Ok(restaurant)
    }

    #[instrument(skip(self, restaurant), fields(restaurant_id = %restaurant.id))]
    pub async fn update_restaurant(&self, mut restaurant: Restaurant) -> Result<(), AppError> {
        let existing = self.restaurants.get_all().await?;
        restaurant.name = Validator::validate_name(
            "Restaurant",
            &restaurant.name,
            &existing,
            Some(restaurant.id),
        )?;
        self.restaurants.update(restaurant).await
    }

    pub async fn delete_restaurant(&self, id: Uuid) -> Result<(), AppError> {
        self.restaurants.delete(id).await
    }

    pub async fn groups(&self) -> Result<Vec<Group>, AppError> {
        self.groups.get_all().await
    }

    #[instrument(skip(self, player_ids), fields(members = player_ids.len()))]
    pub async fn add_group(&self, name: &str, player_ids: Vec<Uuid>) -> Result<Group, AppError> {
        let existing = self.groups.get_all().await?;
        let name = Validator::validate_name("Group", name, &existing, None)?;

        let mut unique_ids = Vec::with_capacity(player_ids.len());
        for id in player_ids {
            if !unique_ids.contains(&id) {
                unique_ids.push(id);
            }
        }

        let group = Group::new(name, unique_ids);
        self.groups.save(group.clone()).await?;

        info!(group_id = %group.id, name = %group.name, "Group added");
        Ok(group)
    }

    #[instrument(skip(self, group), fields(group_id = %group.id))]
    pub async fn update_group(&self, mut group: Group) -> Result<(), AppError> {
        let existing = self.groups.get_all().await?;
        group.name = Validator::validate_name("Group", &group.name, &existing, Some(group.id))?;
        self.groups.update(group).await
    }

    pub async fn delete_group(&self, id: Uuid) -> Result<(), AppError> {
        self.groups.delete(id).await
    }

    /// Current players referenced by `group`, in roster order. Ids of deleted
    /// players are skipped.
    pub async fn group_members(&self, group: &Group) -> Result<Vec<Player>, AppError> {
        let players = self.players.get_all().await?;
        Ok(players
            .into_iter()
            .filter(|player| group.contains(player.id))
            .collect())
    }
}
