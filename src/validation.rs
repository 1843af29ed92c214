use thiserror::Error;
use uuid::Uuid;

/// Reasons an input is rejected before any state changes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{entity} name cannot be empty")]
    EmptyName { entity: &'static str },

    #[error("A {entity} named '{name}' already exists")]
    DuplicateName { entity: &'static str, name: String },

    #[error("Price must be greater than zero")]
    PriceNotPositive,

    #[error("Invalid price value")]
    InvalidPrice,

    #[error("No players selected")]
    NoPlayersSelected,

    #[error("Not enough players. At least {minimum} players are required")]
    InsufficientPlayers { minimum: usize },

    #[error("No restaurant selected")]
    NoRestaurantSelected,
}

/// Anything with an id and a user-visible name that must stay unique.
pub trait Named {
    fn id(&self) -> Uuid;
    fn name(&self) -> &str;
}

/// Stateless input checks shared by the roster and game flows.
pub struct Validator;

impl Validator {
    /// Trims `name` and rejects it when empty or when another entry (other than
    /// `excluding_id`) already uses it, ignoring case. Returns the trimmed name.
    pub fn validate_name<T: Named>(
        entity: &'static str,
        name: &str,
        existing: &[T],
        excluding_id: Option<Uuid>,
    ) -> Result<String, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName { entity });
        }

        let lowered = trimmed.to_lowercase();
        let duplicate = existing.iter().any(|item| {
            item.name().trim().to_lowercase() == lowered && Some(item.id()) != excluding_id
        });

        if duplicate {
            return Err(ValidationError::DuplicateName {
                entity,
                name: trimmed.to_string(),
            });
        }

        Ok(trimmed.to_string())
    }

    /// NaN fails the positivity check first, infinity fails the finiteness check.
    pub fn validate_price(price: f64) -> Result<(), ValidationError> {
        if price.is_nan() || price <= 0.0 {
            return Err(ValidationError::PriceNotPositive);
        }
        if !price.is_finite() {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(())
    }

    pub fn validate_game_setup(
        player_count: usize,
        has_restaurant: bool,
        minimum: usize,
    ) -> Result<(), ValidationError> {
        if player_count == 0 {
            return Err(ValidationError::NoPlayersSelected);
        }
        if player_count < minimum {
            return Err(ValidationError::InsufficientPlayers { minimum });
        }
        if !has_restaurant {
            return Err(ValidationError::NoRestaurantSelected);
        }
        Ok(())
    }
}
