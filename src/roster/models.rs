use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::Named;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub date_created: DateTime<Utc>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date_created: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps_link: Option<String>,
    pub date_created: DateTime<Utc>,
}

impl Restaurant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            google_maps_link: None,
            date_created: Utc::now(),
        }
    }

    pub fn with_maps_link(mut self, link: impl Into<String>) -> Self {
        self.google_maps_link = Some(link.into());
        self
    }
}

/// Named set of player references. Ids are weak: deleting a player leaves
/// its id here, and resolution against the roster drops it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub player_ids: Vec<Uuid>,
    pub date_created: DateTime<Utc>,
}

impl Group {
    pub fn new(name: impl Into<String>, player_ids: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            player_ids,
            date_created: Utc::now(),
        }
    }

    pub fn contains(&self, player_id: Uuid) -> bool {
        self.player_ids.contains(&player_id)
    }
}

impl Named for Player {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Restaurant {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Group {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
