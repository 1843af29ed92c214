use std::sync::Arc;

use priceguesser::{
    identity::RandomIdGenerator, AppConfig, AppState, InMemoryRecordStore, Player, RecordStore,
    Restaurant,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub state: AppState,
    pub players: Vec<Player>,
    pub restaurant: Restaurant,
}

impl TestSetup {
    pub fn player(&self, name: &str) -> &Player {
        self.players
            .iter()
            .find(|p| p.name == name)
            .unwrap_or_else(|| panic!("no player named {name}"))
    }
}

pub struct TestSetupBuilder {
    players: Vec<String>,
    restaurant: String,
    store: Option<Arc<dyn RecordStore>>,
    config: AppConfig,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            players: vec![],
            restaurant: "Trattoria".to_string(),
            store: None,
            config: AppConfig::default(),
        }
    }

    pub fn with_players(mut self, players: Vec<&str>) -> Self {
        self.players = players.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_three_players(self) -> Self {
        self.with_players(vec!["Alice", "Bob", "Carol"])
    }

    pub fn with_numbered_players(mut self, count: usize) -> Self {
        self.players = (1..=count).map(|i| format!("Player {i:02}")).collect();
        self
    }

    pub fn with_store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn build(self) -> TestSetup {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryRecordStore::new()));
        let state = AppState::new(store, Arc::new(RandomIdGenerator), self.config);

        let mut players = Vec::new();
        for name in &self.players {
            players.push(state.roster.add_player(name).await.unwrap());
        }
        let restaurant = state
            .roster
            .add_restaurant(&self.restaurant, None)
            .await
            .unwrap();

        TestSetup {
            state,
            players,
            restaurant,
        }
    }
}
