use std::cmp::Ordering;

use super::models::{Group, Player, Restaurant};
use crate::store::{keys, CollectionRepository, Placement, StoredRecord};

pub type PlayerRepository = CollectionRepository<Player>;
pub type RestaurantRepository = CollectionRepository<Restaurant>;
pub type GroupRepository = CollectionRepository<Group>;

/// Case-insensitive ascending name order.
pub(crate) fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

impl StoredRecord for Player {
    const KEY: &'static str = keys::PLAYERS;
    const ENTITY: &'static str = "Player";
    const PLACEMENT: Placement = Placement::Append;

    fn record_id(&self) -> uuid::Uuid {
        self.id
    }

    fn sort(items: &mut [Self]) {
        items.sort_by(|a, b| compare_names(&a.name, &b.name));
    }
}

impl StoredRecord for Restaurant {
    const KEY: &'static str = keys::RESTAURANTS;
    const ENTITY: &'static str = "Restaurant";
    const PLACEMENT: Placement = Placement::Prepend;

    fn record_id(&self) -> uuid::Uuid {
        self.id
    }

    fn sort(items: &mut [Self]) {
        items.sort_by(|a, b| b.date_created.cmp(&a.date_created));
    }
}

impl StoredRecord for Group {
    const KEY: &'static str = keys::GROUPS;
    const ENTITY: &'static str = "Group";
    const PLACEMENT: Placement = Placement::Append;

    fn record_id(&self) -> uuid::Uuid {
        self.id
    }

    fn sort(items: &mut [Self]) {
        items.sort_by(|a, b| compare_names(&a.name, &b.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryRecordStore;
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    #[test]
    fn test_players_sort_case_insensitively() {
        let mut players = vec![
            Player::new("alice"),
            Player::new("CHARLIE"),
            Player::new("Bob"),
        ];
        Player::sort(&mut players);

        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "Bob", "CHARLIE"]);
    }

    #[test]
    fn test_restaurants_sort_newest_first() {
        let now = Utc::now();
        let mut old = Restaurant::new("Old");
        old.date_created = now - Duration::days(2);
        let mut middle = Restaurant::new("Middle");
        middle.date_created = now - Duration::days(1);
        let new = Restaurant::new("New");

        let mut restaurants = vec![old, new, middle];
        Restaurant::sort(&mut restaurants);

        let names: Vec<&str> = restaurants.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["New", "Middle", "Old"]);
    }

    #[tokio::test]
    async fn test_restaurant_repository_puts_new_entries_first() {
        let repo = RestaurantRepository::new(Arc::new(InMemoryRecordStore::new()));
        let mut first = Restaurant::new("First");
        first.date_created = Utc::now() - Duration::hours(1);
        repo.save(first).await.unwrap();
        repo.save(Restaurant::new("Second")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].name, "Second");
        assert_eq!(all[1].name, "First");
    }

    #[tokio::test]
    async fn test_group_repository_sorts_by_name() {
        let repo = GroupRepository::new(Arc::new(InMemoryRecordStore::new()));
        repo.save(Group::new("zeta", vec![])).await.unwrap();
        repo.save(Group::new("Alpha", vec![])).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].name, "Alpha");
        assert_eq!(all[1].name, "zeta");
    }
}
