//! Controller Flow Tests
//!
//! Full refresh cycles against the in-memory database.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::{json, Map, Value};

    use crate::controller::{ItemService, ListState};
    use crate::database::{Database, MemoryDatabase, Reference, Snapshot};
    use crate::domain::{DomainError, DomainResult, ItemForm};
    use crate::repository::Repository;

    fn seeded(items: Value) -> ItemService<MemoryDatabase> {
        let db = MemoryDatabase::with_data(json!({ "items": items }));
        ItemService::new(db, Reference::new("items"))
    }

    fn form(name: &str) -> ItemForm {
        ItemForm {
            name: name.to_string(),
            description: format!("{} description", name),
        }
    }

    async fn refresh<D: Database>(service: &ItemService<D>, state: &mut ListState) {
        let req = state.begin_fetch();
        let result = service.fetch_page(req.window).await;
        state.finish_fetch(req.ticket, result);
    }

    fn ids(state: &ListState) -> Vec<&str> {
        state.items.iter().map(|row| row.id.as_str()).collect()
    }

    /// Every call fails as if the network were down
    struct OfflineDatabase;

    #[async_trait(?Send)]
    impl Database for OfflineDatabase {
        async fn get(&self, _: &Reference) -> DomainResult<Option<Value>> {
            Err(DomainError::Network("offline".to_string()))
        }
        async fn limit_to_last(&self, _: &Reference, _: usize) -> DomainResult<Vec<Snapshot>> {
            Err(DomainError::Network("offline".to_string()))
        }
        async fn count_children(&self, _: &Reference) -> DomainResult<usize> {
            Err(DomainError::Network("offline".to_string()))
        }
        async fn push(&self, _: &Reference, _: Value) -> DomainResult<String> {
            Err(DomainError::Network("offline".to_string()))
        }
        async fn update(&self, _: &Reference, _: Map<String, Value>) -> DomainResult<()> {
            Err(DomainError::Network("offline".to_string()))
        }
        async fn remove(&self, _: &Reference) -> DomainResult<()> {
            Err(DomainError::Network("offline".to_string()))
        }
    }

    /// Reads pass through; writes are refused like a read-only rule set
    struct ReadOnlyDatabase(MemoryDatabase);

    fn denied() -> DomainError {
        DomainError::Remote(401, "Permission denied".to_string())
    }

    #[async_trait(?Send)]
    impl Database for ReadOnlyDatabase {
        async fn get(&self, reference: &Reference) -> DomainResult<Option<Value>> {
            self.0.get(reference).await
        }
        async fn limit_to_last(&self, reference: &Reference, limit: usize) -> DomainResult<Vec<Snapshot>> {
            self.0.limit_to_last(reference, limit).await
        }
        async fn count_children(&self, reference: &Reference) -> DomainResult<usize> {
            self.0.count_children(reference).await
        }
        async fn push(&self, _: &Reference, _: Value) -> DomainResult<String> {
            Err(denied())
        }
        async fn update(&self, _: &Reference, _: Map<String, Value>) -> DomainResult<()> {
            Err(denied())
        }
        async fn remove(&self, _: &Reference) -> DomainResult<()> {
            Err(denied())
        }
    }

    #[tokio::test]
    async fn test_created_item_appears_after_refresh() {
        let service = ItemService::new(MemoryDatabase::new(), Reference::new("items"));
        let mut state = ListState::new();

        let id = service.create(form("Lamp")).await.unwrap();
        refresh(&service, &mut state).await;

        assert_eq!(ids(&state), vec![id.as_str()]);
        let row = &state.items[0];
        assert_eq!(row.name, "Lamp");
        assert_eq!(row.description, "Lamp description");
        assert!(!row.created_at.is_empty());
        assert!(row.updated_at.is_empty());
        assert_eq!(state.pagination.total_items(), 1);
    }

    #[tokio::test]
    async fn test_newest_first_ordering() {
        let service = seeded(json!({
            "k1": { "name": "a", "createdAt": 100 },
            "k2": { "name": "b", "createdAt": 300 },
            "k3": { "name": "c", "createdAt": 200 },
        }));
        let mut state = ListState::new();
        refresh(&service, &mut state).await;
        assert_eq!(ids(&state), vec!["k2", "k3", "k1"]);
    }

    #[tokio::test]
    async fn test_second_page_of_five() {
        let service = seeded(json!({
            "k1": { "name": "a", "createdAt": 10 },
            "k2": { "name": "b", "createdAt": 20 },
            "k3": { "name": "c", "createdAt": 30 },
            "k4": { "name": "d", "createdAt": 40 },
            "k5": { "name": "e", "createdAt": 50 },
        }));
        let mut state = ListState::new();
        state.set_items_per_page(2);
        state.go_to_page(1);

        let req = state.begin_fetch();
        assert_eq!(req.window.limit(), 4);
        let result = service.fetch_page(req.window).await;
        state.finish_fetch(req.ticket, result);

        // Window is k2..k5; newest-first positions 3-4 are k3, k2
        assert_eq!(ids(&state), vec!["k3", "k2"]);
        assert_eq!(state.pagination.total_items(), 5);
        assert_eq!(state.pagination.page_count(), 3);
    }

    #[tokio::test]
    async fn test_last_page_is_partial() {
        let service = seeded(json!({
            "k1": { "name": "a", "createdAt": 10 },
            "k2": { "name": "b", "createdAt": 20 },
            "k3": { "name": "c", "createdAt": 30 },
        }));
        let mut state = ListState::new();
        state.set_items_per_page(2);
        state.go_to_page(1);
        refresh(&service, &mut state).await;
        assert_eq!(ids(&state), vec!["k1"]);
    }

    #[tokio::test]
    async fn test_edit_then_refresh() {
        let service = seeded(json!({ "k1": { "name": "old", "description": "d", "createdAt": 10 } }));
        let mut state = ListState::new();
        refresh(&service, &mut state).await;

        let selected = state.items[0].clone();
        state.select(selected.clone());
        let mut edit = ItemForm::from_row(&selected);
        edit.name = "new".to_string();
        service.edit_row(&selected, edit).await.unwrap();
        state.clear_selection();
        refresh(&service, &mut state).await;

        let row = &state.items[0];
        assert_eq!(row.id, "k1");
        assert_eq!(row.name, "new");
        assert_eq!(row.description, "d");
        assert!(!row.updated_at.is_empty());

        let stored = service.repository().find_by_id("k1").await.unwrap().unwrap();
        assert_eq!(stored.created_at, Some(10));
    }

    #[tokio::test]
    async fn test_delete_while_loading() {
        let service = seeded(json!({
            "k1": { "name": "a", "createdAt": 10 },
            "k2": { "name": "b", "createdAt": 20 },
        }));
        let mut state = ListState::new();

        let in_flight = state.begin_fetch();
        let stale = service.fetch_page(in_flight.window).await;

        service.delete("k2").await.unwrap();
        refresh(&service, &mut state).await;
        assert_eq!(ids(&state), vec!["k1"]);

        // The older fetch resolves last and must not overwrite the newer one
        assert!(!state.finish_fetch(in_flight.ticket, stale));
        assert_eq!(ids(&state), vec!["k1"]);
        assert_eq!(state.pagination.total_items(), 1);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_delete_last_row_of_last_page_clamps() {
        let service = seeded(json!({
            "k1": { "name": "a", "createdAt": 10 },
            "k2": { "name": "b", "createdAt": 20 },
            "k3": { "name": "c", "createdAt": 30 },
        }));
        let mut state = ListState::new();
        state.set_items_per_page(2);
        state.go_to_page(1);
        refresh(&service, &mut state).await;

        service.delete("k1").await.unwrap();
        refresh(&service, &mut state).await;
        assert_eq!(state.pagination.current_page(), 1);

        refresh(&service, &mut state).await;
        assert_eq!(ids(&state), vec!["k3", "k2"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_surfaces_error() {
        let good = seeded(json!({ "k1": { "name": "a", "createdAt": 10 } }));
        let offline = ItemService::new(OfflineDatabase, Reference::new("items"));
        let mut state = ListState::new();

        refresh(&good, &mut state).await;
        refresh(&offline, &mut state).await;

        assert!(!state.loading);
        assert_eq!(ids(&state), vec!["k1"]);
        assert_eq!(state.error.as_deref(), Some("Network error: offline"));
    }

    #[tokio::test]
    async fn test_failed_write_is_reported() {
        let offline = ItemService::new(OfflineDatabase, Reference::new("items"));
        let err = offline.delete("k1").await.unwrap_err();
        assert_eq!(err, DomainError::Network("offline".to_string()));
        assert!(offline.create(form("x")).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_name_rejected_before_write() {
        let service = ItemService::new(MemoryDatabase::new(), Reference::new("items"));
        let err = service.create(ItemForm::blank()).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(service.repository().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_refused_delete_stays_reported_after_reload() {
        let db = MemoryDatabase::with_data(json!({
            "items": { "k1": { "name": "a", "createdAt": 10 } }
        }));
        let service = ItemService::new(ReadOnlyDatabase(db), Reference::new("items"));
        let mut state = ListState::new();
        refresh(&service, &mut state).await;

        // Same sequence as the delete command: report, then reload regardless
        let err = service.delete("k1").await.unwrap_err();
        state.report_error(&err);
        refresh(&service, &mut state).await;

        assert_eq!(ids(&state), vec!["k1"]);
        assert_eq!(state.error.as_deref(), Some("Store returned 401: Permission denied"));
    }

    #[tokio::test]
    async fn test_off_type_record_does_not_break_listing() {
        let service = seeded(json!({
            "k1": { "name": "good", "createdAt": 20 },
            "k2": { "name": 42, "createdAt": 10 },
            "k3": "not an item",
        }));
        let mut state = ListState::new();
        refresh(&service, &mut state).await;

        assert_eq!(state.error, None);
        assert_eq!(ids(&state), vec!["k1", "k2"]);
        assert_eq!(state.items[1].name, "42");
    }

    #[tokio::test]
    async fn test_refused_create_keeps_error_for_open_dialog() {
        let service = ItemService::new(ReadOnlyDatabase(MemoryDatabase::new()), Reference::new("items"));
        let mut state = ListState::new();

        let err = service.create(form("Lamp")).await.unwrap_err();
        state.report_error(&err);
        assert_eq!(state.error.as_deref(), Some("Store returned 401: Permission denied"));

        // A background refresh while the dialog is open must not hide it
        refresh(&service, &mut state).await;
        assert!(state.is_empty());
        assert_eq!(state.error.as_deref(), Some("Store returned 401: Permission denied"));
    }
}
