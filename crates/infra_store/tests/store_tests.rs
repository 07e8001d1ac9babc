//! Tests for the JSON store and repository

use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use core_kernel::{Identified, Repository, RepositoryError};
use infra_store::{JsonRepository, JsonStore, StoreError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Gadget {
    id: String,
    name: String,
}

impl Identified for Gadget {
    const ENTITY: &'static str = "Gadget";

    fn id(&self) -> &str {
        &self.id
    }
}

fn gadget(id: &str, name: &str) -> Gadget {
    Gadget {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn repository(dir: &TempDir) -> JsonRepository<Gadget> {
    JsonRepository::open(dir.path().join("gadgets.json")).unwrap()
}

mod store {
    use super::*;

    #[test]
    fn test_open_creates_empty_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("items.json");

        let store = JsonStore::open(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert!(store.load::<Gadget>().unwrap().is_empty());
    }

    #[test]
    fn test_open_keeps_existing_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, r#"[{"id": "g1", "name": "Lamp"}]"#).unwrap();

        let store = JsonStore::open(&path).unwrap();
        assert_eq!(store.load::<Gadget>().unwrap(), vec![gadget("g1", "Lamp")]);
    }

    #[test]
    fn test_malformed_document_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonStore::open(&path).unwrap();
        let err = store.load::<Gadget>().unwrap_err();

        assert!(matches!(err, StoreError::Malformed { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path().join("items.json")).unwrap();

        store.save(&[gadget("g1", "Lamp")]).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains('\n'));
        assert!(contents.contains("\"name\": \"Lamp\""));
    }
}

mod repository {
    use super::*;

    #[test]
    fn test_add_then_get() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        let added = repo.add(gadget("g1", "Lamp")).unwrap();

        assert_eq!(added, gadget("g1", "Lamp"));
        assert_eq!(repo.get("g1").unwrap(), gadget("g1", "Lamp"));
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        repo.add(gadget("b", "Second")).unwrap();
        repo.add(gadget("a", "First")).unwrap();

        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        repo.add(gadget("g1", "Lamp")).unwrap();

        let err = repo.add(gadget("g1", "Other")).unwrap_err();

        assert!(matches!(err, RepositoryError::DuplicateId { entity: "Gadget", .. }));
        assert_eq!(err.to_string(), "Gadget with id 'g1' already exists");
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = repository(&dir).get("nope").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Gadget with id 'nope' does not exist");
    }

    #[test]
    fn test_delete_removes_only_matching_record() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        repo.add(gadget("g1", "Lamp")).unwrap();
        repo.add(gadget("g2", "Desk")).unwrap();

        repo.delete("g1").unwrap();

        assert_eq!(repo.list().unwrap(), vec![gadget("g2", "Desk")]);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(repository(&dir).delete("g1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        repository(&dir).add(gadget("g1", "Lamp")).unwrap();

        assert_eq!(repository(&dir).get("g1").unwrap().name, "Lamp");
    }

    #[test]
    fn test_storage_errors_map_to_repository_errors() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        std::fs::write(repo.store().path(), "42").unwrap();

        let err = repo.list().unwrap_err();
        assert!(matches!(err, RepositoryError::Storage { .. }));
    }
}
