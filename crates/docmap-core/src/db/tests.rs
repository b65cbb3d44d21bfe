use crate::{
    db::{
        DocumentStore, MemoryStore, Repository, RepositoryError, StoreConfig, StoreError,
        Timestamps,
    },
    traits::Entity,
    types::Timestamp,
    value::{Document, Value},
};
use docmap_derive::Entity;

#[derive(Clone, Debug, Default, PartialEq, Entity)]
#[entity(collection = "notes")]
struct Note {
    #[entity(id)]
    id: u64,
    body: String,
    #[entity(timestamps)]
    stamps: Timestamps,
}

#[derive(Clone, Debug, Default, PartialEq, Entity)]
struct Draft {
    #[entity(id)]
    id: Option<u64>,
    body: String,
}

#[derive(Clone, Debug, Default, PartialEq, Entity)]
struct Revision {
    #[entity(id)]
    id: u64,
    number: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Entity)]
#[entity(collection = "revised")]
struct Revised {
    #[entity(id)]
    id: u64,
    #[entity(flatten)]
    revision: Revision,
}

fn note(id: u64, body: &str) -> Note {
    Note {
        id,
        body: body.to_string(),
        stamps: Timestamps::default(),
    }
}

#[test]
fn touch_sets_created_once() {
    let mut stamps = Timestamps::default();

    stamps.touch(Timestamp::from_millis(1));
    stamps.touch(Timestamp::from_millis(2));

    assert_eq!(stamps.created_at, Some(Timestamp::from_millis(1)));
    assert_eq!(stamps.updated_at, Some(Timestamp::from_millis(2)));
}

#[test]
fn save_then_find_by_id() {
    let store = MemoryStore::new();
    let repo = Repository::<Note, _>::new(&store).expect("collection");
    assert_eq!(repo.collection(), "notes");

    let mut n = note(1, "hello");
    repo.save_at(&mut n, Timestamp::from_millis(100)).expect("save");

    let found = repo.find_by_id(&1_u64).expect("find").expect("present");
    assert_eq!(found, n);
    assert_eq!(found.stamps.created_at, Some(Timestamp::from_millis(100)));
    assert!(repo.find_by_id(&2_u64).expect("find").is_none());
}

#[test]
fn save_upserts_and_keeps_creation_time() {
    let store = MemoryStore::new();
    let repo = Repository::<Note, _>::new(&store).expect("collection");

    let mut n = note(1, "v1");
    repo.save_at(&mut n, Timestamp::from_millis(1)).expect("save");
    n.body = "v2".to_string();
    repo.save_at(&mut n, Timestamp::from_millis(5)).expect("save");

    assert_eq!(repo.count().expect("count"), 1);

    let found = repo.find_by_id(&1_u64).expect("find").expect("present");
    assert_eq!(found.body, "v2");
    assert_eq!(found.stamps.created_at, Some(Timestamp::from_millis(1)));
    assert_eq!(found.stamps.updated_at, Some(Timestamp::from_millis(5)));
}

#[test]
fn find_all_is_in_identity_order() {
    let store = MemoryStore::new();
    let repo = Repository::<Note, _>::new(&store).expect("collection");

    for id in [3_u64, 1, 2] {
        repo.save(&mut note(id, "x")).expect("save");
    }

    let ids = repo
        .find_all()
        .expect("find all")
        .into_iter()
        .map(|n| n.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn delete_by_id_and_delete_all() {
    let store = MemoryStore::new();
    let repo = Repository::<Note, _>::new(&store).expect("collection");
    for id in 1..=3_u64 {
        repo.save(&mut note(id, "x")).expect("save");
    }

    assert!(repo.delete_by_id(&2_u64).expect("delete"));
    assert!(!repo.delete_by_id(&2_u64).expect("delete again"));
    assert!(!repo.exists_by_id(&2_u64).expect("exists"));
    assert!(repo.exists_by_id(&3_u64).expect("exists"));

    assert_eq!(repo.delete_all().expect("delete all"), 2);
    assert_eq!(repo.count().expect("count"), 0);
}

#[test]
fn missing_collection_is_rejected() {
    let store = MemoryStore::new();

    let err = Repository::<Draft, _>::new(&store).err().expect("no collection");
    assert!(matches!(err, RepositoryError::MissingCollection(path) if path.ends_with("::Draft")));

    let repo = Repository::<Draft, _>::with_collection(&store, "drafts");
    assert_eq!(repo.collection(), "drafts");
}

#[test]
fn write_without_identity_is_rejected() {
    let store = MemoryStore::new();
    let repo = Repository::<Draft, _>::with_collection(&store, "drafts");

    let mut draft = Draft {
        id: None,
        body: "wip".to_string(),
    };
    let err = repo.save(&mut draft).expect_err("no identity");

    assert!(matches!(err, RepositoryError::MissingIdentity(_)));
    assert_eq!(store.count("drafts").expect("count"), 0);
}

#[test]
fn write_with_colliding_keys_is_rejected() {
    let store = MemoryStore::new();
    let repo = Repository::<Revised, _>::new(&store).expect("collection");

    let mut revised = Revised {
        id: 1,
        revision: Revision { id: 2, number: 3 },
    };
    let err = repo.save(&mut revised).expect_err("collision");

    assert!(matches!(err, RepositoryError::Map(ref map) if map.path.to_string() == "_id"));
    assert_eq!(store.count("revised").expect("count"), 0);
}

#[test]
fn collections_are_separate() {
    let store = MemoryStore::new();
    let notes = Repository::<Note, _>::new(&store).expect("collection");
    let archive = Repository::<Note, _>::with_collection(&store, "archive");

    notes.save(&mut note(1, "a")).expect("save");

    assert_eq!(notes.count().expect("count"), 1);
    assert_eq!(archive.count().expect("count"), 0);
    assert!(archive.find_by_id(&1_u64).expect("find").is_none());
}

#[test]
fn signed_and_unsigned_ids_address_the_same_document() {
    let store = MemoryStore::new();
    let doc: Document = [("_id", Value::Uint(9))].into_iter().collect();

    store.replace("c", &Value::Uint(9), &doc).expect("replace");

    assert!(store.find("c", &Value::Int(9)).expect("find").is_some());
}

#[test]
fn oversized_documents_are_rejected() {
    let store = MemoryStore::with_config(StoreConfig {
        max_document_bytes: 16,
    });
    let doc: Document = [("body", Value::Text("x".repeat(64)))].into_iter().collect();

    let err = store
        .replace("c", &Value::Uint(1), &doc)
        .expect_err("too large");

    assert!(matches!(
        err,
        StoreError::DocumentTooLarge { max_bytes: 16, .. }
    ));
    assert_eq!(store.count("c").expect("count"), 0);
}

#[test]
fn default_config_limit() {
    assert_eq!(
        MemoryStore::new().config().max_document_bytes,
        StoreConfig::DEFAULT_MAX_DOCUMENT_BYTES
    );
}

#[test]
fn timestamps_model_is_hand_written() {
    let names = Timestamps::MODEL
        .fields
        .iter()
        .map(|f| f.name)
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["created_at", "updated_at"]);
}
