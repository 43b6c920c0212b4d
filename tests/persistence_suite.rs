use finex_core::{
    errors::TrackerError,
    ledger::{transaction::parse_iso_datetime, Transaction, TransactionKind},
    storage::{FailurePolicy, JsonStore, RecordStore, Repository, TRANSACTIONS_KEY},
};
use std::fs;
use tempfile::tempdir;

fn sample_txn(kind: TransactionKind, category: &str, amount: f64, date: &str) -> Transaction {
    Transaction::new(
        kind,
        category,
        amount,
        "integration sample",
        parse_iso_datetime(date).expect("valid date"),
    )
}

#[test]
fn repository_round_trips_through_the_json_store() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
    let repo = Repository::new(store);

    let added = repo
        .add_transaction(sample_txn(
            TransactionKind::Expense,
            "Food",
            250.0,
            "2024-03-05T12:00:00",
        ))
        .expect("add");
    assert_eq!(added.len(), 1);
    let id = added[0].id;

    // A second repository over the same directory sees the same state.
    let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("reopen store");
    let reopened = Repository::new(store);
    let listed = reopened.list_transactions().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].category, "Food");

    let after = reopened.delete_transaction(id).expect("delete");
    assert!(after.is_empty());
}

#[test]
fn documents_land_as_one_json_file_per_key() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
    let repo = Repository::new(store);

    repo.add_transaction(sample_txn(
        TransactionKind::Income,
        "Salary",
        2000.0,
        "2024-03-10T09:00:00",
    ))
    .expect("add");
    repo.update_budget_goal("Food", 650.0).expect("update goal");

    let records = temp.path().join("records");
    assert!(records.join("finex_transactions.json").exists());
    assert!(records.join("finex_budget_goals.json").exists());

    let raw = fs::read_to_string(records.join("finex_transactions.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("stored JSON is valid");
    assert_eq!(parsed.as_array().map(|rows| rows.len()), Some(1));
}

#[test]
fn goals_survive_reopen_and_keep_defaults_for_untouched_categories() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
    let repo = Repository::new(store);

    let goals = repo
        .update_budget_goal("Entertainment", 275.0)
        .expect("update");
    assert_eq!(goals.get("Entertainment"), Some(275.0));

    let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("reopen store");
    let reopened = Repository::new(store);
    let goals = reopened.budget_goals().expect("goals");
    assert_eq!(goals.get("Entertainment"), Some(275.0));
    assert_eq!(goals.get("Bills"), Some(1000.0));
}

#[test]
fn a_corrupted_document_on_disk_degrades_or_propagates_by_policy() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
    store
        .put(TRANSACTIONS_KEY, "{{ definitely not json")
        .expect("seed corruption");

    let soft = Repository::new(JsonStore::new(Some(temp.path().to_path_buf())).unwrap());
    assert!(soft.list_transactions().expect("degraded").is_empty());

    let loud = Repository::with_policy(
        JsonStore::new(Some(temp.path().to_path_buf())).unwrap(),
        FailurePolicy::FailLoud,
    );
    assert!(matches!(
        loud.list_transactions(),
        Err(TrackerError::Serde(_))
    ));
}

#[test]
fn insertion_order_is_preserved_across_saves() {
    let temp = tempdir().unwrap();
    let repo = Repository::new(JsonStore::new(Some(temp.path().to_path_buf())).unwrap());

    for (amount, date) in [
        (10.0, "2024-01-05T08:00:00"),
        (20.0, "2024-01-02T08:00:00"),
        (30.0, "2024-01-09T08:00:00"),
    ] {
        repo.add_transaction(sample_txn(TransactionKind::Expense, "Other", amount, date))
            .expect("add");
    }

    let listed = repo.list_transactions().expect("list");
    let amounts: Vec<f64> = listed.iter().map(|t| t.amount).collect();
    assert_eq!(
        amounts,
        vec![10.0, 20.0, 30.0],
        "insertion order, not date order"
    );
}
