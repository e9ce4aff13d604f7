use reviewlog_core::db::migrations::latest_version;
use reviewlog_core::db::open_db_in_memory;
use reviewlog_core::{
    CustomerRepository, ItemRepository, RepoError, ReviewRepository, SqliteCustomerRepository,
    SqliteItemRepository, SqliteReviewRepository,
};
use rusqlite::Connection;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let id = repo.create_customer("Ada").unwrap();

    let loaded = repo.get_customer(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Ada");
}

#[test]
fn get_missing_customer_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    assert!(repo.get_customer(42).unwrap().is_none());
}

#[test]
fn rename_existing_customer() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let id = repo.create_customer("Ada").unwrap();
    repo.rename_customer(id, "Ada L.").unwrap();

    let loaded = repo.get_customer(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Ada L.");
}

#[test]
fn rename_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let err = repo.rename_customer(42, "nobody").unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "customer",
            id: 42
        }
    ));
}

#[test]
fn list_customers_is_ordered_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let first = repo.create_customer("Ada").unwrap();
    let second = repo.create_customer("Grace").unwrap();

    let listed = repo.list_customers().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first);
    assert_eq!(listed[1].id, second);
}

#[test]
fn delete_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let err = repo.delete_customer(42).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "customer",
            id: 42
        }
    ));
}

#[test]
fn deleting_customer_cascades_to_its_reviews_only() {
    let conn = open_db_in_memory().unwrap();
    let customers = SqliteCustomerRepository::try_new(&conn).unwrap();
    let items = SqliteItemRepository::try_new(&conn).unwrap();
    let reviews = SqliteReviewRepository::try_new(&conn).unwrap();

    let ada = customers.create_customer("Ada").unwrap();
    let grace = customers.create_customer("Grace").unwrap();
    let widget = items.create_item("Widget", 9.99).unwrap();
    let ada_review = reviews.create_review(ada, widget, "Great").unwrap();
    let grace_review = reviews.create_review(grace, widget, "Fine").unwrap();

    customers.delete_customer(ada).unwrap();

    assert!(reviews.get_review(ada_review).unwrap().is_none());
    assert!(reviews.get_review(grace_review).unwrap().is_some());
    assert!(items.get_item(widget).unwrap().is_some());
    assert!(customers.get_customer(grace).unwrap().is_some());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteCustomerRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_customers_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCustomerRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("customers"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_customers_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE customers (id INTEGER PRIMARY KEY);")
        .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCustomerRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "customers",
            column: "name"
        })
    ));
}
