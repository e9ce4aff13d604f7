use reviewlog_core::db::open_db_in_memory;
use reviewlog_core::{
    CustomerService, ItemRepository, RepoError, ReviewRepository, SqliteCustomerRepository,
    SqliteItemRepository, SqliteReviewRepository,
};

#[test]
fn reviewed_items_projects_through_current_reviews() {
    let conn = open_db_in_memory().unwrap();
    let items = SqliteItemRepository::try_new(&conn).unwrap();
    let reviews = SqliteReviewRepository::try_new(&conn).unwrap();
    let service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let ada = service.create_customer("Ada").unwrap();
    let widget = items.create_item("Widget", 9.99).unwrap();
    let gadget = items.create_item("Gadget", 24.50).unwrap();
    let widget_review = reviews.create_review(ada, widget, "Great").unwrap();
    reviews.create_review(ada, gadget, "Meh").unwrap();

    let reviewed = service.reviewed_items(ada).unwrap();
    let reviewed_ids: Vec<_> = reviewed.iter().map(|item| item.id).collect();
    assert_eq!(reviewed_ids, vec![widget, gadget]);

    reviews.delete_review(widget_review).unwrap();

    let reviewed_after = service.reviewed_items(ada).unwrap();
    let reviewed_ids_after: Vec<_> = reviewed_after.iter().map(|item| item.id).collect();
    assert_eq!(reviewed_ids_after, vec![gadget]);
}

#[test]
fn reviewed_items_yields_one_entry_per_review() {
    let conn = open_db_in_memory().unwrap();
    let items = SqliteItemRepository::try_new(&conn).unwrap();
    let reviews = SqliteReviewRepository::try_new(&conn).unwrap();
    let service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let ada = service.create_customer("Ada").unwrap();
    let widget = items.create_item("Widget", 9.99).unwrap();
    reviews.create_review(ada, widget, "Great").unwrap();
    reviews.create_review(ada, widget, "Bought another").unwrap();

    let reviewed = service.reviewed_items(ada).unwrap();
    assert_eq!(reviewed.len(), 2);
    assert!(reviewed.iter().all(|item| item.id == widget));
}

#[test]
fn add_reviewed_item_creates_exactly_one_review_with_empty_comment() {
    let conn = open_db_in_memory().unwrap();
    let items = SqliteItemRepository::try_new(&conn).unwrap();
    let reviews = SqliteReviewRepository::try_new(&conn).unwrap();
    let service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let ada = service.create_customer("Ada").unwrap();
    let widget = items.create_item("Widget", 9.99).unwrap();

    let review_id = service.add_reviewed_item(ada, widget).unwrap();

    let all = reviews.list_reviews().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, review_id);
    assert_eq!(all[0].comment, "");
    assert_eq!(all[0].customer_id, ada);
    assert_eq!(all[0].item_id, widget);

    let reviewed = service.reviewed_items(ada).unwrap();
    assert_eq!(reviewed.len(), 1);
    assert_eq!(reviewed[0].id, widget);
}

#[test]
fn add_reviewed_item_with_missing_item_fails() {
    let conn = open_db_in_memory().unwrap();
    let service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let ada = service.create_customer("Ada").unwrap();

    let err = service.add_reviewed_item(ada, 42).unwrap_err();
    assert!(matches!(err, RepoError::ForeignKeyViolation { .. }));
    assert!(service.reviewed_items(ada).unwrap().is_empty());
}

#[test]
fn reviewed_items_is_empty_for_customer_without_reviews() {
    let conn = open_db_in_memory().unwrap();
    let service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let ada = service.create_customer("Ada").unwrap();

    assert!(service.reviewed_items(ada).unwrap().is_empty());
}
