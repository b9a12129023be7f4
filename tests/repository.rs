use customer_registry::domain::customer::NewCustomer;
use customer_registry::domain::types::CustomerId;
use customer_registry::repository::{
    CustomerReader, CustomerSearchQuery, CustomerWriter, DieselRepository,
};

mod common;

fn seed(repo: &DieselRepository, names: &[(&str, &str)]) {
    for (firstname, surname) in names {
        repo.create_customer(&NewCustomer::new(*firstname, *surname))
            .unwrap();
    }
}

fn surnames(repo: &DieselRepository, query: CustomerSearchQuery) -> (usize, Vec<String>) {
    let (total, items) = repo.search_customers(query).unwrap();
    (total, items.into_iter().map(|c| c.surname).collect())
}

#[test]
fn test_customer_repository_crud() {
    let test_db = common::TestDb::new("test_customer_repository_crud.db");
    let repo = test_db.repository();

    let john = repo
        .create_customer(&NewCustomer::new("John", "Doe"))
        .unwrap();
    let jane = repo
        .create_customer(&NewCustomer::new("Jane", "Doe"))
        .unwrap();
    assert_ne!(john.id, jane.id);
    assert_eq!(john.firstname, "John");
    assert_eq!(john.surname, "Doe");

    let (total, items) = repo.search_customers(CustomerSearchQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert!(items.contains(&john));
    assert!(items.contains(&jane));

    assert!(repo.delete_customer(john.id).unwrap());
    assert!(!repo.delete_customer(john.id).unwrap());

    let (total_after, items_after) = repo.search_customers(CustomerSearchQuery::new()).unwrap();
    assert_eq!(total_after, 1);
    assert_eq!(items_after[0].id, jane.id);
}

#[test]
fn test_delete_unknown_id_leaves_store_unchanged() {
    let test_db = common::TestDb::new("test_delete_unknown_id.db");
    let repo = test_db.repository();
    seed(&repo, &[("John", "Doe")]);

    assert!(!repo.delete_customer(CustomerId::generate()).unwrap());

    let (total, _) = repo.search_customers(CustomerSearchQuery::new()).unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_search_orders_by_surname_then_id() {
    let test_db = common::TestDb::new("test_search_orders.db");
    let repo = test_db.repository();
    seed(
        &repo,
        &[
            ("Zed", "Young"),
            ("Amy", "Adams"),
            ("John", "Doe"),
            ("Jane", "Doe"),
            ("Bob", "Brown"),
        ],
    );

    let (total, items) = repo.search_customers(CustomerSearchQuery::new()).unwrap();
    assert_eq!(total, 5);
    let names: Vec<_> = items.iter().map(|c| c.surname.as_str()).collect();
    assert_eq!(names, ["Adams", "Brown", "Doe", "Doe", "Young"]);

    // Equal surnames fall back to ascending id.
    let does: Vec<_> = items.iter().filter(|c| c.surname == "Doe").collect();
    assert!(does[0].id.to_string() < does[1].id.to_string());
}

#[test]
fn test_search_filters_on_firstname_or_surname() {
    let test_db = common::TestDb::new("test_search_filters.db");
    let repo = test_db.repository();
    seed(
        &repo,
        &[("John", "Doe"), ("Jane", "Doe"), ("Johnny", "Walker"), ("Ann", "Johnson")],
    );

    let (total, items) = repo
        .search_customers(CustomerSearchQuery::new().search("John"))
        .unwrap();
    assert_eq!(total, 3);
    for item in &items {
        assert!(item.firstname.contains("John") || item.surname.contains("John"));
    }

    let (total, items) = repo
        .search_customers(CustomerSearchQuery::new().search("Doe").paginate(0, 10))
        .unwrap();
    assert_eq!(total, 2);
    let mut firstnames: Vec<_> = items.into_iter().map(|c| c.firstname).collect();
    firstnames.sort();
    assert_eq!(firstnames, ["Jane", "John"]);

    let (total, _) = repo
        .search_customers(CustomerSearchQuery::new().search("nobody"))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_search_matches_literal_substrings() {
    let test_db = common::TestDb::new("test_search_literal.db");
    let repo = test_db.repository();
    seed(&repo, &[("John", "Doe"), ("Mia", "100%_Real")]);

    // Wildcards are matched literally.
    let (total, found) = surnames(&repo, CustomerSearchQuery::new().search("%_"));
    assert_eq!(total, 1);
    assert_eq!(found, ["100%_Real"]);

    let (total, _) = surnames(&repo, CustomerSearchQuery::new().search("_"));
    assert_eq!(total, 1);

    let (total, _) = surnames(&repo, CustomerSearchQuery::new().search("J%n"));
    assert_eq!(total, 0);
}

#[test]
fn test_search_is_case_sensitive() {
    let test_db = common::TestDb::new("test_search_case.db");
    let repo = test_db.repository();
    seed(&repo, &[("John", "Doe"), ("doe", "Smith")]);

    let (total, items) = repo
        .search_customers(CustomerSearchQuery::new().search("doe").paginate(0, 10))
        .unwrap();
    assert_eq!(total, 1);
    for item in &items {
        assert!(item.firstname.contains("doe") || item.surname.contains("doe"));
    }
    assert_eq!(items[0].surname, "Smith");

    let (total, found) = surnames(&repo, CustomerSearchQuery::new().search("Doe"));
    assert_eq!(total, 1);
    assert_eq!(found, ["Doe"]);

    let (total, _) = surnames(&repo, CustomerSearchQuery::new().search("JOHN"));
    assert_eq!(total, 0);
}

#[test]
fn test_search_pagination_windows() {
    let test_db = common::TestDb::new("test_search_pagination.db");
    let repo = test_db.repository();
    seed(
        &repo,
        &[
            ("A", "Adams"),
            ("B", "Brown"),
            ("C", "Clark"),
            ("D", "Davis"),
            ("E", "Evans"),
        ],
    );

    assert_eq!(
        surnames(&repo, CustomerSearchQuery::new().paginate(0, 2)),
        (5, vec!["Adams".to_string(), "Brown".to_string()])
    );
    assert_eq!(
        surnames(&repo, CustomerSearchQuery::new().paginate(2, 2)),
        (5, vec!["Evans".to_string()])
    );

    // Past the last page.
    assert_eq!(
        surnames(&repo, CustomerSearchQuery::new().paginate(3, 2)),
        (5, Vec::new())
    );

    // Zero sized page.
    assert_eq!(
        surnames(&repo, CustomerSearchQuery::new().paginate(0, 0)),
        (5, Vec::new())
    );

    // Huge page index must not overflow the offset.
    assert_eq!(
        surnames(&repo, CustomerSearchQuery::new().paginate(usize::MAX, 2)),
        (5, Vec::new())
    );
}
