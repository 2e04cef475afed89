use chrono::{Duration, Utc};
use uuid::Uuid;

use outlay_tracker::domain::types::Expense;
use outlay_tracker::error::TrackerError;
use outlay_tracker::usecase::expense::{
    CreateExpenseInput, CreateExpenseUseCase, DeleteExpenseUseCase, ListExpensesUseCase,
    UpdateExpenseInput, UpdateExpenseUseCase,
};

use crate::helpers::{MockExpenseRepo, test_expense};

#[tokio::test]
async fn should_insert_and_list_exact_values() {
    let repo = MockExpenseRepo::empty();

    let created = CreateExpenseUseCase { repo: repo.clone() }
        .execute(CreateExpenseInput {
            name: "Lunch".to_owned(),
            amount: 500.0,
        })
        .await
        .unwrap();

    let listed = ListExpensesUseCase { repo }.execute().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].name, "Lunch");
    assert_eq!(listed[0].amount, 500.0);
    assert_eq!(listed[0].created_at, created.created_at);
}

#[tokio::test]
async fn should_list_newest_first() {
    let now = Utc::now();
    let make = |name: &str, age_secs: i64| Expense {
        id: Uuid::now_v7(),
        name: name.to_owned(),
        amount: 10.0,
        created_at: now - Duration::seconds(age_secs),
    };
    let repo = MockExpenseRepo::new(vec![
        make("oldest", 300),
        make("newest", 0),
        make("middle", 60),
    ]);

    let listed = ListExpensesUseCase { repo }.execute().await.unwrap();
    let names: Vec<&str> = listed.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn should_reject_invalid_fields_on_create() {
    let repo = MockExpenseRepo::empty();
    let records_handle = repo.records_handle();
    let usecase = CreateExpenseUseCase { repo };

    for (name, amount) in [
        ("", 10.0),
        ("   ", 10.0),
        ("Lunch", -1.0),
        ("Lunch", f64::NAN),
        ("Lunch", f64::INFINITY),
    ] {
        let result = usecase
            .execute(CreateExpenseInput {
                name: name.to_owned(),
                amount,
            })
            .await;
        assert!(
            matches!(result, Err(TrackerError::InvalidExpense)),
            "expected InvalidExpense for ({name:?}, {amount})"
        );
    }

    assert!(records_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_update_in_place_preserving_id_and_created_at() {
    let original = test_expense("Lunch", 500.0);
    let repo = MockExpenseRepo::new(vec![original.clone()]);

    UpdateExpenseUseCase { repo: repo.clone() }
        .execute(
            original.id,
            UpdateExpenseInput {
                name: "Dinner".to_owned(),
                amount: 750.0,
            },
        )
        .await
        .unwrap();

    let listed = ListExpensesUseCase { repo }.execute().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, original.id);
    assert_eq!(listed[0].name, "Dinner");
    assert_eq!(listed[0].amount, 750.0);
    assert_eq!(listed[0].created_at, original.created_at);
}

#[tokio::test]
async fn should_fail_update_on_unknown_id() {
    let repo = MockExpenseRepo::new(vec![test_expense("Lunch", 500.0)]);
    let records_handle = repo.records_handle();

    let result = UpdateExpenseUseCase { repo }
        .execute(
            Uuid::now_v7(),
            UpdateExpenseInput {
                name: "Dinner".to_owned(),
                amount: 750.0,
            },
        )
        .await;

    assert!(matches!(result, Err(TrackerError::ExpenseNotFound)));
    let records = records_handle.lock().unwrap();
    assert_eq!(records.len(), 1, "a failed update must not create a record");
    assert_eq!(records[0].name, "Lunch");
}

#[tokio::test]
async fn should_reject_invalid_fields_on_update() {
    let original = test_expense("Lunch", 500.0);
    let repo = MockExpenseRepo::new(vec![original.clone()]);

    let result = UpdateExpenseUseCase { repo }
        .execute(
            original.id,
            UpdateExpenseInput {
                name: "".to_owned(),
                amount: 750.0,
            },
        )
        .await;

    assert!(matches!(result, Err(TrackerError::InvalidExpense)));
}

#[tokio::test]
async fn should_delete_and_not_list() {
    let doomed = test_expense("Lunch", 500.0);
    let repo = MockExpenseRepo::new(vec![doomed.clone(), test_expense("Bus fare", 80.0)]);

    DeleteExpenseUseCase { repo: repo.clone() }
        .execute(doomed.id)
        .await
        .unwrap();

    let listed = ListExpensesUseCase { repo }.execute().await.unwrap();
    assert!(listed.iter().all(|e| e.id != doomed.id));
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn should_ignore_delete_of_unknown_id() {
    let repo = MockExpenseRepo::new(vec![test_expense("Lunch", 500.0)]);
    let records_handle = repo.records_handle();

    DeleteExpenseUseCase { repo }
        .execute(Uuid::now_v7())
        .await
        .unwrap();

    assert_eq!(records_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_sum_amounts_across_the_list() {
    let repo = MockExpenseRepo::empty();
    let usecase = CreateExpenseUseCase { repo: repo.clone() };

    usecase
        .execute(CreateExpenseInput {
            name: "Lunch".to_owned(),
            amount: 500.0,
        })
        .await
        .unwrap();

    let listed = ListExpensesUseCase { repo }.execute().await.unwrap();
    let total: f64 = listed.iter().map(|e| e.amount).sum();
    assert_eq!(total, 500.0);
}

#[tokio::test]
async fn should_expose_raw_amounts_without_clamping() {
    // Threshold highlighting is a client concern; the service reports the
    // amount exactly as stored.
    let repo = MockExpenseRepo::empty();

    CreateExpenseUseCase { repo: repo.clone() }
        .execute(CreateExpenseInput {
            name: "New laptop".to_owned(),
            amount: 1500.0,
        })
        .await
        .unwrap();

    let listed = ListExpensesUseCase { repo }.execute().await.unwrap();
    assert_eq!(listed[0].amount, 1500.0);
}
