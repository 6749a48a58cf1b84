use chrono::{TimeZone, Utc};

use envelope_core::{AssignedLookup, Budget, Direction, Flow, Month, Target, TransactOptions};

fn m(token: &str) -> Month {
    token.parse().expect("valid month token")
}

fn millis(year: i32, month: u32, day: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .unwrap()
        .timestamp_millis()
}

fn inflow(account_id: &str, amount: f64, date: i64, description: &str) -> TransactOptions {
    TransactOptions {
        account_id: account_id.to_string(),
        flow: Flow::Inflow,
        amount,
        description: description.to_string(),
        date: Some(date),
        id: None,
    }
}

fn outflow(
    account_id: &str,
    category_id: &str,
    amount: f64,
    date: i64,
    description: &str,
) -> TransactOptions {
    TransactOptions {
        account_id: account_id.to_string(),
        flow: Flow::Outflow {
            category_id: category_id.to_string(),
        },
        amount,
        description: description.to_string(),
        date: Some(date),
        id: None,
    }
}

#[test]
fn category_tree_add_and_delete() {
    let mut budget = Budget::new();
    let group_id = budget.add_category_group("Subscriptions", None).expect("add group");
    let cat_id = budget.add_category(&group_id, "Spotify", None).expect("add category");

    let document = budget.to_document();
    assert_eq!(document.category_groups.len(), 1);
    assert_eq!(document.category_groups[0].name, "Subscriptions");
    assert_eq!(document.category_groups[0].categories.len(), 1);
    assert_eq!(document.category_groups[0].categories[0].name, "Spotify");

    budget.delete_category(&cat_id);
    assert!(budget.to_document().category_groups[0].categories.is_empty());

    budget.delete_category_group(&group_id);
    assert!(budget.to_document().category_groups.is_empty());
}

#[test]
fn deleting_a_group_cascades_to_its_categories() {
    let mut budget = Budget::new();
    let group_id = budget.add_category_group("Fixed", None).unwrap();
    let cat_id = budget.add_category(&group_id, "Rent", None).unwrap();

    budget.delete_category_group(&group_id);
    assert!(budget.get_category(&cat_id).is_none());
    assert!(budget.get_category_group(&group_id).is_none());
}

#[test]
fn creators_return_none_on_collision_or_missing_parent() {
    let mut budget = Budget::new();
    let group_id = budget.add_category_group("Fixed", Some("g-1".into())).unwrap();
    assert_eq!(budget.add_category_group("Other", Some("g-1".into())), None);

    let cat_id = budget.add_category(&group_id, "Rent", Some("c-1".into())).unwrap();
    assert_eq!(budget.add_category(&group_id, "Food", Some("c-1".into())), None);
    assert_eq!(budget.add_category("no-such-group", "Food", None), None);

    let account_id = budget.add_account("Checking", Some("a-1".into())).unwrap();
    assert_eq!(budget.add_account("Savings", Some("a-1".into())), None);

    let txn_id = budget
        .transact(TransactOptions {
            account_id: account_id.clone(),
            flow: Flow::Inflow,
            amount: 10.0,
            description: "first".into(),
            date: Some(millis(2022, 1, 1)),
            id: Some("t-1".into()),
        })
        .unwrap();
    assert_eq!(txn_id, "t-1");
    assert_eq!(
        budget.transact(TransactOptions {
            account_id,
            flow: Flow::Inflow,
            amount: 10.0,
            description: "dup id".into(),
            date: None,
            id: Some("t-1".into()),
        }),
        None
    );

    // mutations against missing entities are silent no-ops
    budget.assign(&cat_id, m("2022-1"), 10.0);
    budget.assign("no-such-category", m("2022-1"), 10.0);
    budget.delete_transaction("no-such-transaction");
    budget.delete_category("no-such-category");
}

#[test]
fn transact_rejects_unknown_accounts() {
    let mut budget = Budget::new();
    assert_eq!(
        budget.transact(inflow("no-such-account", 10.0, millis(2022, 1, 1), "stray")),
        None
    );
    assert!(budget.to_document().accounts.is_empty());
}

#[test]
fn assignments_carry_forward() {
    let mut budget = Budget::new();
    let group_id = budget.add_category_group("Subscriptions", None).unwrap();
    let cat_id = budget.add_category(&group_id, "Spotify", None).unwrap();

    budget.assign(&cat_id, m("2010-2"), 10.0);
    budget.assign(&cat_id, m("2023-3"), 100.0);

    assert_eq!(budget.get_assigned(&cat_id, m("2023-3"), AssignedLookup::Exact), Some(100.0));
    assert_eq!(budget.get_assigned(&cat_id, m("2023-5"), AssignedLookup::Exact), None);
    assert_eq!(budget.get_assigned(&cat_id, m("2035-12"), AssignedLookup::Latest), Some(100.0));
    assert_eq!(
        budget.get_assigned(&cat_id, m("2035-12"), AssignedLookup::CumulativeToDate),
        Some(110.0)
    );
    assert_eq!(budget.get_assigned(&cat_id, m("2020-1"), AssignedLookup::Latest), Some(10.0));

    // months before the first entry have no value in effect
    assert_eq!(budget.get_assigned(&cat_id, m("2009-12"), AssignedLookup::Latest), None);

    // with no inflow recorded the assign limit mirrors the cumulative sum
    assert_eq!(budget.get_assign_limit(m("2023-2")), -10.0);
    assert_eq!(budget.get_assign_limit(m("2023-3")), -110.0);
}

#[test]
fn targets_carry_forward_and_delete_individually() {
    let mut budget = Budget::new();
    let group_id = budget.add_category_group("Subscriptions", None).unwrap();
    let cat_id = budget.add_category(&group_id, "Spotify", None).unwrap();

    let target = Target::EveryXMonth {
        amount: 100.0,
        every: 1,
        day_of_month: 23,
    };
    let target2 = Target::EveryXMonth {
        amount: 1000.0,
        every: 1,
        day_of_month: 23,
    };

    budget.set_target(&cat_id, m("2023-3"), target.clone());
    budget.set_target(&cat_id, m("2023-10"), target2.clone());
    budget.set_target(&cat_id, m("2024-10"), target.clone());

    assert_eq!(budget.get_target(&cat_id, m("2023-3")), Some(&target));
    assert_eq!(budget.get_target(&cat_id, m("2023-12")), Some(&target2));
    assert_eq!(budget.get_target(&cat_id, m("2023-2")), None);

    // removing one entry re-exposes the carried-forward predecessor
    budget.delete_target(&cat_id, m("2024-10"));
    assert_eq!(budget.get_target(&cat_id, m("2024-10")), Some(&target2));
}

#[test]
fn balances_scope_to_accounts() {
    let mut budget = Budget::new();
    let checking = budget.add_account("Checking", None).unwrap();
    let savings = budget.add_account("Savings", None).unwrap();

    budget.transact(inflow(&checking, 100.0, millis(2021, 11, 30), "Allowance given by mom"));
    budget.transact(inflow(&savings, 100.0, millis(2022, 3, 9), "Allowance given by dad"));

    assert_eq!(budget.get_balance(m("2022-1"), None), 100.0);
    assert_eq!(budget.get_balance(m("2022-2"), None), 100.0);
    assert_eq!(budget.get_balance(m("2022-2"), Some(&checking)), 100.0);
    assert_eq!(budget.get_balance(m("2022-2"), Some(&savings)), 0.0);
    assert_eq!(budget.get_balance(m("2022-12"), None), 200.0);
    assert_eq!(
        budget.sum_by_direction(Direction::Inflow, m("2022-12"), Some(&savings)),
        100.0
    );
}

#[test]
fn deleting_a_transaction_reverses_the_balance() {
    let mut budget = Budget::new();
    let account = budget.add_account("Checking", None).unwrap();
    let group_id = budget.add_category_group("Fixed", None).unwrap();
    let cat_id = budget.add_category(&group_id, "Rent", None).unwrap();

    let inflow_id = budget
        .transact(inflow(&account, 75.0, millis(2022, 5, 1), "pay"))
        .unwrap();
    assert_eq!(budget.get_balance(m("2022-5"), None), 75.0);
    budget.delete_transaction(&inflow_id);
    assert_eq!(budget.get_balance(m("2022-5"), None), 0.0);

    let outflow_id = budget
        .transact(outflow(&account, &cat_id, 75.0, millis(2022, 5, 1), "rent"))
        .unwrap();
    assert_eq!(budget.get_balance(m("2022-5"), None), -75.0);
    budget.delete_transaction(&outflow_id);
    assert_eq!(budget.get_balance(m("2022-5"), None), 0.0);
}

#[test]
fn subscriptions_scenario_end_to_end() {
    let mut budget = Budget::new();
    let group_id = budget.add_category_group("Subscriptions", None).unwrap();
    let cat_id = budget.add_category(&group_id, "Spotify", None).unwrap();
    let checking = budget.add_account("Checking", None).unwrap();
    let savings = budget.add_account("Savings", None).unwrap();

    budget.transact(inflow(&checking, 100.0, millis(2021, 11, 30), "Allowance given by mom"));
    assert_eq!(budget.get_balance(m("2022-1"), None), 100.0);

    budget.transact(inflow(&savings, 100.0, millis(2022, 3, 9), "Allowance given by dad"));
    assert_eq!(budget.get_balance(m("2022-2"), None), 100.0);
    assert_eq!(budget.get_balance(m("2022-12"), None), 200.0);

    budget.assign(&cat_id, m("2021-11"), 50.0);
    assert_eq!(budget.get_assign_limit(m("2021-11")), 50.0);
    assert_eq!(budget.get_assign_limit(m("2023-1")), 150.0);
    assert_eq!(budget.get_assign_limit(m("2024-1")), 150.0);
    assert_eq!(budget.get_available(&cat_id, m("2021-11")), 50.0);

    let outflow_id = budget
        .transact(outflow(
            &checking,
            &cat_id,
            100_000.0,
            millis(2022, 10, 9),
            "Spotify 1000-year-subscription",
        ))
        .unwrap();

    assert_eq!(budget.get_available(&cat_id, m("2022-11")), -99_950.0);
    assert_eq!(budget.get_balance(m("2022-10"), None), -99_800.0);
    assert!(budget.get_transactions_of_category("random-id-lol", m("2022-10")).is_empty());
    assert_eq!(budget.get_transactions_of_category(&cat_id, m("2022-10")).len(), 1);

    budget.delete_transaction(&outflow_id);
    assert_eq!(budget.get_balance(m("2022-10"), None), 200.0);
}
