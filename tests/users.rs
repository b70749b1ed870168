mod common;

use color_eyre::Result;
use pretty_assertions::assert_eq;
use user_registry::{config::Config, registry::UserRegistry, user::User};

use common::*;

#[test]
fn users_empty_if_no_user_added() {
    let registry = registry();

    assert!(registry.users().is_empty(), "Expected empty list");
}

#[test]
fn users_size_if_users_added() {
    let mut registry = registry();
    registry.add([alex(), john()]);

    assert_eq!(registry.users().len(), 2);
}

#[test]
fn users_keep_insertion_order() {
    let users = (0..20)
        .map(|id| User::new(id, format!("user-{id}"), "pw"))
        .collect::<Vec<_>>();

    let mut registry = registry();
    registry.add(users[..10].to_vec());
    registry.add(users[10..].to_vec());

    assert_eq!(registry.users(), users.as_slice());
}

#[test]
fn users_are_mapped_by_id() {
    let mut registry = registry();
    registry.add([alex(), john()]);

    let users_by_id = registry.users_mapped_by_id();

    assert_eq!(users_by_id.len(), 2);
    assert_eq!(users_by_id.get(&alex().id()), Some(&alex()));
    assert_eq!(users_by_id.get(&john().id()), Some(&john()));
}

#[test]
fn last_added_user_wins_shared_id() {
    let first = User::new(5, "First", "a");
    let second = User::new(5, "Second", "b");
    let third = User::new(5, "Third", "c");

    let mut registry = registry();
    registry.add([first, second]);
    registry.add([john(), third.clone()]);

    let users_by_id = registry.users_mapped_by_id();

    assert_eq!(registry.users().len(), 4);
    assert_eq!(users_by_id.len(), 2);
    assert_eq!(users_by_id[&5], third);
}

#[test]
fn changing_the_mapping_does_not_change_the_registry() -> Result<()> {
    let mut registry = registry();
    registry.add([alex(), john()]);

    let mut users_by_id = registry.users_mapped_by_id();
    users_by_id.clear();
    users_by_id.insert(3, User::new(3, "Mallory", "evil"));

    assert_eq!(registry.users(), &[alex(), john()]);
    assert_eq!(registry.login(Some("Mallory"), Some("evil"))?, None);
    assert_eq!(registry.login(Some("John"), Some("pass"))?, Some(john()));

    Ok(())
}

#[test]
fn registry_from_config() -> Result<()> {
    let config = Config::deserialize(&Config::example().serialize_pretty())?;

    let registry = UserRegistry::from_config(&config);

    assert_eq!(registry.users(), &[alex(), john()]);
    assert_eq!(
        registry.login(Some("Alexander"), Some("password"))?,
        Some(alex())
    );

    Ok(())
}
