//! Integration tests for registration, login and the acting user.

mod helpers;

use vault_core::error::ErrorKind;
use vault_core::traits::persistence::PersistenceAdapter;
use vault_core::types::UserId;

#[tokio::test]
async fn test_register_twice_fails() {
    let mut auth = helpers::open_auth(helpers::memory_persistence().await).await;

    auth.register("a@x.com", "secret1", "Alice").await.unwrap();
    let err = auth
        .register("a@x.com", "secret2", "Impostor")
        .await
        .unwrap_err();

    assert!(err.is(ErrorKind::Conflict));
    assert_eq!(auth.current_user().map(|u| u.name.as_str()), Some("Alice"));
}

#[tokio::test]
async fn test_login_right_and_wrong_password() {
    let mut auth = helpers::open_auth(helpers::memory_persistence().await).await;
    auth.register("a@x.com", "secret1", "Alice").await.unwrap();
    auth.logout().await.unwrap();

    let err = auth.login("a@x.com", "not-it").await.unwrap_err();
    assert!(err.is(ErrorKind::Authentication));
    assert!(auth.current_user().is_none());

    let user = auth.login("a@x.com", "secret1").await.unwrap();
    assert_eq!(user.email, "a@x.com");
}

#[tokio::test]
async fn test_password_is_not_stored_in_plaintext() {
    let persistence = helpers::memory_persistence().await;
    let mut auth = helpers::open_auth(persistence.clone()).await;
    auth.register("a@x.com", "secret1", "Alice").await.unwrap();

    let raw = persistence.get("vault_users").await.unwrap().unwrap();
    assert!(!raw.contains("secret1"));
    assert!(raw.contains("$argon2id$"));
}

#[tokio::test]
async fn test_login_persists_across_restart() {
    let dir = tempfile::tempdir().unwrap();

    let user = {
        let mut auth = helpers::open_auth(helpers::file_persistence(dir.path()).await).await;
        auth.register("b@x.com", "secret1", "Bob").await.unwrap()
    };

    let mut auth = helpers::open_auth(helpers::file_persistence(dir.path()).await).await;
    assert_eq!(auth.current_user(), Some(&user));

    auth.logout().await.unwrap();
    let auth = helpers::open_auth(helpers::file_persistence(dir.path()).await).await;
    assert!(auth.current_user().is_none());
}

#[tokio::test]
async fn test_activity_credits_logged_in_user() {
    let persistence = helpers::memory_persistence().await;
    let mut auth = helpers::open_auth(persistence.clone()).await;
    let mut vault = helpers::open_vault(persistence).await;

    vault.create_folder("Before", None).await.unwrap();
    assert_eq!(vault.recent_activity(1)[0].user_id, UserId::anonymous());

    let user = auth.register("c@x.com", "secret1", "Cara").await.unwrap();
    vault.set_actor(user.id);
    let folder = vault.create_folder("After", None).await.unwrap();

    assert_eq!(folder.owner_id, user.id);
    assert_eq!(vault.recent_activity(1)[0].user_id, user.id);
}
