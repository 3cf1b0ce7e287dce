//! End-to-end account flows over a scripted transport: login, signup,
//! and logout, including the side-effect guarantees around the stored
//! token.

use std::sync::Arc;

use assert_matches::assert_matches;

use shiori_app::screens::{AccountScreen, LoginScreen, SignupScreen};
use shiori_app::usecases::{LoginUsecase, LogoutUsecase, SignupUsecase};
use shiori_core::{
    effects::{AuthProviderEffects, ChatStoreEffects},
    errors::AppError,
    state::LoadingState,
    types::AuthToken,
};
use shiori_testkit::{
    empty_body, error_body, sample_user, user_body, FailingCredentialStore, TestEnv,
};

fn login_usecase(env: &TestEnv) -> LoginUsecase {
    LoginUsecase::new(env.api(), env.credentials.clone(), env.auth.clone())
}

fn signup_usecase(env: &TestEnv) -> SignupUsecase {
    SignupUsecase::new(
        env.api(),
        env.credentials.clone(),
        env.auth.clone(),
        env.chat.clone(),
        env.icons.clone(),
        env.clock.clone(),
    )
}

fn logout_usecase(env: &TestEnv) -> LogoutUsecase {
    LogoutUsecase::new(env.api(), env.credentials.clone(), env.auth.clone())
}

#[tokio::test]
async fn test_login_success_persists_token_once() {
    let env = TestEnv::new();
    env.auth
        .create_user("a@b.com", "secret123")
        .await
        .expect("account provisioned");
    env.auth.sign_out().await.expect("sign out succeeds");
    env.transport
        .push_json(200, user_body(1, "a@b.com", "issued-token"));

    let mut screen = LoginScreen::new(login_usecase(&env));
    screen.set_email("a@b.com");
    screen.set_password("secret123");
    assert!(screen.can_submit().get());

    screen.submit().await;

    let state = screen.state().get();
    assert_matches!(state, LoadingState::Done(user) => {
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.token, AuthToken::from("issued-token"));
    });
    assert_eq!(env.credentials.store_count(), 1);
    assert_eq!(env.credentials.token(), Some(AuthToken::from("issued-token")));
    assert!(env
        .auth
        .current_profile()
        .await
        .expect("provider reachable")
        .is_some());
}

#[tokio::test]
async fn test_login_rejected_stores_nothing() {
    let env = TestEnv::new();
    env.transport
        .push_json(401, error_body(401, "invalid credentials"));

    let mut screen = LoginScreen::new(login_usecase(&env));
    screen.set_email("a@b.com");
    screen.set_password("secret123");

    let mut states = screen.state().subscribe();
    screen.submit().await;

    assert_matches!(
        screen.state().get(),
        LoadingState::Failed(AppError::Server { status: 401, .. })
    );
    assert_eq!(env.credentials.store_count(), 0);
    assert_eq!(env.credentials.token(), None);

    // Exactly one terminal state was published: standby, loading, failed.
    assert_matches!(states.try_recv(), Some(LoadingState::Standby));
    assert_matches!(states.try_recv(), Some(LoadingState::Loading));
    assert_matches!(states.try_recv(), Some(LoadingState::Failed(_)));
    assert_matches!(states.try_recv(), None);
}

#[tokio::test]
async fn test_login_fails_when_token_cannot_be_stored() {
    let env = TestEnv::new();
    env.auth
        .create_user("a@b.com", "secret123")
        .await
        .expect("account provisioned");
    env.auth.sign_out().await.expect("sign out succeeds");
    env.transport
        .push_json(200, user_body(1, "a@b.com", "issued-token"));

    let usecase = LoginUsecase::new(
        env.api(),
        Arc::new(FailingCredentialStore::new()),
        env.auth.clone(),
    );
    let outcome = usecase.login("a@b.com", "secret123").await;

    assert_matches!(outcome, Err(AppError::Credential { .. }));
    // The provider sign-in never ran: the token must be persisted first.
    assert_eq!(
        env.auth.current_profile().await.expect("provider reachable"),
        None
    );
}

#[tokio::test]
async fn test_signup_provisions_chat_identity() {
    let env = TestEnv::new();
    env.transport
        .push_json(200, user_body(7, "new@b.com", "fresh-token"));

    let mut screen = SignupScreen::new(signup_usecase(&env));
    screen.set_name("botan");
    screen.set_email("new@b.com");
    screen.set_password("secret123");
    screen.set_confirmation("secret123");
    screen.set_icon(Some(vec![0x89, 0x50, 0x4e, 0x47]));
    assert!(screen.can_submit().get());

    screen.submit().await;

    assert_matches!(screen.state().get(), LoadingState::Done(user) => {
        assert_eq!(user.email, "new@b.com");
    });
    assert_eq!(env.credentials.store_count(), 1);
    assert_eq!(env.credentials.token(), Some(AuthToken::from("fresh-token")));

    let me = env
        .auth
        .current_profile()
        .await
        .expect("provider reachable")
        .expect("account created and signed in");
    let profiles = env.chat.fetch_profiles().await.expect("directory readable");
    let profile = profiles
        .iter()
        .find(|profile| profile.id == me)
        .expect("chat profile created");
    assert_eq!(profile.name, "botan");
    let icon_url = profile.icon_url.as_deref().expect("icon uploaded");
    assert!(icon_url.ends_with(".png"));
    assert!(env.icons.icon(me).await.is_some());
}

#[tokio::test]
async fn test_signup_without_icon_skips_upload() {
    let env = TestEnv::new();
    env.transport
        .push_json(200, user_body(8, "plain@b.com", "fresh-token"));

    let mut screen = SignupScreen::new(signup_usecase(&env));
    screen.set_name("plain");
    screen.set_email("plain@b.com");
    screen.set_password("secret123");
    screen.set_confirmation("secret123");

    screen.submit().await;

    assert_matches!(screen.state().get(), LoadingState::Done(_));
    let profiles = env.chat.fetch_profiles().await.expect("directory readable");
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].icon_url, None);
}

#[tokio::test]
async fn test_signup_rejected_leaves_no_identity() {
    let env = TestEnv::new();
    env.transport
        .push_json(409, error_body(409, "email already taken"));

    let mut screen = SignupScreen::new(signup_usecase(&env));
    screen.set_name("botan");
    screen.set_email("taken@b.com");
    screen.set_password("secret123");
    screen.set_confirmation("secret123");

    screen.submit().await;

    assert_matches!(
        screen.state().get(),
        LoadingState::Failed(AppError::Server { status: 409, .. })
    );
    assert_eq!(env.credentials.store_count(), 0);
    assert!(env
        .chat
        .fetch_profiles()
        .await
        .expect("directory readable")
        .is_empty());
}

#[tokio::test]
async fn test_logout_clears_token_after_remote_success() {
    let env = TestEnv::new();
    let me = env.sign_in("a@b.com", "alice").await;
    env.transport.push_json(200, empty_body());

    let user = sample_user(1, "a@b.com");
    let screen = AccountScreen::new(user, logout_usecase(&env));
    screen.logout().await;

    assert_matches!(screen.state().get(), LoadingState::Done(()));
    assert_eq!(env.credentials.clear_count(), 1);
    assert_eq!(env.credentials.token(), None);
    assert_eq!(
        env.auth.current_profile().await.expect("provider reachable"),
        None,
        "profile {me} should be signed out",
        me = me.id
    );
}

#[tokio::test]
async fn test_logout_failure_keeps_token() {
    let env = TestEnv::new();
    env.sign_in("a@b.com", "alice").await;
    env.transport.push_json(500, error_body(500, "server error"));

    let user = sample_user(1, "a@b.com");
    let screen = AccountScreen::new(user, logout_usecase(&env));
    screen.logout().await;

    assert_matches!(screen.state().get(), LoadingState::Failed(_));
    assert_eq!(env.credentials.clear_count(), 0);
    assert_eq!(env.credentials.token(), Some(AuthToken::from("test-token")));
    assert!(env
        .auth
        .current_profile()
        .await
        .expect("provider reachable")
        .is_some());
}

#[tokio::test]
async fn test_cancelled_login_applies_nothing() {
    let env = TestEnv::new();
    env.transport
        .push_json(200, user_body(1, "a@b.com", "issued-token"));

    let mut screen = LoginScreen::new(login_usecase(&env));
    screen.set_email("a@b.com");
    screen.set_password("secret123");

    screen.cancel();
    screen.submit().await;

    assert!(screen.state().get().is_standby());
    assert_eq!(env.transport.sent_count(), 0);
    assert_eq!(env.credentials.store_count(), 0);
}
