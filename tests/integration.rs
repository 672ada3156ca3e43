// SPDX-License-Identifier: MPL-2.0
use roamly::app::config::Config;
use roamly::app::{App, Message};
use roamly::application::bootstrap::{Bootstrap, BootstrapOptions, BootstrapPhase};
use roamly::application::port::{Navigator, PreferenceStore};
use roamly::domain::appearance::{ColorScheme, ThemeMode};
use roamly::domain::language::Language;
use roamly::domain::navigation::{Route, Tab};
use roamly::domain::preference::{PreferenceKey, PreferenceRecord};
use roamly::domain::session::SessionState;
use roamly::i18n::Translator;
use roamly::infrastructure::{FilePreferenceStore, MemoryPreferenceStore};
use roamly::navigation::{NavigationAction, NavigationShell};
use std::sync::Arc;
use tempfile::tempdir;

fn device(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

fn bootstrap_with(
    store: MemoryPreferenceStore,
    locales: &[&str],
) -> (
    Bootstrap<MemoryPreferenceStore, Vec<String>, NavigationShell>,
    Arc<NavigationShell>,
) {
    let shell = Arc::new(NavigationShell::new());
    let bootstrap = Bootstrap::new(
        Arc::new(store),
        device(locales),
        Arc::clone(&shell),
        Arc::new(Translator::new()),
        BootstrapOptions::default(),
    );
    (bootstrap, shell)
}

#[tokio::test]
async fn dark_theme_with_unsupported_device_locale_and_no_session() {
    let store = MemoryPreferenceStore::with_records([PreferenceRecord::new(
        PreferenceKey::Theme,
        "dark",
    )]);
    let (bootstrap, shell) = bootstrap_with(store, &["fr-FR"]);

    let report = bootstrap.run().await;
    shell.mark_mounted();

    assert_eq!(report.theme_mode, ThemeMode::Dark);
    assert_eq!(report.scheme, ColorScheme::Dark);
    assert_eq!(report.language, Language::English);
    assert_eq!(report.session, SessionState::Anonymous);
    assert!(bootstrap.session().take_redirect().is_none());
    assert!(shell.actions().is_empty());
    assert_eq!(shell.current(), Route::landing());
}

#[tokio::test]
async fn stored_hindi_with_session_redirects_once() {
    let store = MemoryPreferenceStore::with_records([
        PreferenceRecord::new(PreferenceKey::Language, "hi"),
        PreferenceRecord::new(PreferenceKey::Session, "{\"id\":42}"),
    ]);
    let (bootstrap, shell) = bootstrap_with(store, &["en-US"]);

    let report = bootstrap.run().await;

    assert_eq!(report.theme_mode, ThemeMode::System);
    assert_eq!(report.language, Language::Hindi);
    assert_eq!(report.session, SessionState::Authenticated);

    shell.mark_mounted();
    let redirect = bootstrap
        .session()
        .take_redirect()
        .expect("redirect scheduled");
    assert!(redirect.await.expect("redirect task panicked"));

    assert_eq!(
        shell.actions(),
        vec![NavigationAction::Replace(Route::main_tabs())]
    );
    assert!(!shell.can_go_back());
}

#[tokio::test]
async fn supported_device_locale_is_used_without_a_stored_language() {
    let (bootstrap, _shell) = bootstrap_with(MemoryPreferenceStore::new(), &["es-AR", "en-US"]);

    assert_eq!(bootstrap.run().await.language, Language::Spanish);
}

#[tokio::test]
async fn simulated_storage_failure_settles_on_fallbacks() {
    let store = MemoryPreferenceStore::with_records([
        PreferenceRecord::new(PreferenceKey::Theme, "light"),
        PreferenceRecord::new(PreferenceKey::Language, "de"),
        PreferenceRecord::new(PreferenceKey::Session, "present"),
    ]);
    store.fail_reads(true);
    let (bootstrap, shell) = bootstrap_with(store, &[]);

    let report = bootstrap.run().await;
    shell.mark_mounted();

    assert_eq!(bootstrap.phase(), BootstrapPhase::Settled);
    assert_eq!(report.theme_mode, ThemeMode::System);
    assert_eq!(report.language, Language::English);
    assert_eq!(report.session, SessionState::Anonymous);
    assert!(shell.actions().is_empty());
}

#[tokio::test]
async fn runtime_changes_reach_existing_subscribers() {
    let (bootstrap, _shell) = bootstrap_with(MemoryPreferenceStore::new(), &[]);
    bootstrap.run().await;
    let mut languages = bootstrap.language().subscribe();
    let mut schemes = bootstrap.appearance().subscribe_scheme();

    bootstrap
        .language()
        .set_language("es")
        .await
        .expect("es is supported");
    bootstrap.appearance().set_mode(ThemeMode::Dark).await;

    assert_eq!(languages.changed().await, Some(Language::Spanish));
    assert_eq!(schemes.changed().await, Some(ColorScheme::Dark));
    assert_eq!(bootstrap.language().tr("tab-wishlist"), "Favoritos");
}

#[tokio::test]
async fn preferences_written_in_one_launch_are_read_in_the_next() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("preferences.cbor");

    {
        let mut app = App::new(
            Config::default(),
            Arc::new(FilePreferenceStore::new(path.clone())),
            ColorScheme::Light,
        );
        let report = app.launch().await;
        assert_eq!(report.session, SessionState::Anonymous);
        assert_eq!(app.current_route(), Route::landing());

        app.update(Message::SetLanguage("de".to_string()))
            .await
            .expect("set language");
        app.update(Message::SetTheme(ThemeMode::Dark))
            .await
            .expect("set theme");
        app.update(Message::SignIn("token".to_string()))
            .await
            .expect("sign in");
    }

    let store = Arc::new(FilePreferenceStore::new(path));
    assert_eq!(
        store.get(PreferenceKey::Theme.as_str()).await,
        Ok(Some("dark".to_string()))
    );

    let mut app = App::new(Config::default(), store, ColorScheme::Light);
    let report = app.launch().await;

    assert_eq!(report.language, Language::German);
    assert_eq!(report.theme_mode, ThemeMode::Dark);
    assert_eq!(report.session, SessionState::Authenticated);
    assert_eq!(app.current_route(), Route::main_tabs());
    assert_eq!(app.tab_labels()[0], (Tab::Discover, "Entdecken".to_string()));
}

#[tokio::test]
async fn sign_out_is_remembered_across_launches() {
    let store = Arc::new(MemoryPreferenceStore::with_records([PreferenceRecord::new(
        PreferenceKey::Session,
        "present",
    )]));

    let mut app = App::new(Config::default(), Arc::clone(&store), ColorScheme::Light);
    app.launch().await;
    assert_eq!(app.current_route(), Route::main_tabs());
    app.update(Message::SignOut).await.expect("sign out");
    assert_eq!(app.session(), SessionState::Anonymous);
    drop(app);

    let mut relaunched = App::new(Config::default(), store, ColorScheme::Light);
    let report = relaunched.launch().await;

    assert_eq!(report.session, SessionState::Anonymous);
    assert_eq!(relaunched.current_route(), Route::landing());
}

#[tokio::test]
async fn tabs_only_open_inside_the_main_set() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut app = App::new(Config::default(), store, ColorScheme::Light);
    app.launch().await;

    app.update(Message::OpenTab(Tab::Cart)).await.expect("open tab");
    assert_eq!(app.current_route(), Route::landing());

    app.shell().replace(Route::main_tabs());
    app.update(Message::OpenTab(Tab::Cart)).await.expect("open tab");
    assert_eq!(app.current_route(), Tab::Cart.route());

    app.update(Message::Back).await.expect("back");
    assert_eq!(app.current_route(), Route::main_tabs());
}
