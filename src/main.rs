// SPDX-License-Identifier: MPL-2.0
use roamly::app::{self, config, paths, App, Flags, Message};
use roamly::application::port::{PreferenceStore, SystemAppearanceSource};
use roamly::domain::appearance::ThemeMode;
use roamly::infrastructure::{DarkLightAppearance, FilePreferenceStore, MemoryPreferenceStore};
use std::process::ExitCode;
use std::sync::Arc;

const HELP: &str = "\
roamly - start the Roamly shell and print the settled state

USAGE:
  roamly [OPTIONS]

OPTIONS:
  --data-dir <DIR>       Directory holding the preference store
  --config-dir <DIR>     Directory holding settings.toml
  --ephemeral            Keep preferences in memory for this run
  --set-lang <CODE>      Switch language after startup (en, hi, es, de)
  --set-theme <MODE>     Switch appearance after startup (light, dark, system)
  --sign-in <PAYLOAD>    Store a session marker
  --sign-out             Clear the session marker
  -h, --help             Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let ephemeral = args.contains("--ephemeral");

    let mut messages = Vec::new();
    if let Some(code) = args.opt_value_from_str::<_, String>("--set-lang")? {
        messages.push(Message::SetLanguage(code));
    }
    if let Some(mode) = args.opt_value_from_str::<_, ThemeMode>("--set-theme")? {
        messages.push(Message::SetTheme(mode));
    }
    if let Some(payload) = args.opt_value_from_str::<_, String>("--sign-in")? {
        messages.push(Message::SignIn(payload));
    }
    if args.contains("--sign-out") {
        messages.push(Message::SignOut);
    }

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unused arguments: {:?}", remaining);
    }

    Ok(Flags {
        data_dir,
        config_dir,
        ephemeral,
        messages,
    })
}

async fn run<S: PreferenceStore + 'static>(mut app: App<S>, messages: Vec<Message>) -> roamly::error::Result<()> {
    app.launch().await;
    for message in messages {
        app.update(message).await?;
    }

    let report = app.report();
    println!("language: {} ({})", report.language, report.language.native_name());
    println!("theme:    {} (painting {})", report.theme_mode, report.scheme);
    println!("session:  {:?}", report.session);
    println!("route:    {}", app.current_route());
    let labels: Vec<String> = app.tab_labels().into_iter().map(|(_, label)| label).collect();
    println!("tabs:     {}", labels.join(" | "));
    Ok(())
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    let (config, config_warning) = config::load();
    app::logging::init(&config.logging.filter);
    if let Some(warning) = config_warning {
        tracing::warn!(%warning, "settings.toml could not be read, using defaults");
    }

    // Read before the runtime starts; platform detection may block.
    let initial_scheme = DarkLightAppearance.current_scheme().unwrap_or_default();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "failed to start async runtime");
            return ExitCode::FAILURE;
        }
    };

    let result = if flags.ephemeral {
        let store = Arc::new(MemoryPreferenceStore::new());
        runtime.block_on(run(App::new(config, store, initial_scheme), flags.messages))
    } else {
        let Some(store) = FilePreferenceStore::in_data_dir(&config.storage.file_name, None) else {
            tracing::error!("no data directory available; pass --data-dir or --ephemeral");
            return ExitCode::FAILURE;
        };
        tracing::debug!(path = %store.path().display(), "using preference store");
        runtime.block_on(run(App::new(config, Arc::new(store), initial_scheme), flags.messages))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
