//! Widgetry - a terminal catalog of data table and input field stories.

use std::path::PathBuf;

use clap::Parser;
use tracing::error;

use widgetry::app::App;
use widgetry::catalog::StoryId;
use widgetry::config::{ConfigError, Settings};
use widgetry::error::{AppError, Result};
use widgetry::events::EventHandler;
use widgetry::logging;
use widgetry::terminal::TerminalGuard;

#[derive(Parser, Debug)]
#[command(name = "widgetry", version, about = "Browse data table and input field stories")]
struct Cli {
    /// Story to open first, e.g. `data-table/selectable`.
    #[arg(long, value_name = "ID")]
    story: Option<String>,

    /// Print every story id and exit.
    #[arg(long)]
    list: bool,

    /// Configuration file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for id in StoryId::ALL {
            println!("{:<34}{} / {}", id.slug(), id.component().title(), id.name());
        }
        return Ok(());
    }

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    finish(run(&cli))
}

/// Log the outcome of a run, then the shutdown, and turn errors into the
/// message shown on exit.
fn finish(result: Result<()>) -> anyhow::Result<()> {
    if let Err(e) = &result {
        error!(error = %e, "Widgetry exited with an error");
    }
    logging::shutdown();

    if let Err(e) = result {
        if let Some(dir) = logging::log_directory() {
            eprintln!("Logs are in {}", dir.display());
        }
        anyhow::bail!(e.user_message());
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    let initial = initial_story(cli.story.as_deref(), &settings)?;
    let events = EventHandler::with_tick_rate(settings.tick_rate_ms);
    let mut app = App::new(settings, initial)?;

    let mut guard = TerminalGuard::new()?;
    while !app.should_quit() {
        guard.terminal().draw(|frame| app.view(frame))?;
        let event = events.next()?;
        app.update(event);
    }
    Ok(())
}

/// Pick the first story: the command line wins over the config file.
fn initial_story(requested: Option<&str>, settings: &Settings) -> Result<StoryId> {
    let Some(slug) = requested.or(settings.default_story.as_deref()) else {
        return Ok(StoryId::ALL[0]);
    };
    StoryId::from_slug(slug)
        .ok_or_else(|| AppError::Config(ConfigError::UnknownStory(slug.to_string())))
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_initial_story_defaults_to_first() {
        let id = initial_story(None, &Settings::default()).unwrap();
        assert_eq!(id, StoryId::TableBasic);
    }

    #[test]
    fn test_initial_story_cli_overrides_config() {
        let settings = Settings {
            default_story: Some("input-field/password".to_string()),
            ..Settings::default()
        };
        assert_eq!(
            initial_story(None, &settings).unwrap(),
            StoryId::InputPassword
        );
        assert_eq!(
            initial_story(Some("data-table/empty"), &settings).unwrap(),
            StoryId::TableEmpty
        );
    }

    #[test]
    fn test_initial_story_unknown() {
        let err = initial_story(Some("nope"), &Settings::default()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::UnknownStory(ref s)) if s == "nope"
        ));
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["widgetry", "--story", "data-table/basic", "--config", "/tmp/w.toml"]);
        assert_eq!(cli.story.as_deref(), Some("data-table/basic"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/w.toml")));
        assert!(!cli.list);
        assert!(Cli::parse_from(["widgetry", "--list"]).list);
    }

    #[test]
    fn test_finish_logs_error_before_shutdown() {
        let mut outcome = None;
        let logs = captured_logs(|| outcome = Some(finish(Err(AppError::other("boom")))));

        assert!(outcome.unwrap().is_err());
        let error_at = logs.find("exited with an error").unwrap();
        let shutdown_at = logs.find("shutting down").unwrap();
        assert!(error_at < shutdown_at);
        assert!(logs.contains("boom"));
    }

    #[test]
    fn test_finish_ok_only_logs_shutdown() {
        let mut outcome = None;
        let logs = captured_logs(|| outcome = Some(finish(Ok(()))));

        assert!(outcome.unwrap().is_ok());
        assert!(!logs.contains("exited with an error"));
        assert!(logs.contains("shutting down"));
    }
}
