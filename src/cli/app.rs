//! Main app runner

use std::path::Path;
use std::process::ExitCode;

use crate::application::{NotifyCallbacks, NotifyInput, NotifyUseCase};
use crate::domain::platform::PlatformKind;
use crate::domain::sound::{expand_tilde, SoundTarget};
use crate::infrastructure::{PathProbe, PlatformSound, ProcessRunner};

use super::args::NotifyOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Play the notification on this host
pub async fn run_notify(options: NotifyOptions) -> ExitCode {
    let presenter = Presenter::new(options.verbose);
    let platform = PlatformKind::detect();
    presenter.info(&format!("Platform: {}", platform));

    let use_case = NotifyUseCase::new(
        platform,
        PathProbe::new(),
        ProcessRunner::new(),
        PlatformSound::new(),
    );

    let input = NotifyInput { sound: options.sound };

    match use_case.execute(input, build_callbacks(presenter)).await {
        Ok(output) => {
            presenter.success(&presenter.format_outcome(&output.outcome));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Wire use case progress to the presenter
fn build_callbacks(presenter: Presenter) -> NotifyCallbacks {
    NotifyCallbacks {
        on_target: Some(Box::new(move |target: Option<&SoundTarget>| match target {
            Some(sound) => presenter.info(&format!("Sound: {}", sound)),
            None => presenter.info("No sound file found"),
        })),
        on_attempt: Some(Box::new(move |what: &str| {
            presenter.detail(&format!("Trying {}", what));
        })),
        on_attempt_failed: Some(Box::new(move |what: &str, reason: &str| {
            presenter.detail(&format!("{} failed: {}", what, reason));
        })),
    }
}

/// Build notify options from the command line
pub fn build_options(sound: Option<&str>, verbose: bool, home: Option<&Path>) -> NotifyOptions {
    NotifyOptions {
        sound: sound.map(|s| expand_tilde(s, home)),
        verbose,
    }
}
