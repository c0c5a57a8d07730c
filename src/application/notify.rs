//! Notify use case
//!
//! Resolves which sound to play, plays it with the first mechanism that works
//! on this platform, and falls back to a beep when nothing could be played.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::platform::PlatformKind;
use crate::domain::playback::{fallback_mechanisms, playback_mechanisms, Fallback, Mechanism};
use crate::domain::sound::{default_candidates, SoundTarget};

use super::ports::{CommandRunner, NativeSound, SystemProbe};

/// Errors from the notify use case
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unable to play any sound on this system.")]
    NoPlayerAvailable,
}

/// Input parameters for the notify use case
#[derive(Debug, Clone, Default)]
pub struct NotifyInput {
    /// Sound the user asked for explicitly; it must exist
    pub sound: Option<PathBuf>,
}

/// How the notification was eventually delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The sound file was played by `via`
    Played { via: String },
    /// Playback failed or had no target; `via` produced the fallback
    Fallback { via: String },
}

/// Output from the notify use case
#[derive(Debug, Clone)]
pub struct NotifyOutput {
    /// The resolved sound, if any
    pub target: Option<SoundTarget>,
    pub outcome: NotifyOutcome,
}

/// Callbacks for progress reporting
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct NotifyCallbacks {
    /// Called once the sound target is resolved (None = nothing to play)
    pub on_target: Option<Box<dyn Fn(Option<&SoundTarget>) + Send + Sync>>,
    /// Called before each attempt with a description of what is tried
    pub on_attempt: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called when an attempt fails with (mechanism, reason)
    pub on_attempt_failed: Option<Box<dyn Fn(&str, &str) + Send + Sync>>,
}

impl NotifyCallbacks {
    fn attempt(&self, what: &str) {
        if let Some(ref cb) = self.on_attempt {
            cb(what);
        }
    }

    fn failed(&self, what: &str, reason: &str) {
        if let Some(ref cb) = self.on_attempt_failed {
            cb(what, reason);
        }
    }
}

/// Play-a-notification use case
pub struct NotifyUseCase<P, R, N>
where
    P: SystemProbe,
    R: CommandRunner,
    N: NativeSound,
{
    platform: PlatformKind,
    probe: P,
    runner: R,
    native: N,
}

impl<P, R, N> NotifyUseCase<P, R, N>
where
    P: SystemProbe,
    R: CommandRunner,
    N: NativeSound,
{
    /// Create a new use case instance
    pub fn new(platform: PlatformKind, probe: P, runner: R, native: N) -> Self {
        Self {
            platform,
            probe,
            runner,
            native,
        }
    }

    /// Platform whose tables drive this instance
    pub fn platform(&self) -> PlatformKind {
        self.platform
    }

    /// Resolve the sound to play.
    ///
    /// An explicit path that does not exist is an error; an absent default is
    /// `Ok(None)`.
    pub fn resolve(&self, input: &NotifyInput) -> Result<Option<SoundTarget>, NotifyError> {
        if let Some(ref requested) = input.sound {
            return match SoundTarget::new(requested.clone()) {
                Some(target) if self.probe.file_exists(target.path()) => Ok(Some(target)),
                _ => Err(NotifyError::FileNotFound(requested.clone())),
            };
        }

        Ok(self
            .probe
            .first_existing(default_candidates(self.platform))
            .and_then(SoundTarget::new))
    }

    /// Try each playback mechanism in order.
    ///
    /// Returns the name of whatever played the sound, or None if all failed.
    pub async fn attempt_playback(
        &self,
        target: &SoundTarget,
        callbacks: &NotifyCallbacks,
    ) -> Option<String> {
        let path = target.path();

        for mechanism in playback_mechanisms(self.platform) {
            match mechanism {
                Mechanism::NativePlay => {
                    callbacks.attempt(&format!("{} of {}", mechanism.label(), target));
                    match self.native.play_file(path).await {
                        Ok(()) => return Some(mechanism.label().to_string()),
                        Err(e) => callbacks.failed(mechanism.label(), &e.to_string()),
                    }
                }
                Mechanism::FirstAvailable(players) => {
                    let Some(player) = self.probe.first_available(players) else {
                        let names: Vec<&str> = players.iter().map(|p| p.program).collect();
                        callbacks.failed(
                            mechanism.label(),
                            &format!("none of {} found on PATH", names.join(", ")),
                        );
                        continue;
                    };

                    let command = player.with_path(path);
                    callbacks.attempt(&command.to_string());
                    match self.runner.run(&command).await {
                        Ok(()) => return Some(player.program.to_string()),
                        Err(e) => callbacks.failed(player.program, &e.to_string()),
                    }
                }
                Mechanism::Launch(launcher) => {
                    let command = launcher.with_path(path);
                    callbacks.attempt(&command.to_string());
                    match self.runner.run(&command).await {
                        Ok(()) => return Some(launcher.program.to_string()),
                        Err(e) => callbacks.failed(launcher.program, &e.to_string()),
                    }
                }
            }
        }

        None
    }

    /// Try each fallback in order.
    ///
    /// `requested` selects the table for a sound named on the command line.
    /// Returns the name of the fallback that worked, or None if all failed.
    pub async fn attempt_fallback(
        &self,
        requested: bool,
        callbacks: &NotifyCallbacks,
    ) -> Option<String> {
        for fallback in fallback_mechanisms(self.platform, requested) {
            let result = match fallback {
                Fallback::MessageBeep => {
                    callbacks.attempt(fallback.label());
                    self.native.message_beep().await.map_err(|e| e.to_string())
                }
                Fallback::Speech(speech) => {
                    if !self.probe.is_available(speech.program) {
                        callbacks.failed(fallback.label(), "not found on PATH");
                        continue;
                    }
                    let command = speech.to_command_line();
                    callbacks.attempt(&command.to_string());
                    self.runner.run(&command).await.map_err(|e| e.to_string())
                }
                Fallback::TerminalBell => {
                    callbacks.attempt(fallback.label());
                    self.native.terminal_bell().await.map_err(|e| e.to_string())
                }
            };

            match result {
                Ok(()) => return Some(fallback.label().to_string()),
                Err(reason) => callbacks.failed(fallback.label(), &reason),
            }
        }

        None
    }

    /// Execute resolve → play → fallback
    pub async fn execute(
        &self,
        input: NotifyInput,
        callbacks: NotifyCallbacks,
    ) -> Result<NotifyOutput, NotifyError> {
        let target = self.resolve(&input)?;

        if let Some(ref cb) = callbacks.on_target {
            cb(target.as_ref());
        }

        if let Some(ref sound) = target {
            if let Some(via) = self.attempt_playback(sound, &callbacks).await {
                return Ok(NotifyOutput {
                    target,
                    outcome: NotifyOutcome::Played { via },
                });
            }
        }

        if let Some(via) = self
            .attempt_fallback(input.sound.is_some(), &callbacks)
            .await
        {
            return Ok(NotifyOutput {
                target,
                outcome: NotifyOutcome::Fallback { via },
            });
        }

        Err(NotifyError::NoPlayerAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{LaunchError, NativeSoundError};
    use crate::domain::playback::CommandLine;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    const COMPLETE_OGA: &str = "/usr/share/sounds/freedesktop/stereo/complete.oga";
    const MESSAGE_OGA: &str = "/usr/share/sounds/freedesktop/stereo/message.oga";
    const FRONT_CENTER: &str = "/usr/share/sounds/alsa/Front_Center.wav";

    #[derive(Default)]
    struct FakeProbe {
        files: HashSet<PathBuf>,
        programs: HashSet<&'static str>,
    }

    impl FakeProbe {
        fn new(files: &[&str], programs: &[&'static str]) -> Self {
            Self {
                files: files.iter().map(PathBuf::from).collect(),
                programs: programs.iter().copied().collect(),
            }
        }
    }

    impl SystemProbe for FakeProbe {
        fn file_exists(&self, path: &Path) -> bool {
            self.files.contains(path)
        }

        fn find_executable(&self, name: &str) -> Option<PathBuf> {
            self.programs
                .contains(name)
                .then(|| PathBuf::from("/usr/bin").join(name))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingRunner {
        calls: Arc<Mutex<Vec<CommandLine>>>,
        failing: Arc<HashSet<&'static str>>,
    }

    impl RecordingRunner {
        fn failing(programs: &[&'static str]) -> Self {
            Self {
                failing: Arc::new(programs.iter().copied().collect()),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|c| c.to_string())
                .collect()
        }
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, command: &CommandLine) -> Result<(), LaunchError> {
            self.calls.lock().unwrap().push(command.clone());
            if self.failing.contains(command.program()) {
                return Err(LaunchError::ExitStatus {
                    program: command.program().to_string(),
                    status: "exit status: 1".to_string(),
                });
            }
            Ok(())
        }
    }

    #[derive(Clone)]
    struct FakeNative {
        play_ok: bool,
        beep_ok: bool,
        bell_ok: bool,
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl FakeNative {
        fn working() -> Self {
            Self {
                play_ok: true,
                beep_ok: true,
                bell_ok: true,
                calls: Arc::default(),
            }
        }

        fn broken() -> Self {
            Self {
                play_ok: false,
                beep_ok: false,
                bell_ok: false,
                calls: Arc::default(),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &'static str, ok: bool) -> Result<(), NativeSoundError> {
            self.calls.lock().unwrap().push(call);
            if ok {
                Ok(())
            } else {
                Err(NativeSoundError::Failed(format!("{call} failed")))
            }
        }
    }

    #[async_trait]
    impl NativeSound for FakeNative {
        async fn play_file(&self, _path: &Path) -> Result<(), NativeSoundError> {
            self.record("play_file", self.play_ok)
        }

        async fn message_beep(&self) -> Result<(), NativeSoundError> {
            self.record("message_beep", self.beep_ok)
        }

        async fn terminal_bell(&self) -> Result<(), NativeSoundError> {
            self.record("terminal_bell", self.bell_ok)
        }
    }

    fn explicit(path: &str) -> NotifyInput {
        NotifyInput {
            sound: Some(PathBuf::from(path)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn linux_default_sound_plays_with_paplay() {
        let runner = RecordingRunner::default();
        let native = FakeNative::working();
        let use_case = NotifyUseCase::new(
            PlatformKind::Linux,
            FakeProbe::new(&[COMPLETE_OGA], &["paplay", "aplay"]),
            runner.clone(),
            native.clone(),
        );

        let output = use_case
            .execute(NotifyInput::default(), NotifyCallbacks::default())
            .await
            .unwrap();

        assert_eq!(
            output.outcome,
            NotifyOutcome::Played {
                via: "paplay".to_string()
            }
        );
        assert_eq!(runner.calls(), [format!("paplay {COMPLETE_OGA}")]);
        assert!(native.calls().is_empty());
    }

    #[test]
    fn first_existing_candidate_wins() {
        let use_case = NotifyUseCase::new(
            PlatformKind::Linux,
            FakeProbe::new(&[FRONT_CENTER, MESSAGE_OGA], &[]),
            RecordingRunner::default(),
            FakeNative::working(),
        );

        let target = use_case.resolve(&NotifyInput::default()).unwrap().unwrap();

        assert_eq!(target.path(), Path::new(MESSAGE_OGA));
    }

    #[test]
    fn no_candidates_resolves_to_none() {
        let use_case = NotifyUseCase::new(
            PlatformKind::MacOs,
            FakeProbe::new(&[COMPLETE_OGA], &[]),
            RecordingRunner::default(),
            FakeNative::working(),
        );

        let target = use_case.resolve(&NotifyInput::default()).unwrap();

        assert!(target.is_none());
    }

    #[tokio::test]
    async fn linux_nothing_available_rings_bell() {
        let runner = RecordingRunner::default();
        let native = FakeNative::working();
        let use_case = NotifyUseCase::new(
            PlatformKind::Linux,
            FakeProbe::default(),
            runner.clone(),
            native.clone(),
        );

        let output = use_case
            .execute(NotifyInput::default(), NotifyCallbacks::default())
            .await
            .unwrap();

        assert!(output.target.is_none());
        assert_eq!(
            output.outcome,
            NotifyOutcome::Fallback {
                via: "terminal bell".to_string()
            }
        );
        assert!(runner.calls().is_empty());
        assert_eq!(native.calls(), ["terminal_bell"]);
    }

    #[tokio::test]
    async fn missing_explicit_file_fails_without_attempts() {
        let runner = RecordingRunner::default();
        let native = FakeNative::working();
        let use_case = NotifyUseCase::new(
            PlatformKind::Linux,
            FakeProbe::new(&[COMPLETE_OGA], &["paplay"]),
            runner.clone(),
            native.clone(),
        );

        let err = use_case
            .execute(explicit("./missing.wav"), NotifyCallbacks::default())
            .await
            .unwrap_err();

        assert!(
            matches!(err, NotifyError::FileNotFound(ref p) if p == Path::new("./missing.wav"))
        );
        assert_eq!(err.to_string(), "File not found: ./missing.wav");
        assert!(runner.calls().is_empty());
        assert!(native.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_explicit_path_is_not_found() {
        let use_case = NotifyUseCase::new(
            PlatformKind::Linux,
            FakeProbe::new(&[COMPLETE_OGA], &["paplay"]),
            RecordingRunner::default(),
            FakeNative::working(),
        );

        let err = use_case
            .execute(explicit(""), NotifyCallbacks::default())
            .await
            .unwrap_err();

        assert!(matches!(err, NotifyError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn macos_explicit_file_plays_with_afplay() {
        let runner = RecordingRunner::default();
        let use_case = NotifyUseCase::new(
            PlatformKind::MacOs,
            FakeProbe::new(&["./clip.wav"], &["afplay", "open"]),
            runner.clone(),
            FakeNative::working(),
        );

        let output = use_case
            .execute(explicit("./clip.wav"), NotifyCallbacks::default())
            .await
            .unwrap();

        assert_eq!(
            output.outcome,
            NotifyOutcome::Played {
                via: "afplay".to_string()
            }
        );
        assert_eq!(runner.calls(), ["afplay ./clip.wav"]);
    }

    #[tokio::test]
    async fn macos_without_afplay_uses_open() {
        let runner = RecordingRunner::default();
        let use_case = NotifyUseCase::new(
            PlatformKind::MacOs,
            FakeProbe::new(&["/System/Library/Sounds/Pop.aiff"], &["open"]),
            runner.clone(),
            FakeNative::working(),
        );

        use_case
            .execute(NotifyInput::default(), NotifyCallbacks::default())
            .await
            .unwrap();

        assert_eq!(runner.calls(), ["open /System/Library/Sounds/Pop.aiff"]);
    }

    #[tokio::test]
    async fn ffplay_gets_headless_flags() {
        let runner = RecordingRunner::default();
        let use_case = NotifyUseCase::new(
            PlatformKind::Linux,
            FakeProbe::new(&[COMPLETE_OGA], &["ffplay", "play"]),
            runner.clone(),
            FakeNative::working(),
        );

        use_case
            .execute(NotifyInput::default(), NotifyCallbacks::default())
            .await
            .unwrap();

        assert_eq!(
            runner.calls(),
            [format!("ffplay -autoexit -nodisp {COMPLETE_OGA}")]
        );
    }

    #[tokio::test]
    async fn failing_player_goes_straight_to_fallback() {
        let runner = RecordingRunner::failing(&["paplay"]);
        let native = FakeNative::working();
        let use_case = NotifyUseCase::new(
            PlatformKind::Linux,
            FakeProbe::new(&[COMPLETE_OGA], &["paplay", "aplay"]),
            runner.clone(),
            native.clone(),
        );

        let output = use_case
            .execute(NotifyInput::default(), NotifyCallbacks::default())
            .await
            .unwrap();

        // only the first player on PATH is ever run
        assert_eq!(runner.calls(), [format!("paplay {COMPLETE_OGA}")]);
        assert_eq!(native.calls(), ["terminal_bell"]);
        assert!(matches!(output.outcome, NotifyOutcome::Fallback { .. }));
    }

    #[tokio::test]
    async fn explicit_file_without_players_still_falls_back() {
        let native = FakeNative::working();
        let use_case = NotifyUseCase::new(
            PlatformKind::Linux,
            FakeProbe::new(&["/tmp/clip.wav"], &[]),
            RecordingRunner::default(),
            native.clone(),
        );

        let output = use_case
            .execute(explicit("/tmp/clip.wav"), NotifyCallbacks::default())
            .await
            .unwrap();

        assert_eq!(output.target, SoundTarget::new("/tmp/clip.wav"));
        assert_eq!(native.calls(), ["terminal_bell"]);
    }

    #[tokio::test]
    async fn windows_native_playback_needs_no_process() {
        let runner = RecordingRunner::default();
        let native = FakeNative::working();
        let use_case = NotifyUseCase::new(
            PlatformKind::Windows,
            FakeProbe::new(&[r"C:\Windows\Media\Alarm01.wav"], &[]),
            runner.clone(),
            native.clone(),
        );

        let output = use_case
            .execute(NotifyInput::default(), NotifyCallbacks::default())
            .await
            .unwrap();

        assert_eq!(
            output.outcome,
            NotifyOutcome::Played {
                via: "native playback".to_string()
            }
        );
        assert_eq!(native.calls(), ["play_file"]);
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn windows_falls_back_to_shell_launch() {
        let runner = RecordingRunner::default();
        let native = FakeNative::broken();
        let use_case = NotifyUseCase::new(
            PlatformKind::Windows,
            FakeProbe::new(&[r"C:\Windows\Media\Windows Notify.wav"], &[]),
            runner.clone(),
            native.clone(),
        );

        let output = use_case
            .execute(NotifyInput::default(), NotifyCallbacks::default())
            .await
            .unwrap();

        assert_eq!(
            output.outcome,
            NotifyOutcome::Played {
                via: "cmd".to_string()
            }
        );
        assert_eq!(
            runner.calls(),
            [r"cmd /C start  C:\Windows\Media\Windows Notify.wav"]
        );
        assert_eq!(native.calls(), ["play_file"]);
    }

    #[tokio::test]
    async fn windows_everything_failing_is_an_error() {
        let native = FakeNative::broken();
        let use_case = NotifyUseCase::new(
            PlatformKind::Windows,
            FakeProbe::new(&[r"C:\Windows\Media\Windows Notify.wav"], &[]),
            RecordingRunner::failing(&["cmd"]),
            native.clone(),
        );

        let err = use_case
            .execute(NotifyInput::default(), NotifyCallbacks::default())
            .await
            .unwrap_err();

        assert!(matches!(err, NotifyError::NoPlayerAvailable));
        assert_eq!(err.to_string(), "Unable to play any sound on this system.");
        assert_eq!(native.calls(), ["play_file", "message_beep"]);
    }

    #[tokio::test]
    async fn macos_fallback_speaks() {
        let runner = RecordingRunner::default();
        let use_case = NotifyUseCase::new(
            PlatformKind::MacOs,
            FakeProbe::new(&[], &["say"]),
            runner.clone(),
            FakeNative::working(),
        );

        let output = use_case
            .execute(NotifyInput::default(), NotifyCallbacks::default())
            .await
            .unwrap();

        assert_eq!(
            output.outcome,
            NotifyOutcome::Fallback {
                via: "say".to_string()
            }
        );
        assert_eq!(runner.calls(), ["say ding"]);
    }

    #[tokio::test]
    async fn macos_second_speech_attempt_after_failure() {
        let runner = RecordingRunner::failing(&["say"]);
        let use_case = NotifyUseCase::new(
            PlatformKind::MacOs,
            FakeProbe::new(&[], &["say"]),
            runner.clone(),
            FakeNative::working(),
        );

        let err = use_case
            .execute(NotifyInput::default(), NotifyCallbacks::default())
            .await
            .unwrap_err();

        assert!(matches!(err, NotifyError::NoPlayerAvailable));
        assert_eq!(runner.calls(), ["say ding", "say -v Boing boop"]);
    }

    #[tokio::test]
    async fn macos_without_say_fails() {
        let runner = RecordingRunner::default();
        let use_case = NotifyUseCase::new(
            PlatformKind::MacOs,
            FakeProbe::default(),
            runner.clone(),
            FakeNative::working(),
        );

        let result = use_case
            .execute(NotifyInput::default(), NotifyCallbacks::default())
            .await;

        assert!(matches!(result, Err(NotifyError::NoPlayerAvailable)));
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn macos_unplayable_explicit_file_only_boops() {
        let runner = RecordingRunner::default();
        let use_case = NotifyUseCase::new(
            PlatformKind::MacOs,
            FakeProbe::new(&["./clip.wav"], &["say"]),
            runner.clone(),
            FakeNative::working(),
        );

        let output = use_case
            .execute(explicit("./clip.wav"), NotifyCallbacks::default())
            .await
            .unwrap();

        assert!(matches!(output.outcome, NotifyOutcome::Fallback { .. }));
        assert_eq!(runner.calls(), ["say -v Boing boop"]);
    }

    #[tokio::test]
    async fn explicit_file_with_failing_player_still_beeps() {
        let native = FakeNative::working();
        let use_case = NotifyUseCase::new(
            PlatformKind::Linux,
            FakeProbe::new(&["/tmp/clip.wav"], &["paplay"]),
            RecordingRunner::failing(&["paplay"]),
            native.clone(),
        );

        let output = use_case
            .execute(explicit("/tmp/clip.wav"), NotifyCallbacks::default())
            .await
            .unwrap();

        assert_eq!(
            output.outcome,
            NotifyOutcome::Fallback {
                via: "terminal bell".to_string()
            }
        );
        assert_eq!(native.calls(), ["terminal_bell"]);
    }

    #[tokio::test]
    async fn callbacks_report_attempts_and_failures() {
        let attempts = Arc::new(Mutex::new(Vec::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));
        let (a, f) = (Arc::clone(&attempts), Arc::clone(&failures));
        let callbacks = NotifyCallbacks {
            on_attempt: Some(Box::new(move |what: &str| {
                a.lock().unwrap().push(what.to_string());
            })),
            on_attempt_failed: Some(Box::new(move |what: &str, _reason: &str| {
                f.lock().unwrap().push(what.to_string());
            })),
            ..Default::default()
        };

        let use_case = NotifyUseCase::new(
            PlatformKind::Linux,
            FakeProbe::new(&[COMPLETE_OGA], &["aplay"]),
            RecordingRunner::failing(&["aplay"]),
            FakeNative::working(),
        );

        use_case
            .execute(NotifyInput::default(), callbacks)
            .await
            .unwrap();

        assert_eq!(
            *attempts.lock().unwrap(),
            [format!("aplay {COMPLETE_OGA}"), "terminal bell".to_string()]
        );
        assert_eq!(*failures.lock().unwrap(), ["aplay"]);
    }
}
