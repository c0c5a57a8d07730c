//! Default notification sounds per platform

use crate::domain::platform::PlatformKind;

const WINDOWS_CANDIDATES: &[&str] = &[
    r"C:\Windows\Media\Windows Notify.wav",
    r"C:\Windows\Media\Windows Balloon.wav",
    r"C:\Windows\Media\Alarm01.wav",
];

const MACOS_CANDIDATES: &[&str] = &[
    "/System/Library/Sounds/Glass.aiff",
    "/System/Library/Sounds/Submarine.aiff",
    "/System/Library/Sounds/Pop.aiff",
];

const LINUX_CANDIDATES: &[&str] = &[
    // freedesktop / Ubuntu sound themes (.oga/.ogg, best with paplay)
    "/usr/share/sounds/freedesktop/stereo/complete.oga",
    "/usr/share/sounds/freedesktop/stereo/message.oga",
    "/usr/share/sounds/ubuntu/stereo/dialog-information.ogg",
    // plain wav samples that aplay can handle
    "/usr/share/sounds/alsa/Front_Center.wav",
    "/usr/share/sounds/speech-dispatcher/test.wav",
];

/// Ordered default sound files for a platform. The first one that exists wins.
pub const fn default_candidates(platform: PlatformKind) -> &'static [&'static str] {
    match platform {
        PlatformKind::Windows => WINDOWS_CANDIDATES,
        PlatformKind::MacOs => MACOS_CANDIDATES,
        PlatformKind::Linux => LINUX_CANDIDATES,
    }
}
