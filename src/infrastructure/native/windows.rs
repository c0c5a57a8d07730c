//! Win32 sound calls

use std::ffi::OsStr;
use std::iter;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;
use std::ptr;

use windows_sys::Win32::Media::Audio::{PlaySoundW, SND_FILENAME, SND_NODEFAULT, SND_SYNC};
use windows_sys::Win32::UI::WindowsAndMessaging::{MessageBeep, MB_OK};

use crate::application::ports::NativeSoundError;

fn to_wide(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(iter::once(0)).collect()
}

/// Play a sound file synchronously
pub(super) fn play_sound(path: &Path) -> Result<(), NativeSoundError> {
    let wide = to_wide(path.as_os_str());

    // SND_NODEFAULT: fail instead of playing the default sound for a bad file
    let played = unsafe {
        PlaySoundW(
            wide.as_ptr(),
            ptr::null_mut(),
            SND_FILENAME | SND_SYNC | SND_NODEFAULT,
        )
    };

    if played == 0 {
        return Err(NativeSoundError::Failed(format!(
            "PlaySound could not play {}",
            path.display()
        )));
    }
    Ok(())
}

/// Play the default system beep
pub(super) fn message_beep() -> Result<(), NativeSoundError> {
    if unsafe { MessageBeep(MB_OK) } == 0 {
        return Err(NativeSoundError::Failed(
            std::io::Error::last_os_error().to_string(),
        ));
    }
    Ok(())
}
