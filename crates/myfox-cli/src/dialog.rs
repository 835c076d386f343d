//! Error reporting for a launcher that has no console.

pub const ERROR_TITLE: &str = "MyFox - Error";

/// Text shown to the user for a failed launch
pub fn message_for(err: &anyhow::Error) -> String {
    match err.downcast_ref::<myfox_browser::Error>() {
        Some(launch_err) => launch_err.to_string(),
        None => format!("{:#}", err),
    }
}

/// Show a modal error box and block until it is dismissed
#[cfg(windows)]
pub fn show_error(msg: &str) {
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxW};
    use windows::core::PCWSTR;

    let title: Vec<u16> = OsStr::new(ERROR_TITLE)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();
    let text: Vec<u16> = OsStr::new(msg)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();

    unsafe {
        let _ = MessageBoxW(
            None,
            PCWSTR(text.as_ptr()),
            PCWSTR(title.as_ptr()),
            MB_OK | MB_ICONERROR,
        );
    }
}

#[cfg(not(windows))]
pub fn show_error(msg: &str) {
    eprintln!("{}\n{}", ERROR_TITLE, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_errors_use_their_own_message() {
        let err = anyhow::Error::from(myfox_browser::Error::PathResolution(
            "no such file".to_string(),
        ));

        assert_eq!(message_for(&err), "Failed to get executable path.");
    }

    #[test]
    fn test_other_errors_show_full_chain() {
        let err = anyhow::anyhow!("disk gone").context("launch failed");

        assert_eq!(message_for(&err), "launch failed: disk gone");
    }
}
