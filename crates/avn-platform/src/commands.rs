#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Adjustments applied to every version-manager subprocess before spawning.
pub trait ToolCommandExt {
    /// Keep the child from flashing a console window on Windows.
    fn hide_window(&mut self) -> &mut Self;

    /// Ask the child for undecorated output (no colors, no terminal escapes).
    fn plain_output(&mut self) -> &mut Self;
}

impl ToolCommandExt for tokio::process::Command {
    #[cfg(windows)]
    fn hide_window(&mut self) -> &mut Self {
        self.creation_flags(CREATE_NO_WINDOW)
    }

    #[cfg(not(windows))]
    fn hide_window(&mut self) -> &mut Self {
        self
    }

    fn plain_output(&mut self) -> &mut Self {
        self.env("NO_COLOR", "1").env("TERM", "dumb")
    }
}
