//! Text-to-speech child process management.

use std::process::{Child, Command, Stdio};

use parking_lot::Mutex;
use tracing::{debug, warn};

use tourguide_protocols::{NarrationEngine, NarrationError};

/// Speaks by running `command [args..] <text>`, one child at a time.
///
/// Pause and resume suspend the child with `SIGSTOP`/`SIGCONT`. The volume is
/// fixed when the child starts; changes apply from the next utterance.
pub struct ProcessNarrator {
    command: String,
    args: Vec<String>,
    child: Mutex<Option<Child>>,
    volume: Mutex<f32>,
}

impl ProcessNarrator {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            child: Mutex::new(None),
            volume: Mutex::new(1.0),
        }
    }

    pub fn volume(&self) -> f32 {
        *self.volume.lock()
    }

    /// Whether a child is currently alive.
    pub fn is_active(&self) -> bool {
        self.child.lock().is_some()
    }

    fn signal(&self, pause: bool) -> Result<(), NarrationError> {
        let guard = self.child.lock();
        let Some(child) = guard.as_ref() else {
            return Ok(());
        };

        #[cfg(unix)]
        {
            use nix::sys::signal::{Signal, kill};
            use nix::unistd::Pid;

            let signal = if pause { Signal::SIGSTOP } else { Signal::SIGCONT };
            kill(Pid::from_raw(child.id() as i32), signal)
                .map_err(|e| NarrationError::Playback(format!("Failed to send signal: {}", e)))
        }

        #[cfg(not(unix))]
        {
            let _ = (child, pause);
            Err(NarrationError::Unavailable(
                "pause is not supported on this platform".to_string(),
            ))
        }
    }
}

/// Substitute the volume placeholders in `args`.
pub fn render_args(args: &[String], volume: f32) -> Vec<String> {
    let volume = volume.clamp(0.0, 1.0);
    let amplitude = (volume * 200.0).round() as u32;
    args.iter()
        .map(|arg| {
            arg.replace("{amplitude}", &amplitude.to_string())
                .replace("{volume}", &format!("{:.2}", volume))
        })
        .collect()
}

impl NarrationEngine for ProcessNarrator {
    fn speak(&self, text: &str, volume: f32) -> Result<(), NarrationError> {
        self.stop();
        *self.volume.lock() = volume;

        let child = Command::new(&self.command)
            .args(render_args(&self.args, volume))
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| NarrationError::Unavailable(format!("{}: {}", self.command, e)))?;

        debug!("Started narration process {} (pid {})", self.command, child.id());
        *self.child.lock() = Some(child);
        Ok(())
    }

    fn pause(&self) -> Result<(), NarrationError> {
        self.signal(true)
    }

    fn resume(&self) -> Result<(), NarrationError> {
        self.signal(false)
    }

    fn stop(&self) {
        if let Some(mut child) = self.child.lock().take() {
            if let Err(e) = child.kill() {
                debug!("Narration process already gone: {}", e);
            }
            if let Err(e) = child.wait() {
                warn!("Failed to reap narration process: {}", e);
            }
        }
    }

    fn set_volume(&self, volume: f32) {
        *self.volume.lock() = volume;
    }

    fn poll_ended(&self) -> bool {
        let mut guard = self.child.lock();
        let Some(child) = guard.as_mut() else {
            return false;
        };
        match child.try_wait() {
            Ok(Some(status)) => {
                debug!("Narration process exited: {}", status);
                *guard = None;
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to poll narration process: {}", e);
                *guard = None;
                true
            }
        }
    }
}

impl Drop for ProcessNarrator {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
