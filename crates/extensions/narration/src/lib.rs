//! Speech narration through an external text-to-speech program.

mod process;

pub use process::{ProcessNarrator, render_args};
