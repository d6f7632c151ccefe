mod infer;

pub use infer::output as infer_output_format;

use std::io::{self, IsTerminal};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}
