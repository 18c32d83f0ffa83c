// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for the actkit CLI.
//!
//! ```bash
//! actkit completions bash > ~/.local/share/bash-completion/completions/actkit
//! actkit completions zsh > ~/.zfunc/_actkit
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Write completions for `shell` to `out`
pub fn generate_completions<C: CommandFactory>(shell: Shell, out: &mut impl Write) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "actkit", out);
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
