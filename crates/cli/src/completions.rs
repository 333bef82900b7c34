// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation
//!
//! ```bash
//! gate completions bash > ~/.local/share/bash-completion/completions/gate
//! gate completions zsh > ~/.zfunc/_gate
//! gate completions fish > ~/.config/fish/completions/gate.fish
//! ```

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "gate", &mut io::stdout());
}
