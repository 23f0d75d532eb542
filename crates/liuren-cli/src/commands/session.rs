use std::io;

use chrono::Local;

use crate::config::ShellConfig;
use crate::session::PromptSession;

pub fn run(config: &ShellConfig) -> Result<(), String> {
    let divination = config.divination()?;
    let stdin = io::stdin();
    let mut session = PromptSession::new(
        &divination,
        stdin.lock(),
        io::stdout(),
        Local::now().naive_local(),
    )
    .with_pause(config.pause);

    session.run().map_err(|e| format!("io error: {e}"))
}
