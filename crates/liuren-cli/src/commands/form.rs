use crate::config::ShellConfig;
use crate::tui;

pub fn run(config: &ShellConfig) -> Result<(), String> {
    tui::run(config.divination()?)
}
