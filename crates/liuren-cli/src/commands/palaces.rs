use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use crate::config::ShellConfig;

pub fn run(config: &ShellConfig) -> Result<(), String> {
    let tables = config.tables()?;

    let mut palaces = Table::new();
    palaces.set_content_arrangement(ContentArrangement::Dynamic);
    palaces.set_header(vec!["#", "宫", "吉凶", "五行", "解读"]);
    for (i, palace) in tables.palaces().iter().enumerate() {
        palaces.add_row(vec![
            i.to_string(),
            palace.name.clone(),
            palace.fortune.to_string(),
            palace.element.to_string(),
            palace.description.clone(),
        ]);
    }

    let mut hours = Table::new();
    hours.set_content_arrangement(ContentArrangement::Dynamic);
    hours.set_header(vec!["#", "时辰", "时间"]);
    for (i, slot) in tables.hour_slots().iter().enumerate() {
        hours.add_row(vec![i.to_string(), slot.name.clone(), slot.display_range.clone()]);
    }

    println!("{}", "六宫".bold());
    println!("{palaces}");
    println!();
    println!("{}", "十二时辰".bold());
    println!("{hours}");

    Ok(())
}
