use chrono::Local;

use crate::config::ShellConfig;
use crate::render;

pub fn run(
    config: &ShellConfig,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    json: bool,
) -> Result<(), String> {
    let divination = config.divination()?;

    let reading = match (year, month, day, hour) {
        (Some(year), Some(month), Some(day), Some(hour)) => {
            divination.compute(year, month, day, hour)
        }
        (None, None, None, None) => divination.compute_at(Local::now().naive_local()),
        _ => return Err("give YEAR MONTH DAY HOUR together, or none for now".into()),
    }
    .map_err(|e| e.to_string())?;

    if json {
        let text = serde_json::to_string_pretty(&reading).map_err(|e| format!("json error: {e}"))?;
        println!("{text}");
    } else {
        print!("{}", render::report(&reading));
    }

    Ok(())
}
