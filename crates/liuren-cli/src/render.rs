//! Text rendering of readings shared by the shells.

use colored::Colorize;

use liuren_core::{PalaceDefinition, PalacePosition, Reading};

/// Label/value pairs for the report header.
pub fn summary(reading: &Reading) -> [(&'static str, String); 3] {
    [
        ("公历时间", reading.solar_display()),
        (
            "农历时间",
            format!(
                "{} ({})",
                reading.lunar_description,
                liuren_calendar::fmt::lunar_date(&reading.lunar)
            ),
        ),
        ("当前时辰", reading.hour_slot.to_string()),
    ]
}

/// The block describing one palace.
pub fn palace_block(position: PalacePosition, palace: &PalaceDefinition) -> String {
    let name = if palace.fortune.is_auspicious() {
        palace.name.green().bold()
    } else {
        palace.name.red().bold()
    };
    format!(
        "▍{position}卦象\n• 名称：{name}\n• 吉凶：{}\n• 五行：{}\n• 解读：{}",
        palace.fortune, palace.element, palace.description
    )
}

/// The whole report in one string.
pub fn report(reading: &Reading) -> String {
    let mut out = format!("{}\n====================\n", "✨ 小六壬卦象报告".bold());
    for (label, value) in summary(reading) {
        out.push_str(&format!("{label}：{value}\n"));
    }
    for (position, palace) in reading.palaces() {
        out.push('\n');
        out.push_str(&palace_block(position, palace));
        out.push('\n');
    }
    out
}
