//! Traditional Chinese names for lunar dates.

use liuren_core::LunarDate;

/// Chinese numerals; index 0 is 十 so day names can index by `day % 10`.
const NUMERALS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Stem-branch (干支) name of a lunar year.
///
/// ```
/// assert_eq!(liuren_calendar::fmt::sexagenary_year(2024), "甲辰");
/// ```
pub fn sexagenary_year(year: i32) -> String {
    let cycle = year - 4;
    let stem = STEMS[cycle.rem_euclid(10) as usize];
    let branch = BRANCHES[cycle.rem_euclid(12) as usize];
    format!("{stem}{branch}")
}

/// Month name including 月, e.g. `正月`, `闰六月`, `腊月`.
///
/// Numbers outside 1-12 render as plain digits.
pub fn month_name(month: u32, is_leap: bool) -> String {
    let number = match month {
        1 => "正".to_string(),
        2..=10 => NUMERALS[month as usize % 10].to_string(),
        11 => "冬".to_string(),
        12 => "腊".to_string(),
        other => other.to_string(),
    };
    let leap = if is_leap { "闰" } else { "" };
    format!("{leap}{number}月")
}

/// Day name, e.g. `初一`, `十五`, `廿三`, `三十`.
///
/// Numbers outside 1-30 render as plain digits.
pub fn day_name(day: u32) -> String {
    let prefix = match day {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => return day.to_string(),
    };
    format!("{prefix}{}", NUMERALS[day as usize % 10])
}

/// Full traditional name, e.g. `甲辰年闰六月初一`.
pub fn lunar_date(date: &LunarDate) -> String {
    format!(
        "{}年{}{}",
        sexagenary_year(date.year),
        month_name(date.month, date.is_leap_month),
        day_name(date.day)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years() {
        for (year, name) in [(1900, "庚子"), (1984, "甲子"), (2000, "庚辰"), (2017, "丁酉")] {
            assert_eq!(sexagenary_year(year), name);
        }
    }

    #[test]
    fn months() {
        assert_eq!(month_name(1, false), "正月");
        assert_eq!(month_name(6, true), "闰六月");
        assert_eq!(month_name(10, false), "十月");
        assert_eq!(month_name(11, false), "冬月");
        assert_eq!(month_name(12, false), "腊月");
    }

    #[test]
    fn days() {
        for (day, name) in [(1, "初一"), (10, "初十"), (11, "十一"), (20, "二十"), (21, "廿一"), (30, "三十")] {
            assert_eq!(day_name(day), name);
        }
    }

    #[test]
    fn full_name() {
        let date = LunarDate::new(2017, 6, 1, true);
        assert_eq!(lunar_date(&date), "丁酉年闰六月初一");
    }
}
