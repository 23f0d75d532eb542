use chrono::{Datelike, NaiveDateTime, Timelike};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use liuren_core::{Divination, LunarCalendar, Reading};

/// Input fields of the form, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Year, Self::Month, Self::Day, Self::Hour];

    pub fn label(self) -> &'static str {
        match self {
            Self::Year => "年",
            Self::Month => "月",
            Self::Day => "日",
            Self::Hour => "时",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }

    fn max_len(self) -> usize {
        match self {
            Self::Year => 4,
            _ => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What the result panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reading(Box<Reading>),
    Failure { title: &'static str, message: String },
}

pub struct FormApp<C> {
    pub divination: Divination<C>,
    pub fields: [String; 4],
    pub focus: Field,
    pub outcome: Option<Outcome>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl<C: LunarCalendar> FormApp<C> {
    pub fn new(divination: Divination<C>, now: NaiveDateTime) -> Self {
        let mut app = Self {
            divination,
            fields: Default::default(),
            focus: Field::Year,
            outcome: None,
            show_help: false,
            should_quit: false,
        };
        app.fill_from(now);
        app
    }

    pub fn field(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    fn fill_from(&mut self, now: NaiveDateTime) {
        self.fields = [
            now.year().to_string(),
            now.month().to_string(),
            now.day().to_string(),
            now.hour().to_string(),
        ];
    }

    /// Refill the fields with `now` and clear the result.
    pub fn reset(&mut self, now: NaiveDateTime) {
        self.fill_from(now);
        self.focus = Field::Year;
        self.outcome = None;
    }

    pub fn push_digit(&mut self, c: char) {
        let focus = self.focus;
        let text = &mut self.fields[focus.index()];
        if c.is_ascii_digit() && text.len() < focus.max_len() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.fields[self.focus.index()].pop();
    }

    pub fn clear_field(&mut self) {
        self.fields[self.focus.index()].clear();
    }

    /// Parse the fields and cast a reading into the result panel.
    pub fn divine(&mut self) {
        let Some((year, month, day, hour)) = self.parse_fields() else {
            self.outcome = Some(Outcome::Failure {
                title: "输入错误",
                message: "请输入有效的数字".to_string(),
            });
            return;
        };

        self.outcome = Some(match self.divination.compute(year, month, day, hour) {
            Ok(reading) => Outcome::Reading(Box::new(reading)),
            Err(e) => Outcome::Failure {
                title: "计算错误",
                message: format!("算法异常：{e}"),
            },
        });
    }

    fn parse_fields(&self) -> Option<(i32, u32, u32, u32)> {
        Some((
            self.field(Field::Year).parse().ok()?,
            self.field(Field::Month).parse().ok()?,
            self.field(Field::Day).parse().ok()?,
            self.field(Field::Hour).parse().ok()?,
        ))
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: NaiveDateTime) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.reset(now),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc if self.show_help => self.show_help = false,
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Tab | KeyCode::Down | KeyCode::Right => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Left => self.focus = self.focus.prev(),
            KeyCode::Enter => self.divine(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.clear_field(),
            KeyCode::Char(c) => self.push_digit(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use liuren_calendar::LunarTable;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 0)
            .unwrap()
    }

    fn app() -> FormApp<LunarTable> {
        FormApp::new(Divination::new(LunarTable), at(2024, 2, 10, 23))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_into(app: &mut FormApp<LunarTable>, text: &str) {
        app.handle_key(key(KeyCode::Delete), at(2000, 1, 1, 0));
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)), at(2000, 1, 1, 0));
        }
    }

    #[test]
    fn prefilled_from_now() {
        let app = app();
        let values: Vec<_> = Field::ALL.iter().map(|f| app.field(*f)).collect();
        assert_eq!(values, ["2024", "2", "10", "23"]);
        assert_eq!(app.focus, Field::Year);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn focus_cycles() {
        assert_eq!(Field::Hour.next(), Field::Year);
        assert_eq!(Field::Year.prev(), Field::Hour);
        let mut app = app();
        app.handle_key(key(KeyCode::Tab), at(2000, 1, 1, 0));
        app.handle_key(key(KeyCode::Tab), at(2000, 1, 1, 0));
        assert_eq!(app.focus, Field::Day);
        app.handle_key(key(KeyCode::BackTab), at(2000, 1, 1, 0));
        assert_eq!(app.focus, Field::Month);
    }

    #[test]
    fn editing_limits_length_and_digits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab), at(2000, 1, 1, 0));
        type_into(&mut app, "1x23");
        assert_eq!(app.field(Field::Month), "12");
        app.handle_key(key(KeyCode::Backspace), at(2000, 1, 1, 0));
        assert_eq!(app.field(Field::Month), "1");
    }

    #[test]
    fn divine_with_prefilled_time() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter), at(2000, 1, 1, 0));
        let Some(Outcome::Reading(reading)) = &app.outcome else {
            panic!("expected a reading, got {:?}", app.outcome);
        };
        assert_eq!(reading.lunar_description, "1月1日");
        assert_eq!(reading.hour_slot.name, "子");
        assert_eq!(reading.hour_palace.name, "大安");
    }

    #[test]
    fn empty_field_is_input_error() {
        let mut app = app();
        app.handle_key(key(KeyCode::Delete), at(2000, 1, 1, 0));
        app.divine();
        assert_eq!(
            app.outcome,
            Some(Outcome::Failure {
                title: "输入错误",
                message: "请输入有效的数字".to_string()
            })
        );
    }

    #[test]
    fn impossible_date_is_calculation_error() {
        let mut app = app();
        app.focus = Field::Month;
        type_into(&mut app, "13");
        app.divine();
        let Some(Outcome::Failure { title, message }) = &app.outcome else {
            panic!("expected a failure");
        };
        assert_eq!(*title, "计算错误");
        assert!(message.starts_with("算法异常：invalid input"));
    }

    #[test]
    fn reset_refills_and_clears() {
        let mut app = app();
        app.divine();
        app.focus = Field::Hour;
        app.handle_key(ctrl('r'), at(2017, 7, 23, 9));
        assert_eq!(app.field(Field::Year), "2017");
        assert_eq!(app.field(Field::Hour), "9");
        assert_eq!(app.focus, Field::Year);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('?')), at(2000, 1, 1, 0));
        assert!(app.show_help);
        app.handle_key(key(KeyCode::Esc), at(2000, 1, 1, 0));
        assert!(!app.show_help);
        assert!(!app.should_quit);
        app.handle_key(key(KeyCode::Esc), at(2000, 1, 1, 0));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(ctrl('c'), at(2000, 1, 1, 0));
        assert!(app.should_quit);
    }
}
