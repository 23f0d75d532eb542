//! Line-prompt divination session.
//!
//! Asks for the date and hour field by field, defaulting each to the
//! current time, prints the reading one palace at a time, and offers to
//! cast again.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike};

use liuren_core::{Divination, LunarCalendar, Reading};

use crate::render;

/// A prompt session over any line reader and writer.
pub struct PromptSession<'a, C, R, W> {
    divination: &'a Divination<C>,
    input: R,
    output: W,
    defaults: NaiveDateTime,
    pause: bool,
}

impl<'a, C: LunarCalendar, R: BufRead, W: Write> PromptSession<'a, C, R, W> {
    /// Create a session. Field defaults come from `defaults`.
    pub fn new(divination: &'a Divination<C>, input: R, output: W, defaults: NaiveDateTime) -> Self {
        Self {
            divination,
            input,
            output,
            defaults,
            pause: true,
        }
    }

    /// Wait for Enter before the palaces and between them.
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Consume the session and return the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user declines to continue or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "欢迎使用小六壬占卜系统")?;
        writeln!(self.output, "====================")?;

        let mut casts = 0u32;
        while self.cast_once()? {
            casts += 1;
            let Some(answer) = self.read_line("\n是否继续占卜？(y/n): ")? else {
                break;
            };
            if !answer.trim().eq_ignore_ascii_case("y") {
                break;
            }
        }

        tracing::debug!(casts, "prompt session finished");
        writeln!(self.output, "\n感谢使用，再见！")?;
        self.output.flush()
    }

    /// Ask for one date and show its reading. Returns `false` on end of input.
    fn cast_once(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n请输入占卜时间：")?;
        let defaults = self.defaults;
        let Some(year) = self.ask("年份", defaults.year())? else {
            return Ok(false);
        };
        let Some(month) = self.ask("月份", defaults.month())? else {
            return Ok(false);
        };
        let Some(day) = self.ask("日期", defaults.day())? else {
            return Ok(false);
        };
        let Some(hour) = self.ask("小时", defaults.hour())? else {
            return Ok(false);
        };

        match self.divination.compute(year, month, day, hour) {
            Ok(reading) => self.show(&reading),
            Err(e) => {
                writeln!(self.output, "\n错误: {e}")?;
                Ok(true)
            }
        }
    }

    /// Print a reading, pausing between sections. Returns `false` on end of input.
    fn show(&mut self, reading: &Reading) -> io::Result<bool> {
        writeln!(self.output, "\n✨ 小六壬卦象报告")?;
        writeln!(self.output, "====================")?;
        for (label, value) in render::summary(reading) {
            writeln!(self.output, "{label}：{value}")?;
        }
        if !self.wait("\n按Enter键查看卦象...")? {
            return Ok(false);
        }

        for (i, (position, palace)) in reading.palaces().enumerate() {
            if i > 0 && !self.wait("\n按Enter键查看下一卦象...")? {
                return Ok(false);
            }
            writeln!(self.output, "\n{}", render::palace_block(position, palace))?;
        }
        Ok(true)
    }

    /// Prompt for a number until one parses; empty input takes the default.
    fn ask<T: FromStr + Display + Copy>(&mut self, label: &str, default: T) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(&format!("{label} (默认: {default}): "))? else {
                return Ok(None);
            };
            let line = line.trim();
            if line.is_empty() {
                return Ok(Some(default));
            }
            match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "输入无效，请重新输入！")?,
            }
        }
    }

    fn wait(&mut self, prompt: &str) -> io::Result<bool> {
        if !self.pause {
            return Ok(true);
        }
        Ok(self.read_line(prompt)?.is_some())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}
