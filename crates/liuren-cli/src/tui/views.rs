use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use liuren_core::{LunarCalendar, PalaceDefinition, PalacePosition, Reading};

use super::app::{Field, FormApp, Outcome};
use crate::render;

pub fn draw_input_row<C: LunarCalendar>(frame: &mut Frame, app: &FormApp<C>, area: Rect) {
    let outer = Block::default().title(" 时间设置 ").borders(Borders::ALL);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (field, column) in Field::ALL.into_iter().zip(columns.iter()) {
        let focused = field == app.focus;
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(app.field(field)).block(
            Block::default()
                .title(format!(" {} ", field.label()))
                .borders(Borders::ALL)
                .border_style(border),
        );
        frame.render_widget(input, *column);

        if focused && !app.show_help {
            let x = column.x + 1 + app.field(field).len() as u16;
            frame.set_cursor_position((x.min(column.right().saturating_sub(2)), column.y + 1));
        }
    }
}

pub fn draw_actions(frame: &mut Frame, area: Rect) {
    let actions = Line::from(vec![
        Span::styled(" 立即占卜 ", Style::default().fg(Color::Black).bg(Color::Green).bold()),
        Span::raw(" Enter   "),
        Span::styled(" 重置 ", Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::raw(" Ctrl+R"),
    ]);
    frame.render_widget(Paragraph::new(actions), area);
}

pub fn draw_result<C: LunarCalendar>(frame: &mut Frame, app: &FormApp<C>, area: Rect) {
    let panel = Paragraph::new(result_lines(app.outcome.as_ref()))
        .block(Block::default().title(" 卦象解读 ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

/// Lines for the result panel.
pub fn result_lines(outcome: Option<&Outcome>) -> Vec<Line<'static>> {
    match outcome {
        None => vec![Line::from("按 Enter 立即占卜").style(Style::default().fg(Color::DarkGray))],
        Some(Outcome::Failure { title, message }) => vec![
            Line::from(format!("{title}：{message}")).style(Style::default().fg(Color::Red).bold()),
        ],
        Some(Outcome::Reading(reading)) => reading_lines(reading),
    }
}

fn reading_lines(reading: &Reading) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from("✨ 卦象报告").style(Style::default().bold()),
        Line::from(""),
    ];
    for (label, value) in render::summary(reading) {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}："), Style::default().fg(Color::Cyan)),
            Span::raw(value),
        ]));
    }
    for (position, palace) in reading.palaces() {
        lines.push(Line::from(""));
        lines.extend(palace_lines(position, palace));
    }
    lines
}

fn palace_lines(position: PalacePosition, palace: &PalaceDefinition) -> [Line<'static>; 4] {
    let color = if palace.fortune.is_auspicious() {
        Color::Green
    } else {
        Color::Red
    };
    [
        Line::from(format!("▍{position}")).style(Style::default().bold()),
        Line::from(vec![
            Span::raw("• 名称："),
            Span::styled(palace.name.clone(), Style::default().fg(color).bold()),
            Span::raw(format!(" ({})", palace.fortune)),
        ]),
        Line::from(format!("• 属性：{}", palace.element)),
        Line::from(format!("• 解读：{}", palace.description)),
    ]
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect) {
    let status = "Tab/↑↓:切换 数字:输入 Enter:占卜 Ctrl+R:重置 ?:帮助 Esc:退出";
    let bar = Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(bar, area);
}

pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("快捷键").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Tab / ↓     下一栏"),
        Line::from("  Shift+Tab / ↑  上一栏"),
        Line::from("  0-9         输入数字"),
        Line::from("  Backspace   删除"),
        Line::from("  Delete      清空本栏"),
        Line::from("  Enter       立即占卜"),
        Line::from("  Ctrl+R      重置为当前时间"),
        Line::from("  ?           显示/隐藏帮助"),
        Line::from("  Esc / q     退出"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" 帮助 ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use liuren_calendar::LunarTable;
    use liuren_core::Divination;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::tui::draw;

    fn app() -> FormApp<LunarTable> {
        let now = NaiveDate::from_ymd_opt(2017, 7, 23)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        FormApp::new(Divination::new(LunarTable), now)
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn screen(app: &FormApp<LunarTable>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
            .replace(' ', "")
    }

    #[test]
    fn empty_panel_prompts() {
        let lines = result_lines(None);
        assert_eq!(text(&lines[0]), "按 Enter 立即占卜");
    }

    #[test]
    fn failure_is_red() {
        let outcome = Outcome::Failure {
            title: "输入错误",
            message: "请输入有效的数字".to_string(),
        };
        let lines = result_lines(Some(&outcome));
        assert_eq!(text(&lines[0]), "输入错误：请输入有效的数字");
        assert_eq!(lines[0].style.fg, Some(Color::Red));
    }

    #[test]
    fn palace_names_colored_by_fortune() {
        let mut app = app();
        app.divine();
        let lines = result_lines(app.outcome.as_ref());
        let name_spans: Vec<_> = lines
            .iter()
            .filter(|l| text(l).starts_with("• 名称："))
            .map(|l| l.spans[1].clone())
            .collect();
        assert_eq!(name_spans.len(), 3);
        // 空亡, 空亡, 小吉
        assert_eq!(name_spans[0].style.fg, Some(Color::Red));
        assert_eq!(name_spans[1].style.fg, Some(Color::Red));
        assert_eq!(name_spans[2].content, "小吉");
        assert_eq!(name_spans[2].style.fg, Some(Color::Green));
    }

    #[test]
    fn renders_form_and_report() {
        let mut app = app();
        assert!(screen(&app).contains("按Enter立即占卜"));

        app.divine();
        let shown = screen(&app);
        assert!(shown.contains("时间设置"));
        assert!(shown.contains("2017"));
        assert!(shown.contains("卦象解读"));
        assert!(shown.contains("公历时间：2017-07-23"));
        assert!(shown.contains("时宫"));
        assert!(shown.contains("小吉"));
    }

    #[test]
    fn help_popup_renders() {
        let mut app = app();
        app.show_help = true;
        assert!(screen(&app).contains("快捷键"));
    }
}
