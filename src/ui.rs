use crate::app::{App, ViewMode};
use crate::content::{self, MessageKind};
use crate::help;
use crate::lessons::{
    AuthLesson, DeviceLesson, Lesson, PasswordLesson, PhishingLesson, TransactionLesson,
};
use crate::models::{BadgeLevel, EarnedBadge};
use crate::password;
use crate::reports;
use rat_text::{HasScreenCursor, text_area::TextAreaState};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Fixed size of the badge celebration overlay.
const AWARD_OVERLAY_WIDTH: u16 = 46;
const AWARD_OVERLAY_HEIGHT: u16 = 12;

/// Renders the user interface widgets.
pub fn render(app: &mut App, frame: &mut Frame) {
    // Update terminal dimensions
    app.terminal_height = frame.area().height;

    match app.view_mode {
        ViewMode::ModuleList => render_module_list(app, frame),
        ViewMode::Badges => render_badges_view(app, frame),
        ViewMode::Help => render_help_view(app, frame),
        ViewMode::Lesson => render_lesson_view(app, frame),
    }

    // Celebration overlay sits on top of whatever view is active.
    if let Some(award) = app.pending_awards.front() {
        render_award_overlay(frame, award);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(" sectrain: security awareness training ")
        .style(Style::new().bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::TOP);
    let status_text = format!(" {} ", app.status_message);
    let paragraph = Paragraph::new(status_text)
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn standard_layout(frame: &Frame) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status
        ])
        .split(frame.area())
}

// --- Module list ---

fn render_module_list(app: &App, frame: &mut Frame) {
    let layout = standard_layout(frame);
    render_header(frame, layout[0]);

    let content_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Progress bar
            Constraint::Min(0),    // Module cards
        ])
        .split(layout[1]);

    render_overall_progress(app, frame, content_layout[0]);
    render_module_cards(app, frame, content_layout[1]);
    render_status_bar(app, frame, layout[2]);
}

fn render_overall_progress(app: &App, frame: &mut Frame, area: Rect) {
    let completed = app.completed_modules();
    let total = content::MODULES.len();

    let block = Block::default()
        .title("Progress")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar_width = inner.width.saturating_sub(2) as usize;
    let filled = if total > 0 {
        bar_width * completed / total
    } else {
        0
    };
    let lines = vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
            Span::styled(
                "░".repeat(bar_width.saturating_sub(filled)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!(" {} of {} completed", completed, total)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_module_cards(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        " Learning Modules",
        Style::new().bold(),
    )));
    lines.push(Line::from(""));

    for (i, module) in content::MODULES.iter().enumerate() {
        let selected = i == app.selected_module;
        let marker = if selected { " > " } else { "   " };
        let title_style = if selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default()
        };

        let mut title_spans = vec![
            Span::raw(marker),
            Span::styled(format!("{} {}", module.icon, module.title), title_style),
        ];
        if app.progress.is_module_completed(module.id) {
            title_spans.push(Span::styled(
                "  ✓ Completed",
                Style::default().fg(Color::Green),
            ));
        }
        lines.push(Line::from(title_spans));
        lines.push(Line::from(Span::styled(
            format!("     {}", module.description),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

// --- Lesson views ---

fn render_lesson_view(app: &mut App, frame: &mut Frame) {
    let layout = standard_layout(frame);
    render_header(frame, layout[0]);

    let is_editing = app.is_editing;
    match app.lesson.as_mut() {
        Some(Lesson::Password(lesson)) => {
            render_password_lesson(lesson, is_editing, frame, layout[1]);
        }
        Some(Lesson::Auth(lesson)) => render_auth_lesson(lesson, frame, layout[1]),
        Some(Lesson::Transaction(lesson)) => render_transaction_lesson(lesson, frame, layout[1]),
        Some(Lesson::Device(lesson)) => render_device_lesson(lesson, frame, layout[1]),
        Some(Lesson::Phishing(lesson)) => render_phishing_lesson(lesson, frame, layout[1]),
        None => {}
    }

    render_status_bar(app, frame, layout[2]);
}

fn render_password_lesson(
    lesson: &mut PasswordLesson,
    is_editing: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(3), // Strength bar
            Constraint::Length(7), // Crack times
            Constraint::Min(0),    // Tips
        ])
        .split(area);

    clamp_textarea_scroll(&mut lesson.input);

    let border_style = if is_editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Blue)
    };
    let input_block = Block::default()
        .title("Password (i: edit, Esc: done, c: mark complete)")
        .borders(Borders::ALL)
        .border_style(border_style);

    use rat_text::text_area::{TextArea, TextWrap};
    let textarea = TextArea::new()
        .block(input_block)
        .text_wrap(TextWrap::Word(2))
        .style(Style::default());
    frame.render_stateful_widget(textarea, layout[0], &mut lesson.input);

    let candidate = lesson.password();
    let strength = password::calculate_strength(&candidate);
    let label = password::strength_label(strength);
    let color = strength_color(strength);

    let strength_block = Block::default().borders(Borders::ALL).title("Strength");
    let inner = strength_block.inner(layout[1]);
    frame.render_widget(strength_block, layout[1]);
    let bar_width = inner.width.saturating_sub(14) as usize;
    let filled = bar_width * strength as usize / 100;
    let strength_line = Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(bar_width.saturating_sub(filled)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!(" {}", label), Style::default().fg(color).bold()),
    ]);
    frame.render_widget(Paragraph::new(strength_line), inner);

    render_crack_times(&candidate, frame, layout[2]);
    render_password_tips(frame, layout[3]);

    // Place the cursor inside the input while editing.
    if is_editing && let Some((cx, cy)) = lesson.input.screen_cursor() {
        frame.set_cursor_position((cx, cy));
    }
}

fn render_crack_times(candidate: &str, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Time to crack");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if candidate.is_empty() {
        let hint = Paragraph::new("Enter a password to see how long it would take to crack.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, inner);
        return;
    }

    let times = password::estimate_crack_times(candidate);
    let lines = vec![
        Line::from(format!("Regular Computer:  {}", times.regular)),
        Line::from(format!("Supercomputer:     {}", times.supercomputer)),
        Line::from(format!("Quantum Computer:  {}", times.quantum)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_password_tips(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Tips for Strong Passwords");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = content::PASSWORD_TIPS
        .iter()
        .map(|tip| Line::from(format!("• {}", tip)))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn strength_color(strength: u8) -> Color {
    if strength >= 80 {
        Color::Green
    } else if strength >= 60 {
        Color::LightGreen
    } else if strength >= 40 {
        Color::Yellow
    } else if strength >= 20 {
        Color::LightRed
    } else {
        Color::Red
    }
}

fn render_auth_lesson(lesson: &AuthLesson, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Method list
            Constraint::Length(6), // Demo
        ])
        .split(area);

    let block = Block::default()
        .title("Multi-Factor Authentication (j/k: browse, Enter: demo, c: complete)")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(layout[0]);
    frame.render_widget(block, layout[0]);

    let mut lines = Vec::new();
    for (i, method) in content::MFA_TYPES.iter().enumerate() {
        let selected = i == lesson.selected;
        let marker = if selected { "> " } else { "  " };
        let title_style = if selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default()
        };
        let dots = "●".repeat(method.strength_level as usize);
        let empty_dots = "○".repeat(5usize.saturating_sub(method.strength_level as usize));
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(method.title, title_style),
            Span::raw("  "),
            Span::styled(dots, Style::default().fg(Color::Green)),
            Span::styled(empty_dots, Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", method.description),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    render_mfa_demo(lesson, frame, layout[1]);
}

fn render_mfa_demo(lesson: &AuthLesson, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Demo");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !lesson.show_demo {
        let hint = Paragraph::new("Select a method and press Enter to see how it works.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, inner);
        return;
    }

    let method = &content::MFA_TYPES[lesson.selected];
    let lines = match method.id {
        "authenticator" => vec![
            Line::from(Span::styled(
                format!("  {}", lesson.code()),
                Style::new().bold().fg(Color::Green),
            )),
            Line::from(format!("  expires in {}s", lesson.seconds_left())),
        ],
        "biometric" => vec![Line::from("  Touch sensor to authenticate")],
        _ => vec![Line::from(Span::styled(
            "  No interactive demo for this method.",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_transaction_lesson(lesson: &TransactionLesson, frame: &mut Frame, area: Rect) {
    let scenario = &content::SCENARIOS[lesson.current];

    let block = Block::default()
        .title(format!(
            "Transaction Safety | Score: {}/{}",
            lesson.score,
            content::SCENARIOS.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(scenario.title, Style::new().bold())),
        Line::from(Span::styled(
            scenario.description,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(format!("Amount:    {}", scenario.amount)),
        Line::from(format!("Recipient: {}", scenario.recipient)),
        Line::from(format!("Location:  {}", scenario.location)),
        Line::from(format!("Time:      {}", scenario.time)),
        Line::from(format!("Frequency: {}", scenario.frequency)),
        Line::from(""),
    ];

    if lesson.show_result {
        if scenario.risky {
            lines.push(Line::from(Span::styled(
                "Red Flags:",
                Style::default().fg(Color::Red).bold(),
            )));
            for flag in scenario.red_flags {
                lines.push(Line::from(Span::styled(
                    format!("• {}", flag),
                    Style::default().fg(Color::Red),
                )));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "✓ This is a safe transaction",
                Style::default().fg(Color::Green),
            )));
        }
        lines.push(Line::from(""));
        if lesson.finished() {
            lines.push(Line::from("All scenarios done. Press 'c' to mark complete."));
        } else {
            lines.push(Line::from("Press 'n' for the next scenario."));
        }
    } else {
        lines.push(Line::from("Is this transaction safe or risky?  s: safe | r: risky"));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_device_lesson(lesson: &DeviceLesson, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(
            "Device Security Checklist | {}% (Space: toggle, j/k: move)",
            lesson.progress_percent()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    let mut cursor_line: u16 = 0;
    let mut index = 0usize;
    for section in &content::SECURITY_CHECKS {
        lines.push(Line::from(Span::styled(section.title, Style::new().bold())));
        for item in section.items {
            let checked = lesson.checked.contains(&index);
            let marker = if checked { "[x]" } else { "[ ]" };
            let cursor = if index == lesson.cursor { "> " } else { "  " };
            if index == lesson.cursor {
                cursor_line = lines.len() as u16;
            }
            let mut spans = vec![
                Span::raw(cursor),
                Span::styled(
                    marker,
                    if checked {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default()
                    },
                ),
                Span::raw(format!(" {}", item.title)),
            ];
            if item.critical {
                spans.push(Span::styled(" !", Style::default().fg(Color::Red).bold()));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(Span::styled(
                format!("      {}", item.description),
                Style::default().fg(Color::DarkGray),
            )));
            index += 1;
        }
        lines.push(Line::from(""));
    }

    if lesson.all_checked() {
        lines.push(Line::from(Span::styled(
            "All checks done. Press 'c' to mark complete.",
            Style::default().fg(Color::Green),
        )));
    }

    // Keep the cursor row visible.
    let visible = inner.height;
    let scroll = cursor_line.saturating_sub(visible.saturating_sub(3));
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn render_phishing_lesson(lesson: &PhishingLesson, frame: &mut Frame, area: Rect) {
    let example = &content::PHISHING_EXAMPLES[lesson.index];

    let block = Block::default()
        .title(format!(
            "Phishing Prevention | Example {}/{} | Score: {}",
            lesson.index + 1,
            content::PHISHING_EXAMPLES.len(),
            lesson.score
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let kind = match example.kind {
        MessageKind::Email => "Email",
        MessageKind::Sms => "SMS",
    };
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} | {}", kind, example.title),
            Style::new().bold(),
        )),
        Line::from(format!("From: {}", example.from)),
    ];
    if let Some(subject) = example.subject {
        lines.push(Line::from(format!("Subject: {}", subject)));
    }
    lines.push(Line::from(format!("Received: {}", example.time)));
    lines.push(Line::from(""));
    for body_line in example.body.lines() {
        lines.push(Line::from(body_line));
    }
    lines.push(Line::from(""));

    if lesson.completed {
        lines.push(Line::from(Span::styled(
            "All examples reviewed. Press 'c' to mark complete.",
            Style::default().fg(Color::Green),
        )));
    } else if let Some(correct) = lesson.feedback {
        let (verdict, color) = if correct {
            ("Correct!", Color::Green)
        } else {
            ("Incorrect!", Color::Red)
        };
        lines.push(Line::from(Span::styled(
            verdict,
            Style::default().fg(color).bold(),
        )));
        lines.push(Line::from("Indicators:"));
        for indicator in example.indicators {
            lines.push(Line::from(format!("• {}", indicator)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("Press 'n' to continue."));
    } else {
        lines.push(Line::from(
            "Is this message genuine?  ←: suspicious | →: legitimate",
        ));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// --- Badges and help ---

fn render_badges_view(app: &App, frame: &mut Frame) {
    let layout = standard_layout(frame);
    render_header(frame, layout[0]);
    reports::render_badges_report(frame, layout[1], app);
    render_status_bar(app, frame, layout[2]);
}

fn render_help_view(app: &App, frame: &mut Frame) {
    let layout = standard_layout(frame);
    render_header(frame, layout[0]);

    let block = Block::default()
        .title("Help (j/k: scroll, h: close)")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(help::get_help_content())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0))
        .style(Style::default());

    frame.render_widget(paragraph, layout[1]);
    render_status_bar(app, frame, layout[2]);
}

// --- Award overlay ---

fn render_award_overlay(frame: &mut Frame, award: &EarnedBadge) {
    let overlay_area = award_overlay_area(frame.area());

    frame.render_widget(Clear, overlay_area);
    let background = Paragraph::new("").style(Style::default().bg(Color::Black));
    frame.render_widget(background, overlay_area);

    let block = Block::default()
        .title(" Congratulations! ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(level_color(award.level)))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            award.icon.as_str(),
            Style::new().bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            award.title.as_str(),
            Style::new().bold().fg(level_color(award.level)),
        )),
        Line::from(award.description.as_str()),
        Line::from(Span::styled(
            format!("{} badge", award.level.label()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from("Press Enter to continue"),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(paragraph, inner);
}

pub fn level_color(level: BadgeLevel) -> Color {
    match level {
        BadgeLevel::Gold => Color::Yellow,
        BadgeLevel::Silver => Color::Gray,
        BadgeLevel::Bronze => Color::LightRed,
    }
}

/// Center the fixed-size celebration overlay, clamped to the screen.
fn award_overlay_area(full_area: Rect) -> Rect {
    let width = AWARD_OVERLAY_WIDTH.min(full_area.width);
    let height = AWARD_OVERLAY_HEIGHT.min(full_area.height);
    let x = full_area.x + full_area.width.saturating_sub(width) / 2;
    let y = full_area.y + full_area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// rat-text skips drawing entirely when the offset exceeds the line count,
/// so correct the offsets before rendering.
fn clamp_textarea_scroll(state: &mut TextAreaState) {
    let max_v = state.len_lines().saturating_sub(1) as usize;
    if state.vscroll.offset > max_v {
        state.vscroll.offset = max_v;
    }
    state.hscroll.offset = state.hscroll.limited_offset(state.hscroll.offset);
}
