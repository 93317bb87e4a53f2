use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use expense_core::{ExtractedReceipt, ScanSession, View};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

use crate::picker::{PathPrompt, PickerOutcome};

pub fn run_tui(session: &mut ScanSession) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = scan_loop(&mut terminal, session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn scan_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut ScanSession,
) -> Result<()> {
    let mut picker: Option<PathPrompt> = None;

    loop {
        session.pump();

        terminal.draw(|f| draw(f, session.view(), picker.as_ref()))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(prompt) = picker.as_mut() {
            let outcome = match key.code {
                KeyCode::Esc => prompt.cancel(),
                KeyCode::Enter => prompt.submit(),
                KeyCode::Backspace => {
                    prompt.pop();
                    PickerOutcome::Open
                }
                KeyCode::Char(c) => {
                    prompt.push(c);
                    PickerOutcome::Open
                }
                _ => PickerOutcome::Open,
            };
            match outcome {
                PickerOutcome::Open => {}
                PickerOutcome::Picked(image) => {
                    picker = None;
                    session.upload(Some(image));
                }
                PickerOutcome::Cancelled => {
                    picker = None;
                    session.upload(None);
                }
            }
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Char('u') | KeyCode::Enter => picker = Some(PathPrompt::new()),
            KeyCode::Char('c') => session.clear(),
            _ => {}
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, view: View<'_>, picker: Option<&PathPrompt>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new(Text::from(vec![
        Line::from(Span::styled(
            "Expense Scanner",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Upload your receipt",
            Style::default().fg(Color::Gray),
        )),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Paragraph::new(Text::from(body_lines(view)))
        .block(Block::default().borders(Borders::ALL).title(body_title(view)))
        .wrap(Wrap { trim: false });
    f.render_widget(body, chunks[1]);

    let footer = match picker {
        Some(prompt) => {
            let title = match &prompt.error {
                Some(e) => format!("image path (Enter=open, Esc=cancel) - {e}"),
                None => "image path (Enter=open, Esc=cancel)".to_string(),
            };
            Paragraph::new(prompt.input.as_str())
                .block(Block::default().borders(Borders::ALL).title(title))
                .style(Style::default().fg(Color::White))
        }
        None => Paragraph::new(footer_hint(view))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray)),
    };
    f.render_widget(footer, chunks[2]);
}

fn body_title(view: View<'_>) -> &'static str {
    match view {
        View::UploadPrompt => "upload",
        _ => "Extracted Details",
    }
}

fn footer_hint(view: View<'_>) -> &'static str {
    match view {
        View::UploadPrompt => "u=choose file, q=quit",
        _ => "u=choose another file, c=clear, q=quit",
    }
}

fn body_lines(view: View<'_>) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::Gray);
    match view {
        View::UploadPrompt => vec![
            Line::raw(""),
            Line::from(Span::styled(
                "Upload Receipt",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("press u to choose file", dim)),
        ],
        View::Processing { image } => vec![
            Line::from(Span::styled(format!("image: {}", image.display_name()), dim)),
            Line::raw(""),
            Line::from(Span::styled(
                "Processing image...",
                Style::default().fg(Color::Cyan),
            )),
        ],
        View::Details { image, receipt } => {
            let mut lines = vec![
                Line::from(Span::styled(format!("image: {}", image.display_name()), dim)),
                Line::raw(""),
            ];
            lines.extend(receipt_lines(receipt));
            lines
        }
        View::Empty { image } => vec![
            Line::from(Span::styled(format!("image: {}", image.display_name()), dim)),
            Line::raw(""),
            Line::from(Span::styled("Upload an image to see details", dim)),
        ],
    }
}

fn receipt_lines(r: &ExtractedReceipt) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let field = |name: &'static str, value: &str, style: Style| {
        Line::from(vec![
            Span::styled(format!("{name:<16}"), label),
            Span::styled(value.to_string(), style),
        ])
    };

    let mut lines = vec![
        field(
            "Vendor:",
            &r.vendor,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        field("Total Amount:", &r.amount, Style::default().fg(Color::Green)),
        field("Date:", &r.date, Style::default()),
        field("Category:", &r.category, Style::default()),
        field("Payment Method:", &r.payment_method, Style::default()),
        Line::raw(""),
        Line::from(Span::styled("Items:", label)),
    ];
    for item in &r.items {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<24}", item.name)),
            Span::raw(item.price.clone()),
        ]));
    }
    lines
}
