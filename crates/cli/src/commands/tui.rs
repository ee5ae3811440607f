use std::io::{self, stdout};
use std::path::Path;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lexicon_search::SearchSummary;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::config::CliConfig;
use crate::session::{Row, Session};
use crate::text_input::QueryInput;

struct App {
    session: Session,
    input: QueryInput,
    summary: SearchSummary,
    rows: Vec<Row>,
    list_state: ListState,
    should_quit: bool,
}

impl App {
    fn new(mut session: Session) -> Self {
        let summary = session.reset();
        let rows = session.visible_rows();
        let mut list_state = ListState::default();
        if !rows.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            session,
            input: QueryInput::default(),
            summary,
            rows,
            list_state,
            should_quit: false,
        }
    }

    /// Re-runs the search after every edit of the query.
    fn refresh(&mut self) {
        self.summary = self.session.search(self.input.text());
        self.rows = self.session.visible_rows();
        self.list_state
            .select(if self.rows.is_empty() { None } else { Some(0) });
    }

    fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let edited = match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                false
            }
            KeyCode::Char('w') if ctrl => self.input.delete_word_backward(),
            KeyCode::Char('u') if ctrl => self.input.delete_to_start(),
            KeyCode::Char(ch) if !ctrl => {
                self.input.insert_char(ch);
                true
            }
            KeyCode::Backspace => self.input.delete_backward(),
            KeyCode::Delete => self.input.delete_forward(),
            KeyCode::Left => {
                self.input.move_left();
                false
            }
            KeyCode::Right => {
                self.input.move_right();
                false
            }
            KeyCode::Home => {
                self.input.move_to_start();
                false
            }
            KeyCode::End => {
                self.input.move_to_end();
                false
            }
            KeyCode::Up => {
                self.previous();
                false
            }
            KeyCode::Down => {
                self.next();
                false
            }
            KeyCode::Esc => {
                if self.input.text().is_empty() {
                    self.should_quit = true;
                    false
                } else {
                    self.input.clear();
                    true
                }
            }
            _ => false,
        };

        if edited {
            self.refresh();
        }
    }
}

pub fn run(config: &CliConfig, page: Option<&Path>) -> Result<()> {
    let session = Session::open(config, page)?;

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let result = run_tui(App::new(session));

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(result?)
}

fn run_tui(mut app: App) -> io::Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Query input
    let input = Paragraph::new(app.input.text()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .title_style(Style::default().bold()),
    );
    f.render_widget(input, chunks[0]);
    let caret_x = chunks[0].x + 1 + app.input.cursor_column() as u16;
    f.set_cursor_position((caret_x.min(chunks[0].right().saturating_sub(2)), chunks[0].y + 1));

    // Visible entries in container order
    let items: Vec<ListItem> = app
        .rows
        .iter()
        .map(|row| {
            let style = if row.exact {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            ListItem::new(row.label.as_str()).style(style)
        })
        .collect();

    let title = if app.input.query().is_empty() {
        format!(" Words ({}) ", app.summary.total)
    } else {
        format!(
            " Words ({} of {}: {} exact, {} partial) ",
            app.summary.visible(),
            app.summary.total,
            app.summary.exact,
            app.summary.partial
        )
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Rgb(60, 60, 80)))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[1], &mut app.list_state);

    // Help footer
    let help_text = " Type to search | Esc: Clear/Quit | Up/Down: Navigate | Ctrl-W: Delete word | Ctrl-C: Quit ";
    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
