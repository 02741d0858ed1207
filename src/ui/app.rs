//! Main UI Application
//!
//! Coordinates rendering and input handling. The profile is the single
//! source of truth; levels and the current title are recomputed from it
//! on every draw.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::actions::Action;
use crate::progression::{classify, LEVEL_CAP};
use crate::save::{save_profile, Profile};
use crate::stats::Category;
use crate::ui::menu::{entries, EntryKind};

const GOLD: Color = Color::Yellow;
const DIM: Color = Color::DarkGray;

/// What the UI is currently showing.
enum View {
    Dashboard,
    /// Action list for one category.
    CategoryMenu { category: Category, cursor: usize },
    /// Collecting numeric input for a menu entry.
    AmountEntry {
        category: Category,
        entry: usize,
        field: usize,
        inputs: [String; 2],
    },
    ConfirmReset,
}

/// How the app persists the profile after a mutation.
type SaveFn = fn(&Profile);

/// Main UI application
pub struct App {
    view: View,
    /// Last committed action's log line, shown on the dashboard.
    status: Option<String>,
    /// Persistence hook, invoked after every profile mutation.
    save: SaveFn,
}

/// Default persistence hook: write through the save layer, log failures.
fn persist_profile(profile: &Profile) {
    if let Err(e) = save_profile(profile) {
        log::error!("Failed to save profile: {}", e);
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_save(persist_profile)
    }

    /// Build an app with a custom persistence hook. Input handling never
    /// touches disk except through this hook.
    fn with_save(save: SaveFn) -> Self {
        Self {
            view: View::Dashboard,
            status: None,
            save,
        }
    }

    /// Handle a key press. Returns `Ok(true)` when the app should quit.
    pub fn handle_input(&mut self, key: KeyEvent, profile: &mut Profile) -> Result<bool> {
        match &mut self.view {
            View::Dashboard => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char('r') => self.view = View::ConfirmReset,
                KeyCode::Char(c @ '1'..='5') => {
                    let category = Category::ALL[c as usize - '1' as usize];
                    self.view = View::CategoryMenu {
                        category,
                        cursor: 0,
                    };
                }
                _ => {}
            },
            View::CategoryMenu { category, cursor } => {
                let menu = entries(*category);
                match key.code {
                    KeyCode::Esc => self.view = View::Dashboard,
                    KeyCode::Up => *cursor = cursor.saturating_sub(1),
                    KeyCode::Down => *cursor = (*cursor + 1).min(menu.len() - 1),
                    KeyCode::Enter => match &menu[*cursor].kind {
                        EntryKind::Fixed(action) => {
                            let action = *action;
                            self.commit(action, profile);
                        }
                        EntryKind::OneField { .. } | EntryKind::TwoField { .. } => {
                            self.view = View::AmountEntry {
                                category: *category,
                                entry: *cursor,
                                field: 0,
                                inputs: [String::new(), String::new()],
                            };
                        }
                    },
                    _ => {}
                }
            }
            View::AmountEntry {
                category,
                entry,
                field,
                inputs,
            } => match key.code {
                KeyCode::Esc => {
                    self.view = View::CategoryMenu {
                        category: *category,
                        cursor: *entry,
                    };
                }
                KeyCode::Char(c @ '0'..='9') => {
                    if inputs[*field].len() < 6 {
                        inputs[*field].push(c);
                    }
                }
                KeyCode::Backspace => {
                    inputs[*field].pop();
                }
                KeyCode::Enter => {
                    let menu = entries(*category);
                    match &menu[*entry].kind {
                        EntryKind::OneField { build, .. } => {
                            let amount = inputs[0].parse().unwrap_or(0);
                            let action = build(amount);
                            self.commit(action, profile);
                        }
                        EntryKind::TwoField { build, .. } => {
                            if *field == 0 {
                                *field = 1;
                            } else {
                                let a = inputs[0].parse().unwrap_or(0);
                                let b = inputs[1].parse().unwrap_or(0);
                                let action = build(a, b);
                                self.commit(action, profile);
                            }
                        }
                        EntryKind::Fixed(_) => self.view = View::Dashboard,
                    }
                }
                _ => {}
            },
            View::ConfirmReset => match key.code {
                KeyCode::Char('y') => {
                    profile.reset();
                    (self.save)(profile);
                    log::info!("Profile reset to zero");
                    self.status = Some("All stats reset.".to_string());
                    self.view = View::Dashboard;
                }
                _ => self.view = View::Dashboard,
            },
        }
        Ok(false)
    }

    /// Apply a completed action: add XP, persist, surface the log line.
    /// A zero-XP action (empty or all-zero input) is refused outright.
    fn commit(&mut self, action: Action, profile: &mut Profile) {
        let outcome = action.complete();
        self.view = View::Dashboard;
        if outcome.xp == 0 {
            self.status = Some("No XP earned, nothing logged.".to_string());
            return;
        }
        profile.xp.add(outcome.category, outcome.xp);
        profile.actions_logged += 1;
        (self.save)(profile);
        log::info!("{}", outcome.message);
        self.status = Some(outcome.message);
    }

    /// Render the current view.
    pub fn render(&self, frame: &mut Frame, profile: &Profile) {
        self.render_dashboard(frame, profile);
        match &self.view {
            View::Dashboard => {}
            View::CategoryMenu { category, cursor } => {
                self.render_menu(frame, *category, *cursor);
            }
            View::AmountEntry {
                category,
                entry,
                field,
                inputs,
            } => {
                self.render_amount_entry(frame, *category, *entry, *field, inputs);
            }
            View::ConfirmReset => self.render_confirm_reset(frame),
        }
    }

    fn render_dashboard(&self, frame: &mut Frame, profile: &Profile) {
        let levels = profile.xp.levels();
        let title = classify(&levels);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(4), // current title
                Constraint::Min(11),   // stat gauges
                Constraint::Length(3), // footer
            ])
            .split(frame.area());

        let header = Paragraph::new(Line::from(Span::styled(
            "K A I Z E N",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let rank_lines = vec![
            Line::from(Span::styled("CURRENT TITLE", Style::default().fg(DIM))),
            Line::from(Span::styled(
                title.en,
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(title.jp, Style::default().fg(Color::White))),
        ];
        let rank = Paragraph::new(rank_lines).alignment(Alignment::Center);
        frame.render_widget(rank, chunks[1]);

        let gauge_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2); 5])
            .split(chunks[2]);
        for (i, &category) in Category::ALL.iter().enumerate() {
            let level = levels.get(category);
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(GOLD).bg(Color::Black))
                .ratio(level as f64 / LEVEL_CAP as f64)
                .label(format!(
                    "{:<5} Lv.{:<4} ({} XP)",
                    category.label(),
                    level,
                    profile.xp.get(category)
                ));
            frame.render_widget(gauge, gauge_rows[i]);
        }

        let footer_text = match &self.status {
            Some(msg) => msg.clone(),
            None => format!(
                "Total XP: {}  |  Actions logged: {}",
                profile.xp.total(),
                profile.actions_logged
            ),
        };
        let footer = Paragraph::new(vec![
            Line::from(footer_text),
            Line::from(Span::styled(
                "[1-5] log action  [r] reset  [q] quit",
                Style::default().fg(DIM),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);
    }

    fn render_menu(&self, frame: &mut Frame, category: Category, cursor: usize) {
        let menu = entries(category);
        let items: Vec<ListItem> = menu
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == cursor {
                    Style::default().fg(Color::Black).bg(GOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Span::styled(entry.label, style))
            })
            .collect();

        let area = centered_rect(44, (menu.len() + 2) as u16, frame.area());
        frame.render_widget(Clear, area);
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GOLD))
                .title(format!(" {} ", category.label())),
        );
        frame.render_widget(list, area);
    }

    fn render_amount_entry(
        &self,
        frame: &mut Frame,
        category: Category,
        entry: usize,
        field: usize,
        inputs: &[String; 2],
    ) {
        let menu = entries(category);
        let menu_entry = &menu[entry];
        let prompt = match &menu_entry.kind {
            EntryKind::OneField { prompt, .. } => *prompt,
            EntryKind::TwoField { prompts, .. } => prompts[field],
            EntryKind::Fixed(_) => "",
        };

        let area = centered_rect(40, 5, frame.area());
        frame.render_widget(Clear, area);
        let text = vec![
            Line::from(Span::styled(prompt, Style::default().fg(DIM))),
            Line::from(Span::styled(
                format!("{}_", inputs[field]),
                Style::default().fg(GOLD),
            )),
        ];
        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GOLD))
                .title(format!(" {} ", menu_entry.label)),
        );
        frame.render_widget(input, area);
    }

    fn render_confirm_reset(&self, frame: &mut Frame) {
        let area = centered_rect(44, 5, frame.area());
        frame.render_widget(Clear, area);
        let text = vec![
            Line::from("This wipes all accumulated XP."),
            Line::from(Span::styled(
                "[y] confirm   [any other key] cancel",
                Style::default().fg(DIM),
            )),
        ];
        let popup = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" DATA RESET "),
        );
        frame.render_widget(popup, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed-size rect centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    // Tests drive input handling with persistence stubbed out, so the
    // suite never writes the real profile on disk.
    fn no_save(_: &Profile) {}

    fn test_app() -> App {
        App::with_save(no_save)
    }

    #[test]
    fn quit_from_dashboard() {
        let mut app = test_app();
        let mut profile = Profile::new();
        assert!(app.handle_input(press(KeyCode::Char('q')), &mut profile).unwrap());
    }

    #[test]
    fn committing_a_fixed_action_adds_xp() {
        let mut app = test_app();
        let mut profile = Profile::new();
        // Open DISC, select the first entry (Clean room, +30).
        app.handle_input(press(KeyCode::Char('5')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Enter), &mut profile).unwrap();
        assert_eq!(profile.xp.disc, 30);
        assert_eq!(profile.actions_logged, 1);
        assert!(app.status.is_some());
    }

    #[test]
    fn numeric_entry_builds_the_action() {
        let mut app = test_app();
        let mut profile = Profile::new();
        // MIND -> Meditation -> 15 minutes.
        app.handle_input(press(KeyCode::Char('3')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Enter), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Char('1')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Char('5')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Enter), &mut profile).unwrap();
        assert_eq!(profile.xp.mind, 15);
    }

    #[test]
    fn two_field_entry_collects_both_numbers() {
        let mut app = test_app();
        let mut profile = Profile::new();
        // BODY -> Gym set -> 80kg x 10 reps = 160 XP.
        app.handle_input(press(KeyCode::Char('1')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Enter), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Char('8')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Char('0')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Enter), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Char('1')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Char('0')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Enter), &mut profile).unwrap();
        assert_eq!(profile.xp.body, 160);
    }

    #[test]
    fn reset_requires_confirmation() {
        let mut app = test_app();
        let mut profile = Profile::new();
        profile.xp.add(Category::Body, 500);

        app.handle_input(press(KeyCode::Char('r')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Char('n')), &mut profile).unwrap();
        assert_eq!(profile.xp.body, 500);

        app.handle_input(press(KeyCode::Char('r')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Char('y')), &mut profile).unwrap();
        assert_eq!(profile.xp.body, 0);
    }

    #[test]
    fn persistence_goes_through_the_injected_hook() {
        static SAVES: AtomicUsize = AtomicUsize::new(0);
        fn counting_save(_: &Profile) {
            SAVES.fetch_add(1, Ordering::SeqCst);
        }

        let mut app = App::with_save(counting_save);
        let mut profile = Profile::new();

        // Commit DISC "Clean room": one save.
        app.handle_input(press(KeyCode::Char('5')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Enter), &mut profile).unwrap();
        assert_eq!(profile.xp.disc, 30);
        assert_eq!(SAVES.load(Ordering::SeqCst), 1);

        // Confirmed reset: one more.
        app.handle_input(press(KeyCode::Char('r')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Char('y')), &mut profile).unwrap();
        assert_eq!(profile.xp.disc, 0);
        assert_eq!(SAVES.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn zero_xp_entry_is_refused() {
        static SAVES: AtomicUsize = AtomicUsize::new(0);
        fn counting_save(_: &Profile) {
            SAVES.fetch_add(1, Ordering::SeqCst);
        }

        let mut app = App::with_save(counting_save);
        let mut profile = Profile::new();

        // MIND -> Meditation, then confirm with no digits typed.
        app.handle_input(press(KeyCode::Char('3')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Enter), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Enter), &mut profile).unwrap();

        assert_eq!(profile.xp, crate::stats::StatVector::default());
        assert_eq!(profile.actions_logged, 0);
        assert_eq!(SAVES.load(Ordering::SeqCst), 0);
        assert_eq!(app.status.as_deref(), Some("No XP earned, nothing logged."));

        // A real amount still commits.
        app.handle_input(press(KeyCode::Char('3')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Enter), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Char('9')), &mut profile).unwrap();
        app.handle_input(press(KeyCode::Enter), &mut profile).unwrap();
        assert_eq!(profile.xp.mind, 9);
        assert_eq!(profile.actions_logged, 1);
        assert_eq!(SAVES.load(Ordering::SeqCst), 1);
    }
}
