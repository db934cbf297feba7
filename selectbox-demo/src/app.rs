use std::io;
use std::sync::{Arc, PoisonError, RwLock};

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use crossterm::style::Color;
use selectbox::{
    DisplayValue, Event, EventRouter, Key, MultiSelection, RowEmphasis, SelectConfig, SelectError,
    SelectHandle, SelectOption, SelectView, SelectWidget, Selection,
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::hit::{HitMap, Rect};
use crate::terminal::{Paint, Terminal};

const SELECT_X: u16 = 2;
const SELECT_WIDTH: u16 = 48;
const SINGLE_Y: u16 = 3;
const MULTIPLE_Y: u16 = 11;

const CURSOR_BG: Color = Color::Rgb { r: 0xA2, g: 0x77, b: 0xFF };
const SELECTED_BG: Color = Color::Rgb { r: 0x6E, g: 0x54, b: 0x94 };
const FOCUS_BG: Color = Color::Rgb { r: 80, g: 80, b: 100 };
const BADGE_BG: Color = Color::Rgb { r: 60, g: 60, b: 75 };

pub fn demo_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("First", 1),
        SelectOption::new("Second", 2),
        SelectOption::new("Third", 3),
        SelectOption::new("Fourth", 4),
        SelectOption::new("Fifth", 5),
    ]
}

/// Values owned by the host. The widgets only ever propose changes to these.
#[derive(Debug, Clone, Default)]
struct Values {
    single: Option<SelectOption>,
    multiple: Vec<SelectOption>,
}

pub struct DemoApp {
    values: Arc<RwLock<Values>>,
    single: SelectHandle,
    multiple: SelectHandle,
    router: EventRouter,
    focused: Option<String>,
    hits: HitMap,
    quit: bool,
}

impl DemoApp {
    pub fn new(config: SelectConfig) -> Result<Self, SelectError> {
        let options = demo_options();
        let values = Arc::new(RwLock::new(Values {
            single: options.first().cloned(),
            multiple: options.first().cloned().into_iter().collect(),
        }));
        let initial = read(&values);

        let sink = Arc::clone(&values);
        let single = SelectWidget::builder(options.clone())
            .single(initial.single, move |value| {
                log::info!("single on_change: {:?}", value.as_ref().map(|o| &o.label));
                write(&sink).single = value;
            })
            .config(config.clone())
            .build()?;

        let sink = Arc::clone(&values);
        let multiple = SelectWidget::builder(options)
            .multiple(initial.multiple, move |value| {
                log::info!(
                    "multiple on_change: {:?}",
                    value.iter().map(|o| &o.label).collect::<Vec<_>>()
                );
                write(&sink).multiple = value;
            })
            .config(config)
            .build()?;

        let single = SelectHandle::new(single);
        let multiple = SelectHandle::new(multiple);
        let mut router = EventRouter::new();
        router.register(single.clone());
        router.register(multiple.clone());

        Ok(Self {
            values,
            single,
            multiple,
            router,
            focused: None,
            hits: HitMap::new(),
            quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle(&mut self, event: CrosstermEvent) {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            CrosstermEvent::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }

        if let Err(e) = self.sync_values() {
            log::error!("failed to re-supply select values: {}", e);
        }
    }

    fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.quit = true;
            return;
        }
        let Ok(key) = Key::try_from(key_event.code) else {
            return;
        };

        let event = Event::Key {
            target: self.focused.clone(),
            key,
            modifiers: key_event.modifiers.into(),
        };
        if self.router.dispatch(&event).is_handled() {
            return;
        }

        match key {
            Key::Tab => self.focus_step(1),
            Key::BackTab => self.focus_step(-1),
            Key::Escape => self.set_focus(None),
            Key::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let target = self.hits.hit_test(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) => {
                // Pressing inside a widget focuses its container
                let owner = target.as_deref().and_then(|t| {
                    self.router
                        .handles()
                        .iter()
                        .find(|h| h.owns(t))
                        .map(|h| h.id().to_string())
                });
                self.set_focus(owner);
                self.router.dispatch(&Event::Click {
                    target,
                    button: button.into(),
                });
            }
            MouseEventKind::Moved => {
                self.router.dispatch(&Event::Hover { target });
            }
            _ => {}
        }
    }

    fn set_focus(&mut self, next: Option<String>) {
        if self.focused == next {
            return;
        }
        if let Some(old) = self.focused.take() {
            self.router.dispatch(&Event::Blur { target: old });
        }
        log::debug!("focus -> {:?}", next);
        if let Some(target) = &next {
            self.router.dispatch(&Event::Focus {
                target: target.clone(),
            });
        }
        self.focused = next;
    }

    fn focus_step(&mut self, step: isize) {
        let ids: Vec<String> = self
            .router
            .handles()
            .iter()
            .map(|h| h.id().to_string())
            .collect();
        if ids.is_empty() {
            return;
        }
        let len = ids.len() as isize;
        let next = match self
            .focused
            .as_ref()
            .and_then(|f| ids.iter().position(|id| id == f))
        {
            Some(i) => (i as isize + step).rem_euclid(len) as usize,
            None if step < 0 => ids.len() - 1,
            None => 0,
        };
        self.set_focus(ids.get(next).cloned());
    }

    /// Feed the host-owned values back into the widgets.
    fn sync_values(&self) -> Result<(), SelectError> {
        let values = read(&self.values);
        self.single.set_value(Selection::Single(values.single))?;
        self.multiple
            .set_value(Selection::Multiple(MultiSelection::try_from_options(
                values.multiple,
            )?))?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    pub fn draw(&mut self, term: &mut Terminal) -> io::Result<()> {
        let (_, height) = term.size()?;
        self.hits.clear();
        term.clear()?;

        term.print(1, 0, "selectbox demo", Paint::default().bold())?;
        term.print(
            1,
            1,
            "Tab: focus  Space/Enter: open or pick  Up/Down: move  Esc: close  q: quit",
            Paint::default().dim(),
        )?;

        let single = self.single.view();
        let multiple = self.multiple.view();
        self.draw_trigger(term, &single, "Single", SINGLE_Y)?;
        self.draw_trigger(term, &multiple, "Multiple", MULTIPLE_Y)?;
        // Dropdowns go last so they sit above everything else
        self.draw_dropdown(term, &single, SINGLE_Y + 1)?;
        self.draw_dropdown(term, &multiple, MULTIPLE_Y + 1)?;

        let values = read(&self.values);
        let status_y = height.saturating_sub(3);
        let single_text = values
            .single
            .as_ref()
            .map(|o| o.label.clone())
            .unwrap_or_else(|| "(none)".into());
        let multiple_text = values
            .multiple
            .iter()
            .map(|o| o.label.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        term.print(1, status_y, &format!("single value:   {}", single_text), Paint::default())?;
        term.print(
            1,
            status_y + 1,
            &format!("multiple value: [{}]", multiple_text),
            Paint::default(),
        )?;

        self.router.clear_dirty();
        term.flush()
    }

    fn draw_trigger(
        &mut self,
        term: &mut Terminal,
        view: &SelectView,
        title: &str,
        y: u16,
    ) -> io::Result<()> {
        let focused = self.focused.as_deref() == Some(view.container_id.as_str());
        let base = if focused {
            Paint::default().bg(FOCUS_BG).bold()
        } else {
            Paint::default()
        };

        term.print(SELECT_X, y - 1, title, Paint::default().fg(Color::Grey))?;
        term.print(SELECT_X, y, &" ".repeat(SELECT_WIDTH as usize), base)?;
        self.hits
            .insert(&view.container_id, Rect::new(SELECT_X, y, SELECT_WIDTH, 1));

        let value_width = SELECT_WIDTH.saturating_sub(6);
        match &view.display {
            DisplayValue::Placeholder(text) => {
                term.print(SELECT_X + 1, y, &truncate(text, value_width), base.dim())?;
            }
            DisplayValue::Label(text) => {
                term.print(SELECT_X + 1, y, &truncate(text, value_width), base)?;
            }
            DisplayValue::Badges(badges) => {
                let mut x = SELECT_X + 1;
                let limit = SELECT_X + 1 + value_width;
                for badge in badges {
                    let text = format!(" {} × ", badge.label);
                    let w = text.width() as u16;
                    if x + w > limit {
                        term.print(x, y, "…", base)?;
                        break;
                    }
                    term.print(x, y, &text, Paint::default().bg(BADGE_BG))?;
                    self.hits.insert(&badge.id, Rect::new(x, y, w, 1));
                    x += w + 1;
                }
            }
        }

        let clear_x = SELECT_X + SELECT_WIDTH - 5;
        term.print(clear_x, y, "×", base.fg(Color::Red))?;
        self.hits.insert(&view.clear_id, Rect::new(clear_x, y, 1, 1));
        term.print(clear_x + 2, y, "│", base.dim())?;
        term.print(clear_x + 4, y, view.indicator(), base.dim())
    }

    fn draw_dropdown(&mut self, term: &mut Terminal, view: &SelectView, y: u16) -> io::Result<()> {
        for (i, row) in view.rows.iter().enumerate() {
            let row_y = y + i as u16;
            let paint = match row.emphasis() {
                RowEmphasis::Highlighted => Paint::default().bg(CURSOR_BG).fg(Color::Black),
                RowEmphasis::Selected => Paint::default().bg(SELECTED_BG).fg(Color::Black),
                RowEmphasis::Normal => Paint::default().bg(Color::Rgb { r: 30, g: 30, b: 40 }),
            };
            let text = format!(" {:<width$}", row.label, width = SELECT_WIDTH as usize - 1);
            term.print(SELECT_X, row_y, &text, paint)?;
            self.hits
                .insert(&row.id, Rect::new(SELECT_X, row_y, SELECT_WIDTH, 1));
        }
        Ok(())
    }
}

fn truncate(text: &str, width: u16) -> String {
    let width = width as usize;
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

fn read(values: &RwLock<Values>) -> Values {
    values
        .read()
        .map(|guard| guard.clone())
        .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
}

fn write(values: &RwLock<Values>) -> std::sync::RwLockWriteGuard<'_, Values> {
    values.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton};

    fn press(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_keyboard_pick_updates_host_value() {
        let mut app = DemoApp::new(SelectConfig::default()).unwrap();

        app.handle(press(KeyCode::Tab));
        app.handle(press(KeyCode::Down));
        app.handle(press(KeyCode::Down));
        app.handle(press(KeyCode::Enter));

        assert_eq!(read(&app.values).single.map(|o| o.label), Some("Second".into()));
        assert_eq!(
            app.single.selection(),
            Selection::Single(Some(SelectOption::new("Second", 2)))
        );
    }

    #[test]
    fn test_tab_moves_focus_and_closes_previous() {
        let mut app = DemoApp::new(SelectConfig::default()).unwrap();

        app.handle(press(KeyCode::Tab));
        app.handle(press(KeyCode::Down));
        assert!(app.single.is_open());

        app.handle(press(KeyCode::Tab));
        assert!(!app.single.is_open());
        assert_eq!(app.focused.as_deref(), Some(app.multiple.id()));
    }

    #[test]
    fn test_clear_click_via_hit_map() {
        let mut app = DemoApp::new(SelectConfig::default()).unwrap();
        let clear_id = app.multiple.with(|w| w.clear_id());
        app.hits
            .insert(&app.multiple.id().to_string(), Rect::new(2, 11, 48, 1));
        app.hits.insert(&clear_id, Rect::new(45, 11, 1, 1));

        app.handle(CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 45,
            row: 11,
            modifiers: KeyModifiers::NONE,
        }));

        assert!(read(&app.values).multiple.is_empty());
        assert!(!app.multiple.is_open());
    }

    #[test]
    fn test_q_quits_when_widget_ignores_it() {
        let mut app = DemoApp::new(SelectConfig::default()).unwrap();
        app.handle(press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Second", 10), "Second");
        assert_eq!(truncate("Second", 4), "Sec…");
    }
}
