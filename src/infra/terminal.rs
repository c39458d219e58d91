//! Interactive home menu on a raw-mode terminal.

use {
    crate::domain::{
        menu::{ITEMS, Input, Menu},
        route::Destination,
    },
    crossterm::{
        cursor,
        event::{
            self,
            DisableMouseCapture,
            EnableMouseCapture,
            Event,
            KeyCode,
            KeyEvent,
            KeyEventKind,
            KeyModifiers,
            MouseButton,
            MouseEvent,
            MouseEventKind,
        },
        execute,
        queue,
        style::Print,
        terminal::{self, ClearType},
    },
    std::io::{self, Write},
};

/// Screen row of the first menu item.
const FIRST_ITEM_ROW: u16 = 2;

/// Restores cooked mode and releases the mouse on drop, including on early
/// returns and panics.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let raw = Self;
        execute!(io::stdout(), EnableMouseCapture)?;
        Ok(raw)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the menu until an item is chosen. Returns `None` if the user quits.
///
/// Blocks on terminal input; call from a blocking context.
pub fn menu() -> io::Result<Option<Destination>> {
    let _raw = RawMode::enable()?;
    let mut out = io::stdout();
    let mut menu = Menu::default();

    loop {
        render(&mut out, &menu)?;
        let inputs = match event::read()? {
            // Only handle presses; some platforms also report releases.
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if quits(&key) {
                    clear(&mut out)?;
                    return Ok(None);
                }
                input(&key).into_iter().collect()
            }
            Event::Mouse(mouse) => pointer(&mouse),
            _ => continue,
        };

        for input in inputs {
            let outcome = menu.apply(input);
            if let Some(cue) = outcome.cue {
                cue.play();
            }
            if let Some(destination) = outcome.navigate {
                clear(&mut out)?;
                return Ok(Some(destination));
            }
        }
    }
}

fn quits(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn input(key: &KeyEvent) -> Option<Input> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => Some(Input::Down),
        KeyCode::Up | KeyCode::Char('k') => Some(Input::Up),
        KeyCode::Enter => Some(Input::Enter),
        _ => None,
    }
}

/// The menu item under the given screen row, if any.
fn item_at(row: u16) -> Option<usize> {
    let index = usize::from(row.checked_sub(FIRST_ITEM_ROW)?);
    (index < ITEMS.len()).then_some(index)
}

fn pointer(mouse: &MouseEvent) -> Vec<Input> {
    let item = item_at(mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => match item {
            Some(index) => vec![Input::MouseMove, Input::HoverEnter(index)],
            None => vec![Input::MouseMove, Input::HoverLeave],
        },
        MouseEventKind::Down(MouseButton::Left) => item.map(Input::Click).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn render(out: &mut impl Write, menu: &Menu) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        Print("M E N A C E S\r\n\r\n")
    )?;
    for (index, item) in menu.items().iter().enumerate() {
        let line = if menu.active() == Some(index) {
            format!("  > {} <\r\n", item.label)
        } else {
            format!("    {}\r\n", item.label)
        };
        queue!(out, Print(line))?;
    }
    queue!(
        out,
        Print("\r\n  up/down or mouse select, enter or click confirm, q quit\r\n")
    )?;
    out.flush()
}

fn clear(out: &mut impl Write) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    out.flush()
}
