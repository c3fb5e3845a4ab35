use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, info};

use eastward::application::{Browser, ContentPresenter, Navigator};
use eastward::domain::entities::Node;
use eastward::domain::ports::Clipboard;
use eastward::infrastructure::{archive, Osc52Clipboard};

use crate::ui::context::UiContext;
use crate::ui::views::browser::{content_height, render_frame};
use crate::ui::widgets::tree_view::key_to_action;

/// Poll timeout while no timer is pending
const IDLE_POLL: Duration = Duration::from_secs(1);

pub fn cmd_browse(ui: &UiContext) -> Result<()> {
    let root = archive::canonical();
    let navigator = Navigator::open(root)
        .with_sink(|node: &Node| debug!(id = %node.id(), name = node.name(), "file opened"));
    let presenter = ContentPresenter::new(Osc52Clipboard::stdout());
    let mut browser = Browser::new(navigator, presenter);

    info!(files = root.file_count(), "browser started");
    run_interactive(&mut browser, ui)
}

/// Run the browser on the alternate screen until the user quits
fn run_interactive<C: Clipboard>(browser: &mut Browser<'_, C>, ui: &UiContext) -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
        let _ = terminal::disable_raw_mode();
        return Err(e.into());
    }

    let result = event_loop(&mut stdout, browser, ui);

    // Restore terminal
    let restored = execute!(stdout, cursor::Show, LeaveAlternateScreen)
        .and_then(|_| terminal::disable_raw_mode());
    result?;
    restored?;
    Ok(())
}

fn event_loop<C: Clipboard>(
    stdout: &mut io::Stdout,
    browser: &mut Browser<'_, C>,
    ui: &UiContext,
) -> Result<()> {
    let mut dirty = true;
    loop {
        if browser.tick(Instant::now()) {
            dirty = true;
        }
        if dirty {
            let (width, height) = terminal::size()?;
            browser.set_page_size(content_height(height));
            browser.set_compact(ui.is_compact(width));
            let frame = render_frame(browser, ui, width, height, Instant::now());
            draw(stdout, &frame)?;
            dirty = false;
        }

        // Wake up when the copy indicator is due to clear.
        let timeout = browser.next_deadline(Instant::now()).unwrap_or(IDLE_POLL);
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = key_to_action(key) {
                    if browser.handle(action, Instant::now()) {
                        return Ok(());
                    }
                    dirty = true;
                }
            }
            Event::Resize(..) => dirty = true,
            _ => {}
        }
    }
}

fn draw(stdout: &mut io::Stdout, frame: &[String]) -> io::Result<()> {
    for (row, line) in frame.iter().enumerate() {
        queue!(
            stdout,
            cursor::MoveTo(0, row as u16),
            Print(line),
            terminal::Clear(ClearType::UntilNewLine)
        )?;
    }
    stdout.flush()
}
