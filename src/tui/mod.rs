// Module declarations
pub mod app;
pub mod host;
pub mod layout;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use app::App;
pub use host::TerminalHost;
pub use layout::PickerLayout;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::config::DisplayConfig;

/// Main entry point for TUI mode
///
/// Runs until the user quits and returns the final text of the input field.
pub fn run(mut app: App, display: &DisplayConfig) -> Result<String, io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, display);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.map(|_| app.value().to_string())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    display: &DisplayConfig,
) -> Result<(), io::Error> {
    #[cfg(feature = "development")]
    let mut screenshot_requested = false;

    let mut area = terminal.size().map(|s| ratatui::layout::Rect::new(0, 0, s.width, s.height))?;

    while !app.should_quit() {
        terminal.draw(|f| {
            area = f.area();
            app.render(area, f.buffer_mut(), display);

            #[cfg(feature = "development")]
            if screenshot_requested {
                screenshot_requested = false;
                let filename = crate::dev::screenshot::screenshot_filename();
                match crate::dev::screenshot::save_buffer_screenshot(f.buffer_mut(), area, &filename) {
                    Ok(()) => tracing::info!("Screenshot saved to {}", filename),
                    Err(e) => tracing::error!("Failed to save screenshot: {}", e),
                }
            }
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                #[cfg(feature = "development")]
                {
                    use crossterm::event::{KeyCode, KeyModifiers};
                    if key.code == KeyCode::Char('S') && key.modifiers.contains(KeyModifiers::SHIFT) && app.navigator().is_open() {
                        tracing::info!("Screenshot requested via Shift-S");
                        screenshot_requested = true;
                        continue;
                    }
                }
                app.handle_key(key);
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            Event::Resize(width, height) => {
                tracing::debug!("LOOP: Resized to {}x{}", width, height);
            }
            _ => {}
        }
    }

    tracing::debug!("LOOP: Exiting with value '{}'", app.value());
    Ok(())
}
