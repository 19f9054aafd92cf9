pub mod renderer;

use std::io::{Stdout, Write};

use crossterm::{
    QueueableCommand, cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::app::renderer::{Canvas, Glyph};
use crate::generator::MapGenerator;
use crate::map::MapData;

/// Interactive terminal viewer. Space draws a new map from a random seed,
/// Esc or `q` quits.
pub struct App {
    generator: MapGenerator,
}

impl App {
    pub fn new(generator: MapGenerator) -> Self {
        App { generator }
    }

    /// Set a panic hook to restore terminal state on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn run(&mut self, stdout: &mut Stdout) -> std::io::Result<()> {
        tracing::info!("[app] started viewer");
        let mut map = self.generator.generate();
        App::draw(stdout, &map)?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char(' ') => {
                        let seed = rand::random();
                        tracing::info!("[app] regenerating with random seed {seed}");
                        map = self.generator.regenerate(seed);
                        App::draw(stdout, &map)?;
                    }
                    KeyCode::Esc | KeyCode::Char('q') => break,
                    _ => {}
                },
                Event::Resize(..) => App::draw(stdout, &map)?,
                _ => {}
            }
        }

        tracing::info!("[app] exiting viewer");
        Ok(())
    }

    fn draw(stdout: &mut Stdout, map: &MapData) -> std::io::Result<()> {
        let canvas = Canvas::from_map(map);
        queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let (term_width, term_height) = terminal::size()?;
        let needed_width = canvas.width() as u16 * Glyph::CELL_WIDTH;
        // one extra line for the status bar
        let needed_height = canvas.height() as u16 + 1;
        if term_width < needed_width || term_height < needed_height {
            let msg = format!(
                "Terminal size is too small ({}x{}) for the map ({}x{}) to display. Please resize the terminal.\r\n",
                needed_width,
                needed_height,
                map.size().width,
                map.size().height
            );
            stdout.queue(style::PrintStyledContent(
                msg.with(Color::Yellow).attribute(Attribute::Bold),
            ))?;
            stdout.queue(style::PrintStyledContent(
                "Press Esc to exit...\r\n".with(Color::Blue).attribute(Attribute::Bold),
            ))?;
            stdout.flush()?;
            return Ok(());
        }

        for (row, glyphs) in canvas.rows().enumerate() {
            stdout.queue(cursor::MoveTo(0, row as u16))?;
            for glyph in glyphs {
                stdout.queue(style::Print(glyph))?;
            }
        }

        let stats = map.stats();
        queue!(
            stdout,
            cursor::MoveTo(0, canvas.height() as u16),
            style::PrintStyledContent(
                format!(
                    "seed {} | {} rooms | {} hallways | {} doors   ",
                    map.seed(),
                    stats.room_count,
                    stats.hallway_count,
                    stats.door_count
                )
                .with(Color::Green)
                .attribute(Attribute::Bold)
            ),
            style::PrintStyledContent("Space: regenerate  Esc/q: exit".with(Color::Cyan)),
        )?;
        stdout.flush()
    }
}
