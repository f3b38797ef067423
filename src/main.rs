//! sortviz - Sorting Algorithm Visualizer
//!
//! Terminal front end for the playback driver, using ratatui. All
//! playback and algorithm logic lives in the `sortviz` library; this
//! binary only owns terminal I/O.
//!
//! Takes an optional argument: a path to a YAML playback config.
//! Quit with `q`, `Esc`, or `Ctrl-C` (takes effect between runs).

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::process::ExitCode {
    use sortviz::config::PlaybackConfig;
    use std::process::ExitCode;

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => match PlaybackConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("sortviz: cannot load '{path}': {e}");
                eprintln!("Usage: sortviz [path/to/playback.yaml]");
                return ExitCode::FAILURE;
            }
        },
        None => PlaybackConfig::default(),
    };

    match tui::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sortviz: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with: cargo run --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use std::cell::RefCell;
    use std::io::{self, Stdout};
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        style::Color,
        widgets::{
            canvas::{Canvas, Line as CanvasLine},
            Block, Borders,
        },
        Terminal,
    };

    use sortviz::config::PlaybackConfig;
    use sortviz::playback::PlaybackDriver;
    use sortviz::render::{Bar, EventSource, FrameClock, RenderSurface, Rgb};
    use sortviz::VizResult;

    /// Run the visualizer against the current terminal.
    pub fn run(config: PlaybackConfig) -> VizResult<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = run_driver(terminal, config);

        disable_raw_mode()?;
        execute!(
            io::stdout(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        match result {
            Ok(seed) => {
                eprintln!(
                    "sortviz {} ({}) — replay seed: {seed}",
                    env!("SORTVIZ_VERSION"),
                    option_env!("GIT_HASH").unwrap_or("unknown"),
                );
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn run_driver(
        terminal: Terminal<CrosstermBackend<Stdout>>,
        config: PlaybackConfig,
    ) -> VizResult<u64> {
        let caption = Rc::new(RefCell::new(String::from("sortviz")));

        let cells = terminal.size()?;
        let surface = TerminalSurface {
            terminal,
            caption: Rc::clone(&caption),
            bars: Vec::new(),
            background: Rgb::WHITE,
            size: dot_size(cells.width, cells.height),
        };
        let events = TerminalEvents { caption };
        let clock = StdClock {
            last_frame: Instant::now(),
        };

        let mut driver = PlaybackDriver::new(surface, events, clock, config);
        let seed = driver.seed();
        driver.run()?;
        Ok(seed)
    }

    /// Braille canvas resolution for a cell grid, minus the block
    /// border.
    fn dot_size(cols: u16, rows: u16) -> (u32, u32) {
        let inner_cols = cols.saturating_sub(2);
        let inner_rows = rows.saturating_sub(2);
        (u32::from(inner_cols) * 2, u32::from(inner_rows) * 4)
    }

    fn to_color(rgb: Rgb) -> Color {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Bar-chart surface over a ratatui braille canvas.
    ///
    /// `clear`/`draw_bar` only buffer; `present` renders the buffered
    /// bars in one terminal frame.
    struct TerminalSurface {
        terminal: Terminal<CrosstermBackend<Stdout>>,
        caption: Rc<RefCell<String>>,
        bars: Vec<(Bar, Rgb)>,
        background: Rgb,
        size: (u32, u32),
    }

    impl RenderSurface for TerminalSurface {
        fn size(&self) -> (u32, u32) {
            self.size
        }

        fn clear(&mut self, color: Rgb) {
            self.background = color;
            self.bars.clear();
        }

        fn draw_bar(&mut self, bar: Bar, color: Rgb) {
            self.bars.push((bar, color));
        }

        fn present(&mut self) -> VizResult<()> {
            let caption = self.caption.borrow().clone();
            let bars = &self.bars;
            let (width, height) = self.size;
            let background = self.background;

            let mut drawn_size = self.size;
            self.terminal.draw(|f| {
                let area = f.area();
                let block = Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {caption} "));
                let inner = block.inner(area);
                drawn_size = (u32::from(inner.width) * 2, u32::from(inner.height) * 4);

                let canvas = Canvas::default()
                    .block(block)
                    .background_color(to_color(background))
                    .x_bounds([0.0, f64::from(width.max(1))])
                    .y_bounds([0.0, f64::from(height.max(1))])
                    .paint(|ctx| {
                        for &(bar, color) in bars {
                            // One vertical line per dot column; zero-width
                            // bars (more bars than columns) still show a
                            // single line.
                            for x in bar.x..=bar.x + bar.width.saturating_sub(1) {
                                ctx.draw(&CanvasLine {
                                    x1: f64::from(x),
                                    y1: 0.0,
                                    x2: f64::from(x),
                                    y2: f64::from(bar.height),
                                    color: to_color(color),
                                });
                            }
                        }
                    });
                f.render_widget(canvas, area);
            })?;

            // Track resizes for the next frame's layout.
            self.size = drawn_size;
            Ok(())
        }
    }

    /// Crossterm-backed event source.
    struct TerminalEvents {
        caption: Rc<RefCell<String>>,
    }

    impl EventSource for TerminalEvents {
        fn poll_quit(&mut self) -> VizResult<bool> {
            let mut quit = false;
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => quit = true,
                            KeyCode::Char('c')
                                if key.modifiers.contains(KeyModifiers::CONTROL) =>
                            {
                                quit = true;
                            }
                            _ => {}
                        }
                    }
                }
            }
            Ok(quit)
        }

        fn set_title(&mut self, title: &str) -> VizResult<()> {
            *self.caption.borrow_mut() = title.to_string();
            Ok(())
        }
    }

    /// Wall-clock pacing over `std::thread::sleep`.
    struct StdClock {
        last_frame: Instant,
    }

    impl FrameClock for StdClock {
        fn sleep(&mut self, duration: Duration) {
            std::thread::sleep(duration);
        }

        fn cap_frame_rate(&mut self, hz: u32) {
            let frame = Duration::from_secs_f64(1.0 / f64::from(hz.max(1)));
            let elapsed = self.last_frame.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
            self.last_frame = Instant::now();
        }
    }
}
