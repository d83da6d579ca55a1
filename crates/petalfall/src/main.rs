mod card;
mod cli;
mod pulse;

use std::fs::{self, OpenOptions};
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use petalfall_background::{BackgroundState, Scene};
use petalfall_config::{Config, EnvMotionPreference, FileStore, PetalToggle, project_dirs};
use petalfall_core::{Intensity, MotionPreference};
use ratatui::{DefaultTerminal, Frame};

use crate::card::{CardView, SCREENSHOT_HINT};
use crate::cli::Args;
use crate::pulse::{CelebrationPulse, PulseTiming};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging();
    let config = Config::load().wrap_err("failed to load config.toml")?;

    let terminal = ratatui::init();
    let result = App::new(config, &args).run(terminal);
    ratatui::restore();
    result
}

/// Send log output to `<data_local_dir>/petalfall.log`, filtered by `PETALFALL_LOG`.
///
/// Logging stays off when the file cannot be opened.
fn init_logging() {
    let Some(dirs) = project_dirs() else {
        return;
    };
    let dir = dirs.data_local_dir();
    if fs::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("petalfall.log"))
    else {
        return;
    };

    let env = env_logger::Env::new().filter_or("PETALFALL_LOG", "warn");
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded configuration.
    config: Config,
    /// Current petal intensity.
    intensity: Intensity,
    /// Petals switch and its persisted preference.
    petals: PetalToggle<FileStore>,
    /// Reduced-motion signal, queried for each petal batch.
    motion: EnvMotionPreference,
    /// Reduced-motion signal sampled at startup, for hearts and confetti.
    reduced_motion: bool,
    /// Animated background layers.
    background: BackgroundState,
    /// Confetti replay timer, running while the screen is shown.
    pulse: Option<CelebrationPulse>,
    /// Last replay count seen from the pulse.
    seen_replays: u64,
    /// Transient message under the card.
    status: Option<&'static str>,
    /// Time the screen was shown.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, args: &Args) -> Self {
        let motion = EnvMotionPreference::with_override(
            args.reduced_motion_override().or(config.reduced_motion),
        );
        let reduced_motion = motion.prefers_reduced_motion();
        let petals = PetalToggle::init(FileStore::open_default(), reduced_motion);
        let intensity = args.intensity.unwrap_or(config.intensity);

        log::info!(
            "starting: intensity {intensity}, petals {}, reduced motion {reduced_motion}",
            petals.enabled()
        );

        Self {
            running: false,
            config,
            intensity,
            petals,
            motion,
            reduced_motion,
            background: BackgroundState::new(),
            pulse: None,
            seen_replays: 0,
            status: None,
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.started = Instant::now();

        if self.config.confetti {
            self.pulse = Some(CelebrationPulse::start(PulseTiming {
                period: self.config.confetti_period(),
                gap: self.config.confetti_gap(),
            }));
            self.background.replay_confetti(0);
        }

        let result = self.event_loop(&mut terminal);

        if let Some(pulse) = self.pulse.take() {
            pulse.cancel();
        }
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while self.running {
            let elapsed_ms = self.started.elapsed().as_millis() as u64;
            self.update(elapsed_ms);
            terminal.draw(|frame| self.render(frame, elapsed_ms))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// What the background shows this frame.
    fn scene(&self) -> Scene {
        let confetti_visible = self.pulse.as_ref().is_some_and(|p| p.state().visible);
        Scene {
            intensity: self.intensity,
            petals_enabled: self.petals.enabled(),
            confetti_visible,
            hearts: self.config.hearts,
            reduced_motion: self.reduced_motion,
        }
    }

    /// Regenerate petals on input changes and replay confetti on each pulse.
    fn update(&mut self, elapsed_ms: u64) {
        let scene = self.scene();
        self.background.sync_petals(&scene, &self.motion, elapsed_ms);

        if let Some(pulse) = &self.pulse {
            let replays = pulse.state().replays;
            if replays != self.seen_replays {
                self.seen_replays = replays;
                self.background.replay_confetti(elapsed_ms);
            }
        }
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame, elapsed_ms: u64) {
        self.background.render(frame, &self.scene(), elapsed_ms);
        card::render(
            frame,
            &CardView {
                petals_enabled: self.petals.enabled(),
                intensity: self.intensity,
                status: self.status,
                elapsed_ms,
            },
        );
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so animations keep moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('p')) => self.toggle_petals(),
            (_, KeyCode::Char('i')) => self.cycle_intensity(),
            (_, KeyCode::Char('s')) => self.status = Some(SCREENSHOT_HINT),
            _ => {}
        }
    }

    /// Flip the petals switch.
    fn toggle_petals(&mut self) {
        let enabled = self.petals.toggle();
        log::debug!("petals toggled {}", if enabled { "on" } else { "off" });
    }

    /// Cycle through intensity levels.
    fn cycle_intensity(&mut self) {
        self.intensity = self.intensity.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
