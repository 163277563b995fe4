use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use typeahead::app::App;
use typeahead::config::{self, Config, StrategyKind};
use typeahead::logging;
use typeahead::source::{FetchWorker, HttpFetcher};

const TICK: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "typeahead", version)]
#[command(about = "Interactive autocomplete over a remote name directory")]
struct Args {
    /// How suggestions are sourced: fetch per keystroke, or once up front
    #[arg(short, long, value_enum)]
    strategy: Option<StrategyKind>,

    /// Listing endpoint returning a JSON array of {id, name} records
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Query parameter carrying the input in live mode
    #[arg(long)]
    query_param: Option<String>,

    /// Maximum number of dropdown rows
    #[arg(long)]
    max_visible: Option<usize>,

    /// Config file (default: ~/.config/typeahead/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Command-line flags win over the config file
    fn apply(self, config: &mut Config) {
        if let Some(strategy) = self.strategy {
            config.source.strategy = strategy;
        }
        if let Some(endpoint) = self.endpoint {
            config.source.endpoint = endpoint;
        }
        if let Some(query_param) = self.query_param {
            config.source.query_param = query_param;
        }
        if let Some(max_visible) = self.max_visible {
            config.dropdown.max_visible = max_visible;
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    logging::init();

    let mut config = config::load_config(args.config.as_deref())?;
    args.apply(&mut config);
    log::debug!("Starting with {:?}", config);

    // Fail on a bad endpoint before the terminal is taken over
    let fetcher = HttpFetcher::new(&config.source)?;
    let worker = FetchWorker::spawn(fetcher)?;

    let selected: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&selected);
    let app = App::new(
        &config,
        worker,
        Box::new(move |name: &str| *sink.borrow_mut() = Some(name.to_string())),
    );

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, app);

    ratatui::restore();
    result?;

    if let Some(name) = selected.borrow().as_deref() {
        println!("{}", name);
    }
    Ok(())
}

/// Event loop; the App (and its mouse capture) is dropped before returning
fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    app.mount()?;

    loop {
        app.poll_responses();

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK)? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
