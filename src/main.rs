use std::fs::File;
use std::io;
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use tally::core::state::App;
use tally::store::{self, NAMES_FILE, RESULTS_FILE};
use tally::tui;

fn main() -> std::io::Result<()> {
    // Initialize file logger - writes to tally.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("tally.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Tally starting up");

    // Prior results win; otherwise bootstrap from the name list.
    let counters = match store::load_results(Path::new(RESULTS_FILE)) {
        Some(counters) => {
            println!("Restored previous counts from '{RESULTS_FILE}'.");
            counters
        }
        None => {
            println!("No usable '{RESULTS_FILE}'; initializing from '{NAMES_FILE}'.");
            match store::load_names(Path::new(NAMES_FILE)) {
                Ok(counters) => counters,
                Err(e) => {
                    // Errors are user-visible text only; the exit status
                    // stays success on every path.
                    eprintln!("Error: {e}");
                    eprintln!("No valid name data to start the counter.");
                    log::warn!("Startup aborted: {e}");
                    return Ok(());
                }
            }
        }
    };

    let mut app = App::new(counters);
    tui::run(&mut app)?;

    // Terminal is back in cooked mode here, so the prompt is line-buffered.
    let stdin = io::stdin();
    if store::confirm_save(&mut stdin.lock(), &mut io::stdout()) {
        if let Err(e) = store::save_results(&app.counters, Path::new(RESULTS_FILE)) {
            eprintln!("Warning: failed to save results: {e}");
            log::warn!("Failed to save results: {e}");
        }
    } else {
        println!("Save skipped.");
    }

    println!("Goodbye.");
    Ok(())
}
