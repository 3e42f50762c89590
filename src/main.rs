//! Cyber Dash entry point
//!
//! Native builds have no renderer: the binary plays one demo run on
//! autopilot, records it and prints the leaderboard. Usage:
//!
//! ```text
//! cyber-dash [DATA_DIR] [MAX_TICKS]
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use chrono::Utc;
    use cyber_dash::highscores::format_date;
    use cyber_dash::persistence::{FileStorage, MemoryStorage, Storage};
    use cyber_dash::{App, Screen};

    env_logger::init();
    log::info!("Cyber Dash (native) starting...");

    let mut args = std::env::args().skip(1);
    let data_dir = args.next().unwrap_or_else(|| "cyber-dash-data".to_string());
    let max_ticks: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60 * 60);

    let storage: Box<dyn Storage> = match FileStorage::open(&data_dir) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("Cannot open {}: {}; scores will not persist", data_dir, e);
            Box::new(MemoryStorage::new())
        }
    };

    let mut app = App::new(storage);
    app.set_autopilot(true);
    app.start_game();

    let mut ticks = 0;
    while app.screen() == Screen::Playing && ticks < max_ticks {
        app.tick_frame();
        ticks += 1;
    }
    if app.screen() == Screen::Playing {
        println!("Survived {} ticks, ending run", ticks);
        app.end_run();
    }

    if let Some(run) = app.last_run() {
        println!("Run ended: {:?}", run.reason);
        println!("Score: {}", run.score);
        if let Some(rank) = run.rank {
            println!("New high score! Rank #{}", rank);
        }
    }

    let now = Utc::now();
    println!("\nHigh Scores");
    if app.high_scores().is_empty() {
        println!("No high scores yet.");
    }
    for (i, entry) in app.high_scores().entries.iter().enumerate() {
        println!(
            "{}. {} points ({})",
            i + 1,
            entry.score,
            format_date(entry.timestamp, now)
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_main, this is just to satisfy the compiler
}
