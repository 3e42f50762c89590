//! Browser bindings (wasm32 only)
//!
//! A JS front end owns the canvas and gesture handling; it forwards button
//! presses and pan gestures here and draws `snapshot()` every frame.

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::persistence::{LocalStorage, MemoryStorage, Storage};
use crate::platform::Gesture;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Cyber Dash starting...");
}

/// Game handle exported to JS
#[wasm_bindgen]
pub struct WebGame {
    app: App,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let storage: Box<dyn Storage> = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}; high scores will not persist", e);
                Box::new(MemoryStorage::new())
            }
        };
        WebGame {
            app: App::new(storage),
        }
    }

    pub fn start_game(&mut self) -> bool {
        self.app.start_game()
    }

    pub fn show_high_scores(&mut self) -> bool {
        self.app.show_high_scores()
    }

    pub fn back_to_menu(&mut self) -> bool {
        self.app.back_to_menu()
    }

    /// Returns the notice as JSON
    pub fn reset_scores(&mut self) -> String {
        let notice = self.app.reset_scores();
        serde_json::to_string(&notice).unwrap_or_default()
    }

    pub fn gesture(&mut self, translation_y: f32) {
        self.app.gesture(Gesture { translation_y });
    }

    /// Advance by a frame delta in seconds
    pub fn update(&mut self, dt: f32) -> u32 {
        self.app.update(dt)
    }

    /// Current frame as JSON
    pub fn snapshot(&self) -> String {
        match self.app.snapshot().to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Snapshot encoding failed: {}", e);
                String::new()
            }
        }
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
