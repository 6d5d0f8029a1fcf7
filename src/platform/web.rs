//! Browser binding
//!
//! Exposes [`Session`] to a JavaScript presentation layer. Events and the
//! grid view cross the boundary as JSON.

use wasm_bindgen::prelude::*;

use super::grid_view;
use crate::config::BoardConfig;
use crate::sim::{Mode, Session};

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Bitwayz (web) starting...");
}

#[wasm_bindgen]
pub struct WebSession {
    inner: Session,
}

#[wasm_bindgen]
impl WebSession {
    /// Create a session from an optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebSession, JsValue> {
        let config = match config_json {
            Some(json) => BoardConfig::from_json(&json).map_err(js_error)?,
            None => BoardConfig::default(),
        };
        let inner = Session::new(config).map_err(js_error)?;
        Ok(WebSession { inner })
    }

    pub fn width(&self) -> u32 {
        self.inner.config().width
    }

    pub fn height(&self) -> u32 {
        self.inner.config().height
    }

    /// Drawing size as [view_w, view_h, display_w, display_h]
    pub fn layout(&self) -> Vec<f32> {
        let config = self.inner.config();
        let view = config.view_box();
        let display = config.display_size();
        vec![view.x, view.y, display.x, display.y]
    }

    pub fn is_playing(&self) -> bool {
        self.inner.mode() == Mode::Play
    }

    /// Ball radius in pixels
    pub fn ball_radius(&self) -> f32 {
        self.inner.config().ball_radius
    }

    /// Ball pixel position as [x, y], if a ball is in play
    pub fn ball_position(&self) -> Option<Vec<f32>> {
        self.inner.ball_position().map(|p| vec![p.x, p.y])
    }

    pub fn toggle_mode(&mut self) -> Result<(), JsValue> {
        self.inner.toggle_mode().map_err(js_error)
    }

    /// Cycle a piece; returns its new kind label
    pub fn cycle_piece(&mut self, row: i32, col: i32) -> Result<String, JsValue> {
        let kind = self.inner.cycle_piece(row, col).map_err(js_error)?;
        Ok(kind.label().to_string())
    }

    /// Set a piece from its kind label (`no`, `ol`, `or`, `ob`, `bl`, `br`)
    pub fn set_piece(&mut self, row: i32, col: i32, label: &str) -> Result<(), JsValue> {
        self.inner
            .set_piece_label(row, col, label)
            .map(|_| ())
            .map_err(js_error)
    }

    /// Clear every piece back to `no`
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.inner.reset_board().map_err(js_error)
    }

    pub fn motion_finished(&mut self, ticket: u64) -> Result<(), JsValue> {
        self.inner.motion_finished(ticket).map_err(js_error)
    }

    /// Queued events as a JSON array
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.drain_events()).map_err(js_error)
    }

    /// Every piece as a JSON array of `{row, col, kind, origin}`
    pub fn pieces(&self) -> Result<String, JsValue> {
        serde_json::to_string(&grid_view(&self.inner)).map_err(js_error)
    }
}
