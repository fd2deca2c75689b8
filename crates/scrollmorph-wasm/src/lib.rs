use log::{info, LevelFilter};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use scrollmorph_core::{MorphConfig, MorphContext, PointerInput, ScrollRange};

mod logger;

#[wasm_bindgen]
pub struct ScrollMorph {
    context: MorphContext,
}

#[wasm_bindgen]
impl ScrollMorph {
    /// Create a morphing particle cloud. Pass a config object or
    /// undefined/null for defaults, e.g.
    ///   new ScrollMorph({ particle_count: 1000, final_snap_seconds: 0.1 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ScrollMorph, JsError> {
        console_error_panic_hook::set_once();
        logger::init(LevelFilter::Info);

        let config: MorphConfig = if config.is_undefined() || config.is_null() {
            MorphConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let context = MorphContext::new(config)?;

        info!(
            "WASM ScrollMorph created: {} particles, {} shapes",
            context.sequence().point_count(),
            context.sequence().len()
        );
        Ok(ScrollMorph { context })
    }

    /// Raise console verbosity ("error", "warn", "info", "debug", "trace").
    #[wasm_bindgen]
    pub fn set_log_level(&self, level: &str) -> Result<(), JsError> {
        let filter: LevelFilter = level
            .parse()
            .map_err(|_| JsError::new(&format!("unknown log level: {level}")))?;
        logger::set_level(filter);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.context.live().len()
    }

    /// Pointer into wasm memory for a zero-copy `Float32Array` view.
    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.context.live().as_ptr()
    }

    /// Number of floats behind `positions_ptr` (3 per particle).
    #[wasm_bindgen]
    pub fn positions_len(&self) -> usize {
        self.context.live().as_flat().len()
    }

    /// Copy of the first shape, used to create the point cloud.
    #[wasm_bindgen]
    pub fn initial_positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.context.sequence().first().as_flat())
    }

    #[wasm_bindgen]
    pub fn shape_names(&self) -> Vec<String> {
        self.context.sequence().names()
    }

    #[wasm_bindgen]
    pub fn set_scroll_progress(&mut self, progress: f32) {
        self.context.set_scroll_progress(progress);
    }

    /// Convenience for pages that read the raw scroll position.
    #[wasm_bindgen]
    pub fn set_scroll(&mut self, scroll_top: f32, scroll_height: f32, viewport_height: f32) {
        let progress = ScrollRange::new(scroll_height, viewport_height).progress(scroll_top);
        self.context.set_scroll_progress(progress);
    }

    #[wasm_bindgen]
    pub fn set_pointer(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        self.context
            .set_pointer(PointerInput::from_client(client_x, client_y, width, height));
    }

    /// Advance one frame. Returns true when the position buffer changed and
    /// must be re-uploaded.
    #[wasm_bindgen]
    pub fn tick(&mut self, dt: f32) -> bool {
        self.context.tick(dt).positions_dirty
    }

    #[wasm_bindgen]
    pub fn rotation_x(&self) -> f32 {
        self.context.rotation().0
    }

    #[wasm_bindgen]
    pub fn rotation_y(&self) -> f32 {
        self.context.rotation().1
    }

    /// Clear the dirty flag after uploading; returns its previous value.
    #[wasm_bindgen]
    pub fn take_dirty(&mut self) -> bool {
        self.context.take_dirty()
    }
}
