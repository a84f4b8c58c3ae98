//! Canvas 2D presentation
//!
//! Pure sink: paints whatever the latest snapshot says, nothing more.

use game_core::{Config, Side, Snapshot};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Paint one frame from a simulation snapshot
pub fn render(ctx: &CanvasRenderingContext2d, snapshot: &Snapshot, config: &Config) {
    let width = config.playfield_width as f64;
    let height = config.playfield_height as f64;

    // Clear
    ctx.set_fill_style_str("#000");
    ctx.fill_rect(0.0, 0.0, width, height);

    // Dashed center line
    let dashes = js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(5.0));
    let _ = ctx.set_line_dash(&dashes);
    ctx.set_stroke_style_str("#fff");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(width / 2.0, 0.0);
    ctx.line_to(width / 2.0, height);
    ctx.stroke();
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    // Paddles
    ctx.set_fill_style_str("#fff");
    ctx.fill_rect(
        config.paddle_x(Side::Player) as f64,
        snapshot.player_y as f64,
        config.paddle_width as f64,
        config.paddle_height as f64,
    );
    ctx.fill_rect(
        config.paddle_x(Side::Ai) as f64,
        snapshot.ai_y as f64,
        config.paddle_width as f64,
        config.paddle_height as f64,
    );

    // Ball
    ctx.fill_rect(
        snapshot.ball_pos.x as f64,
        snapshot.ball_pos.y as f64,
        config.ball_size as f64,
        config.ball_size as f64,
    );

    if snapshot.paused {
        ctx.set_font("32px monospace");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("PAUSED", width / 2.0, height / 2.0 - 40.0);
    }
}

/// Push the current scores into the DOM, skipping missing elements
pub fn update_score(snapshot: &Snapshot) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id("player-score") {
        el.set_text_content(Some(&snapshot.player_score.to_string()));
    }
    if let Some(el) = document.get_element_by_id("ai-score") {
        el.set_text_content(Some(&snapshot.ai_score.to_string()));
    }
}
