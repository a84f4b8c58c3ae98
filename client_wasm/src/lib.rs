//! Browser shell for the Pong simulation
//!
//! Owns the canvas, the animation-frame loop, and the DOM event listeners.
//! Everything here is derived from `GameSession` snapshots and per-frame
//! events; no game rules live on this side.

#![cfg(target_arch = "wasm32")]

mod audio;
mod draw;

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, GameSession};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use audio::AudioPlayer;

/// Everything the shell mutates from event callbacks
struct App {
    session: GameSession,
    audio: AudioPlayer,
    ctx: CanvasRenderingContext2d,
    /// Pending `requestAnimationFrame` handle, cancelled on pause
    raf_handle: Option<i32>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("gameCanvas")
        .expect("no gameCanvas element")
        .dyn_into()?;

    let config = Config::new();
    canvas.set_width(config.playfield_width as u32);
    canvas.set_height(config.playfield_height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .expect("no 2d context")
        .dyn_into()?;

    let seed = js_sys::Date::now() as u64;
    let session = GameSession::new(config, seed);
    log::info!("pong session started (seed {seed})");

    let app = Rc::new(RefCell::new(App {
        session,
        audio: AudioPlayer::new(),
        ctx,
        raf_handle: None,
    }));

    setup_key_listeners(&document, &app);
    setup_pointer_listener(&canvas, &app);
    setup_focus_listeners(&window, &document, &app);
    setup_pause_button(&document, &app);

    schedule_frame(&app);
    Ok(())
}

/// Arm the next animation-frame callback
fn schedule_frame(app: &Rc<RefCell<App>>) {
    let app_rc = app.clone();
    let closure = Closure::once_into_js(move |now_ms: f64| {
        frame(app_rc, now_ms);
    });
    let window = web_sys::window().expect("no window");
    let handle = window
        .request_animation_frame(closure.unchecked_ref())
        .expect("requestAnimationFrame failed");
    app.borrow_mut().raf_handle = Some(handle);
}

/// One display refresh: simulate, present, re-arm
fn frame(app: Rc<RefCell<App>>, now_ms: f64) {
    let advanced = {
        let mut app = app.borrow_mut();
        app.raf_handle = None;

        let advanced = app.session.step(now_ms / 1000.0);
        if advanced {
            for cue in app.session.cues() {
                app.audio.play(cue);
            }
        }

        let snapshot = app.session.snapshot();
        draw::render(&app.ctx, &snapshot, app.session.config());
        draw::update_score(&snapshot);
        advanced
    };

    if advanced {
        schedule_frame(&app);
    }
}

/// Cancel the pending frame request, if any
fn cancel_frame(app: &mut App) {
    if let Some(handle) = app.raf_handle.take() {
        let _ = web_sys::window()
            .expect("no window")
            .cancel_animation_frame(handle);
    }
}

/// Repaint once outside the loop, e.g. to show the pause overlay
fn present(app: &App) {
    let snapshot = app.session.snapshot();
    draw::render(&app.ctx, &snapshot, app.session.config());
    draw::update_score(&snapshot);
}

fn toggle_pause(app: &Rc<RefCell<App>>) {
    let was_paused = app.borrow().session.is_paused();
    if was_paused {
        {
            let mut app = app.borrow_mut();
            app.session.resume();
        }
        log::info!("resumed");
        schedule_frame(app);
    } else {
        let mut app = app.borrow_mut();
        app.session.pause();
        cancel_frame(&mut app);
        present(&app);
        log::info!("paused");
    }
}

fn setup_key_listeners(document: &Document, app: &Rc<RefCell<App>>) {
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == " " {
                if !event.repeat() {
                    toggle_pause(&app);
                }
                event.prevent_default();
                return;
            }
            app.borrow_mut().session.key_down(&event.key());
        });
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            app.borrow_mut().session.key_up(&event.key());
        });
        let _ = document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn setup_pointer_listener(canvas: &HtmlCanvasElement, app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let canvas_clone = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
        let rect = canvas_clone.get_bounding_client_rect();
        let y = event.client_y() as f64 - rect.top();
        app.borrow_mut().session.pointer_moved(y as f32);
    });
    let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Auto-pause when the host window or tab loses the foreground
fn setup_focus_listeners(window: &Window, document: &Document, app: &Rc<RefCell<App>>) {
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut app = app.borrow_mut();
            app.session.focus_lost();
            cancel_frame(&mut app);
            present(&app);
            log::info!("auto-paused: window lost focus");
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let app = app.clone();
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut app = app.borrow_mut();
                app.session.focus_lost();
                cancel_frame(&mut app);
                log::info!("auto-paused: tab hidden");
            }
        });
        let _ = document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    }
}

fn setup_pause_button(document: &Document, app: &Rc<RefCell<App>>) {
    if let Some(button) = document.get_element_by_id("pause-btn") {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            toggle_pause(&app);
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
