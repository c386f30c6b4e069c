//! Browser surface. A [`Terminal`] wraps the interpreter plus one session
//! and exposes them to JS through wasm-bindgen. Timer-driven sequences and
//! the contact POST run as spawned futures; whenever one of them mutates the
//! transcript the registered render callback is invoked with the follow-up
//! signals so the page can repaint.

use crate::autocomplete::Suggestions;
use crate::interpreter::{Interpreter, Signal, Submission};
use crate::session::{EmailDraft, Session};
use crate::staged::{self, StagedKind};
use crate::transport::TransportError;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Request, RequestInit, RequestMode, Response};

thread_local! {
    static RENDER: RefCell<Option<js_sys::Function>> = RefCell::new(None);
}

/// Invoke the page's render callback with any signals produced off the
/// submit path. Errors from the JS side are logged, not propagated.
fn notify(signals: &[Signal]) {
    let payload = match serde_wasm_bindgen::to_value(signals) {
        Ok(value) => value,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
            return;
        }
    };
    RENDER.with(|cell| {
        if let Some(callback) = cell.borrow().as_ref() {
            if let Err(err) = callback.call1(&JsValue::NULL, &payload) {
                web_sys::console::error_1(&err);
            }
        }
    });
}

#[wasm_bindgen]
pub struct Terminal {
    interpreter: Rc<Interpreter>,
    session: Rc<RefCell<Session>>,
}

#[wasm_bindgen]
impl Terminal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Terminal {
        Terminal {
            interpreter: Rc::new(Interpreter::new()),
            session: Rc::new(RefCell::new(Session::new())),
        }
    }

    /// Register the callback invoked after asynchronous transcript updates.
    /// It receives an array of signals (possibly empty).
    pub fn set_render_callback(&self, callback: js_sys::Function) {
        RENDER.with(|cell| *cell.borrow_mut() = Some(callback));
    }

    /// Submit one input line. Returns `{ entries, signals }`; staged
    /// sequences and draft delivery are already scheduled when this returns,
    /// every other signal is the caller's to act on.
    pub fn submit(&self, line: &str) -> Result<JsValue, JsValue> {
        let submission = self.interpreter.submit(&mut self.session.borrow_mut(), line);
        self.schedule(&submission);
        to_js(&submission)
    }

    /// ESC handler: abort the email dialogue if one is active.
    pub fn cancel(&self) -> bool {
        self.interpreter
            .cancel_dialogue(&mut self.session.borrow_mut())
            .is_some()
    }

    pub fn transcript(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.borrow().transcript())
    }

    pub fn prompt(&self) -> String {
        self.session.borrow().prompt().to_string()
    }

    pub fn path(&self) -> String {
        self.session.borrow().path_string()
    }

    /// 0 in command mode, 1..4 while the email dialogue is capturing.
    pub fn dialogue_step(&self) -> u8 {
        self.session.borrow().dialogue_step()
    }

    pub fn recall_prev(&self) -> Option<String> {
        self.session.borrow_mut().recall_prev().map(str::to_string)
    }

    pub fn recall_next(&self) -> Option<String> {
        self.session.borrow_mut().recall_next().map(str::to_string)
    }

    /// Keyword suggestions for a `/`-prefixed input buffer, or null.
    pub fn suggest(&self, buffer: &str) -> Result<JsValue, JsValue> {
        match Suggestions::for_input(buffer) {
            Some(s) => to_js(s.matches()),
            None => Ok(JsValue::NULL),
        }
    }

    fn schedule(&self, submission: &Submission) {
        for signal in &submission.signals {
            match signal {
                Signal::Staged { entry, kind } => self.run_staged(*entry, *kind),
                Signal::SendDraft { draft } => self.deliver(draft.clone()),
                _ => {}
            }
        }
    }

    fn run_staged(&self, entry: crate::session::EntryId, kind: StagedKind) {
        let interpreter = Rc::clone(&self.interpreter);
        let session = Rc::clone(&self.session);
        spawn_local(async move {
            for (i, delay) in staged::delays(kind).iter().enumerate() {
                TimeoutFuture::new(*delay).await;
                let signals =
                    interpreter.advance_stage(&mut session.borrow_mut(), entry, kind, i + 1);
                notify(&signals);
            }
        });
    }

    fn deliver(&self, draft: EmailDraft) {
        let interpreter = Rc::clone(&self.interpreter);
        let session = Rc::clone(&self.session);
        spawn_local(async move {
            let outcome = post_contact(&draft).await;
            interpreter.resolve_transport(&mut session.borrow_mut(), outcome);
            notify(&[]);
        });
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}


/// POST the finalized draft to the site's contact endpoint.
async fn post_contact(draft: &EmailDraft) -> Result<(), TransportError> {
    let body = serde_json::to_string(draft)
        .map_err(|err| TransportError::Rejected(err.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init("/api/contact", &opts)
        .map_err(|_| TransportError::Unknown)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| TransportError::Unknown)?;

    let window = web_sys::window().ok_or(TransportError::Unknown)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| TransportError::Rejected("Could not reach server.".to_string()))?;
    let response: Response = response.dyn_into().map_err(|_| TransportError::Unknown)?;
    if response.ok() {
        Ok(())
    } else {
        Err(TransportError::Rejected(format!(
            "Server responded with status {}.",
            response.status()
        )))
    }
}
