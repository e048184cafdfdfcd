//! Browser bindings for the core seams.
//!
//! With the `web` feature these talk to the DOM through `web-sys`. During
//! server rendering there is no document, so patches do nothing and
//! notifications go to the log.

use skyshine_core::{BodyStyle, DocumentPatch, LogNotifier, Notifier, Parallax};
use thiserror::Error;
#[cfg(feature = "web")]
use tracing::warn;

/// Error type for DOM operations
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("no element with id {0}")]
    MissingElement(&'static str),

    #[error("DOM call failed: {0}")]
    Call(&'static str),
}

// ============================================================================
// Notifications
// ============================================================================

/// `window.alert` in the browser, the log on the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        #[cfg(feature = "web")]
        {
            if let Err(err) = dom::alert(message) {
                warn!(error = %err, "Alert failed, logging instead");
                LogNotifier.notify(message);
            }
        }

        #[cfg(not(feature = "web"))]
        LogNotifier.notify(message);
    }
}

// ============================================================================
// Document patches
// ============================================================================

/// Inline `<body>` style, restoring whatever was there before on revert.
pub struct BodyStylePatch {
    style: BodyStyle,
    previous: Vec<(&'static str, String)>,
}

impl BodyStylePatch {
    pub fn new(style: BodyStyle) -> Self {
        Self {
            style,
            previous: Vec::new(),
        }
    }
}

impl DocumentPatch for BodyStylePatch {
    fn name(&self) -> &'static str {
        "body-style"
    }

    fn apply(&mut self) {
        #[cfg(feature = "web")]
        match dom::set_body_style(&self.style.declarations()) {
            Ok(previous) => self.previous = previous,
            Err(err) => warn!(error = %err, "Could not apply body style"),
        }

        #[cfg(not(feature = "web"))]
        let _ = &self.style;
    }

    fn revert(&mut self) {
        let previous = std::mem::take(&mut self.previous);

        #[cfg(feature = "web")]
        if let Err(err) = dom::restore_body_style(&previous) {
            warn!(error = %err, "Could not restore body style");
        }

        #[cfg(not(feature = "web"))]
        drop(previous);
    }
}

/// A `<script type="application/ld+json">` appended to the body.
pub struct JsonLdPatch {
    body: String,
    #[cfg(feature = "web")]
    element: Option<web_sys::Element>,
}

impl JsonLdPatch {
    pub fn new(document: &serde_json::Value) -> Self {
        Self {
            body: document.to_string(),
            #[cfg(feature = "web")]
            element: None,
        }
    }
}

impl DocumentPatch for JsonLdPatch {
    fn name(&self) -> &'static str {
        "json-ld"
    }

    fn apply(&mut self) {
        #[cfg(feature = "web")]
        match dom::append_json_ld(&self.body) {
            Ok(element) => self.element = Some(element),
            Err(err) => warn!(error = %err, "Could not inject structured data"),
        }

        #[cfg(not(feature = "web"))]
        let _ = &self.body;
    }

    fn revert(&mut self) {
        #[cfg(feature = "web")]
        if let Some(element) = self.element.take() {
            element.remove();
        }
    }
}

/// Moves one element with the pointer. A `mousemove` listener on the window
/// records the pointer and at most one animation frame is queued to write
/// the `transform`. Revert removes the listener, cancels a queued frame and
/// clears the transform.
pub struct ParallaxPatch {
    element_id: &'static str,
    parallax: Parallax,
    #[cfg(feature = "web")]
    listener: Option<dom::PointerListener>,
}

impl ParallaxPatch {
    pub fn new(element_id: &'static str, parallax: Parallax) -> Self {
        Self {
            element_id,
            parallax,
            #[cfg(feature = "web")]
            listener: None,
        }
    }
}

impl DocumentPatch for ParallaxPatch {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn apply(&mut self) {
        #[cfg(feature = "web")]
        match dom::PointerListener::attach(self.element_id, self.parallax) {
            Ok(listener) => self.listener = Some(listener),
            Err(err) => warn!(error = %err, "Could not start parallax"),
        }

        #[cfg(not(feature = "web"))]
        let _ = (self.element_id, self.parallax);
    }

    fn revert(&mut self) {
        #[cfg(feature = "web")]
        if let Some(listener) = self.listener.take() {
            if let Err(err) = listener.detach() {
                warn!(error = %err, "Could not fully stop parallax");
            }
        }
    }
}

/// Reports changes of the reduced-motion preference while applied.
pub struct ReducedMotionWatch {
    on_change: Option<Box<dyn FnMut(bool)>>,
    #[cfg(feature = "web")]
    listener: Option<dom::MediaListener>,
}

impl ReducedMotionWatch {
    pub fn new(on_change: impl FnMut(bool) + 'static) -> Self {
        Self {
            on_change: Some(Box::new(on_change)),
            #[cfg(feature = "web")]
            listener: None,
        }
    }
}

impl DocumentPatch for ReducedMotionWatch {
    fn name(&self) -> &'static str {
        "reduced-motion-watch"
    }

    fn apply(&mut self) {
        let Some(on_change) = self.on_change.take() else {
            return;
        };

        #[cfg(feature = "web")]
        match dom::MediaListener::attach(skyshine_core::REDUCED_MOTION_QUERY, on_change) {
            Ok(listener) => self.listener = Some(listener),
            Err(err) => warn!(error = %err, "Could not watch motion preference"),
        }

        #[cfg(not(feature = "web"))]
        drop(on_change);
    }

    fn revert(&mut self) {
        #[cfg(feature = "web")]
        if let Some(listener) = self.listener.take() {
            if let Err(err) = listener.detach() {
                warn!(error = %err, "Could not stop watching motion preference");
            }
        }
    }
}

/// True when the visitor asked the OS for reduced motion.
#[cfg(feature = "web")]
pub fn prefers_reduced_motion() -> bool {
    dom::matches_media(skyshine_core::REDUCED_MOTION_QUERY).unwrap_or(false)
}

#[cfg(not(feature = "web"))]
pub fn prefers_reduced_motion() -> bool {
    false
}

#[cfg(feature = "web")]
mod dom {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use skyshine_core::structured_data::JSON_LD_MIME;
    use skyshine_core::{
        apply_declarations, restore_declarations, FrameThrottle, Parallax, StyleTarget,
    };
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        CssStyleDeclaration, Document, Element, HtmlElement, MediaQueryList, MouseEvent, Window,
    };

    use super::DomError;

    fn window() -> Result<Window, DomError> {
        web_sys::window().ok_or(DomError::NoWindow)
    }

    fn document() -> Result<Document, DomError> {
        window()?.document().ok_or(DomError::NoDocument)
    }

    fn body() -> Result<HtmlElement, DomError> {
        document()?.body().ok_or(DomError::NoBody)
    }

    pub fn alert(message: &str) -> Result<(), DomError> {
        window()?
            .alert_with_message(message)
            .map_err(|_| DomError::Call("alert"))
    }

    fn media_query(query: &str) -> Result<MediaQueryList, DomError> {
        window()?
            .match_media(query)
            .map_err(|_| DomError::Call("matchMedia"))?
            .ok_or(DomError::Call("matchMedia"))
    }

    pub fn matches_media(query: &str) -> Result<bool, DomError> {
        Ok(media_query(query)?.matches())
    }

    /// An element's inline style
    struct InlineStyle(CssStyleDeclaration);

    impl StyleTarget for InlineStyle {
        type Error = DomError;

        fn property(&self, name: &str) -> Result<String, DomError> {
            self.0
                .get_property_value(name)
                .map_err(|_| DomError::Call("getPropertyValue"))
        }

        fn set_property(&self, name: &str, value: &str) -> Result<(), DomError> {
            self.0
                .set_property(name, value)
                .map_err(|_| DomError::Call("setProperty"))
        }

        fn remove_property(&self, name: &str) -> Result<(), DomError> {
            self.0
                .remove_property(name)
                .map(drop)
                .map_err(|_| DomError::Call("removeProperty"))
        }
    }

    /// Set each declaration and return the values they replaced. Nothing
    /// stays applied on error.
    pub fn set_body_style(
        declarations: &[(&'static str, &'static str)],
    ) -> Result<Vec<(&'static str, String)>, DomError> {
        apply_declarations(&InlineStyle(body()?.style()), declarations)
    }

    pub fn restore_body_style(previous: &[(&'static str, String)]) -> Result<(), DomError> {
        restore_declarations(&InlineStyle(body()?.style()), previous)
    }

    pub fn append_json_ld(text: &str) -> Result<Element, DomError> {
        let document = document()?;
        let script = document
            .create_element("script")
            .map_err(|_| DomError::Call("createElement"))?;
        script
            .set_attribute("type", JSON_LD_MIME)
            .map_err(|_| DomError::Call("setAttribute"))?;
        script.set_text_content(Some(text));
        body()?
            .append_child(&script)
            .map_err(|_| DomError::Call("appendChild"))?;
        Ok(script)
    }

    fn viewport(window: &Window) -> Option<(f64, f64)> {
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some((width, height))
    }

    /// Shared between the pointer and frame callbacks
    #[derive(Default)]
    struct FrameState {
        pointer: Cell<(f64, f64)>,
        throttle: RefCell<FrameThrottle>,
        handle: Cell<Option<i32>>,
    }

    pub struct PointerListener {
        window: Window,
        element: HtmlElement,
        state: Rc<FrameState>,
        on_move: Closure<dyn FnMut(MouseEvent)>,
        // Held so the frame callback outlives any queued frame
        _on_frame: Closure<dyn FnMut()>,
    }

    impl PointerListener {
        pub fn attach(element_id: &'static str, parallax: Parallax) -> Result<Self, DomError> {
            let window = window()?;
            let element: HtmlElement = document()?
                .get_element_by_id(element_id)
                .ok_or(DomError::MissingElement(element_id))?
                .dyn_into()
                .map_err(|_| DomError::Call("dyn_into HtmlElement"))?;
            let state = Rc::new(FrameState::default());

            let on_frame = {
                let state = Rc::clone(&state);
                let window = window.clone();
                let style = element.style();
                Closure::<dyn FnMut()>::new(move || {
                    state.handle.set(None);
                    state.throttle.borrow_mut().complete();
                    let Some(size) = viewport(&window) else {
                        return;
                    };
                    let transform = parallax.transform(state.pointer.get(), size);
                    // A failed write only skips this frame
                    let _ = style.set_property("transform", &transform);
                })
            };

            let on_move = {
                let state = Rc::clone(&state);
                let window = window.clone();
                let frame: JsValue = on_frame.as_ref().clone();
                Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                    state
                        .pointer
                        .set((f64::from(event.client_x()), f64::from(event.client_y())));
                    if !state.throttle.borrow_mut().request() {
                        return;
                    }
                    match window.request_animation_frame(frame.unchecked_ref()) {
                        Ok(handle) => state.handle.set(Some(handle)),
                        Err(_) => state.throttle.borrow_mut().complete(),
                    }
                })
            };

            window
                .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
                .map_err(|_| DomError::Call("addEventListener"))?;

            Ok(Self {
                window,
                element,
                state,
                on_move,
                _on_frame: on_frame,
            })
        }

        /// Every step is attempted; the first failure is returned.
        pub fn detach(self) -> Result<(), DomError> {
            let removed = self
                .window
                .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref())
                .map_err(|_| DomError::Call("removeEventListener"));

            let cancelled = match self.state.handle.take() {
                Some(handle) => self
                    .window
                    .cancel_animation_frame(handle)
                    .map_err(|_| DomError::Call("cancelAnimationFrame")),
                None => Ok(()),
            };

            let cleared = self
                .element
                .style()
                .remove_property("transform")
                .map(drop)
                .map_err(|_| DomError::Call("removeProperty"));

            removed.and(cancelled).and(cleared)
        }
    }

    pub struct MediaListener {
        list: MediaQueryList,
        on_change: Closure<dyn FnMut()>,
    }

    impl MediaListener {
        /// Calls `on_change` with the new match state on every `change` event.
        pub fn attach(query: &str, mut on_change: Box<dyn FnMut(bool)>) -> Result<Self, DomError> {
            let list = media_query(query)?;
            let on_change = {
                let list = list.clone();
                Closure::<dyn FnMut()>::new(move || on_change(list.matches()))
            };
            list.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                .map_err(|_| DomError::Call("addEventListener"))?;
            Ok(Self { list, on_change })
        }

        pub fn detach(self) -> Result<(), DomError> {
            self.list
                .remove_event_listener_with_callback("change", self.on_change.as_ref().unchecked_ref())
                .map_err(|_| DomError::Call("removeEventListener"))
        }
    }
}
