use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use crate::errors::StoryError;
use crate::streaming::driver::Transport;
use crate::streaming::session::SessionEvent;

/// Browser WebSocket feeding [`SessionEvent`]s to a handler.
///
/// The JS callbacks are owned here rather than leaked; they are detached from
/// the socket before being dropped.
pub struct WebSocketTransport {
    socket: WebSocket,
    _on_open: Closure<dyn FnMut()>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl WebSocketTransport {
    pub fn connect(url: &str, handler: impl Fn(SessionEvent) + 'static) -> Result<Self, StoryError> {
        log::info!("Connecting to story stream at {url}");
        let socket = WebSocket::new(url).map_err(|e| {
            log::error!("Failed to open WebSocket: {e:?}");
            StoryError::Connection
        })?;

        let handler: Rc<dyn Fn(SessionEvent)> = Rc::new(handler);

        let on_open = {
            let handler = handler.clone();
            Closure::wrap(Box::new(move || {
                log::info!("Story stream connected");
                handler(SessionEvent::Opened);
            }) as Box<dyn FnMut()>)
        };

        let on_message = {
            let handler = handler.clone();
            Closure::wrap(Box::new(move |event: MessageEvent| {
                match event.data().as_string() {
                    Some(text) => handler(SessionEvent::Received(text)),
                    None => log::warn!("Ignoring non-text frame on story stream"),
                }
            }) as Box<dyn FnMut(MessageEvent)>)
        };

        let on_error = {
            let handler = handler.clone();
            Closure::wrap(Box::new(move |event: Event| {
                log::error!("Story stream error: {:?}", event.type_());
                handler(SessionEvent::TransportError);
            }) as Box<dyn FnMut(Event)>)
        };

        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            log::info!("Story stream closed (code {})", event.code());
            handler(SessionEvent::Closed);
        }) as Box<dyn FnMut(CloseEvent)>);

        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Ok(WebSocketTransport {
            socket,
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        })
    }

    fn detach(&self) {
        self.socket.set_onopen(None);
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        self.socket.set_onclose(None);
    }
}

impl Transport for WebSocketTransport {
    fn send(&self, text: &str) -> Result<(), StoryError> {
        self.socket.send_with_str(text).map_err(|e| {
            log::error!("Failed to send on story stream: {e:?}");
            StoryError::Connection
        })
    }

    fn is_active(&self) -> bool {
        matches!(
            self.socket.ready_state(),
            WebSocket::CONNECTING | WebSocket::OPEN
        )
    }

    fn close(&mut self) {
        self.detach();
        if let Err(e) = self.socket.close() {
            log::warn!("Failed to close story stream: {e:?}");
        }
    }
}

impl Drop for WebSocketTransport {
    fn drop(&mut self) {
        self.detach();
    }
}
