//! IPC wire format between Rust and JavaScript.
//!
//! - **JS -> Rust**: `window.ipc.postMessage(JSON.stringify({kind, id?, payload}))`
//!   reaches the `ipc_handler` registered on the webview.
//! - **Rust -> JS**: `evaluate_script` calls `window.dever.ipc._dispatch(kind, payload)`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind used by the navigation reporter injected into embedded pages.
pub const NAV_REPORT_KIND: &str = "__dever_nav";

/// A message posted by JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    /// Present on synchronous requests; echoed back in the reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub payload: Value,
}

impl IpcMessage {
    /// Parse a raw body from `postMessage`. Anything malformed yields `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            payload,
        }
    }
}

/// Bridge installed in the main UI webview.
///
/// `send` is fire-and-forget; `request` resolves when the matching `reply`
/// comes back.
pub const UI_BRIDGE_SCRIPT: &str = r#"
(function() {
    if (window.dever && window.dever.ipc) return;
    var nextId = 1;
    var pending = {};
    window.dever = window.dever || {};
    window.dever.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload || {} }));
        },
        request: function(kind, payload) {
            var id = nextId++;
            return new Promise(function(resolve) {
                pending[id] = resolve;
                window.ipc.postMessage(JSON.stringify({ kind: kind, id: id, payload: payload || {} }));
            });
        },
        _handlers: {},
        on: function(kind, callback) {
            (this._handlers[kind] = this._handlers[kind] || []).push(callback);
        },
        _dispatch: function(kind, payload) {
            if (kind === 'reply') {
                var resolve = pending[payload.id];
                if (resolve) {
                    delete pending[payload.id];
                    resolve(payload.value);
                }
                return;
            }
            (this._handlers[kind] || []).forEach(function(cb) { cb(payload); });
        }
    };
})();
"#;

/// Reporter installed in embedded pages. Posts a navigation record on every
/// document load and same-document history change.
///
/// Back/forward ability comes from the Navigation API when the engine has
/// one. Otherwise each session-history entry is stamped with its position
/// under [`HISTORY_INDEX_KEY`] in `history.state`, and the flags are derived
/// from that position against `history.length`.
pub const NAV_REPORT_SCRIPT: &str = r#"
(function() {
    if (window.top !== window || window.__deverNav) return;
    window.__deverNav = true;
    var KEY = '__deverIdx';
    var push = history.pushState;
    var replace = history.replaceState;
    var index = 0;
    function stamped(state) {
        return state && typeof state === 'object' && typeof state[KEY] === 'number'
            ? state[KEY] : null;
    }
    function withIndex(state, idx) {
        if (state === null || state === undefined) {
            var fresh = {};
            fresh[KEY] = idx;
            return fresh;
        }
        if (typeof state !== 'object' || Array.isArray(state)) return state;
        var copy = {};
        for (var k in state) {
            if (Object.prototype.hasOwnProperty.call(state, k)) copy[k] = state[k];
        }
        copy[KEY] = idx;
        return copy;
    }
    function sync() {
        var idx = stamped(history.state);
        if (idx === null) {
            // Unseen entries are always the newest one in the session.
            idx = history.length - 1;
            try { replace.call(history, withIndex(history.state, idx), ''); } catch (e) {}
        }
        index = idx;
    }
    function abilities() {
        var nav = window.navigation;
        if (nav && typeof nav.canGoBack === 'boolean') {
            return { canGoBack: nav.canGoBack, canGoForward: nav.canGoForward };
        }
        return { canGoBack: index > 0, canGoForward: index < history.length - 1 };
    }
    function report(event) {
        var a = abilities();
        window.ipc.postMessage(JSON.stringify({
            kind: '__dever_nav',
            payload: {
                event: event,
                url: location.href,
                canGoBack: a.canGoBack,
                canGoForward: a.canGoForward
            }
        }));
    }
    history.pushState = function(state, title, url) {
        var result = push.call(history, withIndex(state, index + 1), title, url);
        sync();
        report('navigated-in-page');
        return result;
    };
    history.replaceState = function(state, title, url) {
        var result = replace.call(history, withIndex(state, index), title, url);
        report('navigated-in-page');
        return result;
    };
    window.addEventListener('popstate', function() { sync(); report('navigated-in-page'); });
    window.addEventListener('hashchange', function() { sync(); report('navigated-in-page'); });
    sync();
    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', function() { report('navigated'); });
    } else {
        report('navigated');
    }
})();
"#;

/// `history.state` key holding an entry's session-history position.
pub const HISTORY_INDEX_KEY: &str = "__deverIdx";

/// JS snippet delivering `kind`/`payload` to the UI bridge.
pub fn js_dispatch_message(kind: &str, payload: &Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.dever && window.dever.ipc && window.dever.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_message_without_id_or_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"main-win-ready"}"#).unwrap();
        assert_eq!(msg.kind, "main-win-ready");
        assert_eq!(msg.id, None);
        assert_eq!(msg.payload, Value::Null);
    }

    #[test]
    fn parses_request_with_id() {
        let msg =
            IpcMessage::from_json(r#"{"kind":"query-navigation","id":7,"payload":{"slot":"panel"}}"#)
                .unwrap();
        assert_eq!(msg.id, Some(7));
        assert_eq!(msg.payload["slot"], "panel");
    }

    #[test]
    fn rejects_garbage() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":{}}"#).is_none());
    }

    #[test]
    fn dispatch_escapes_strings() {
        let js = js_dispatch_message("open-url-in-modal", &json!({"url": "https://a.test/\"x"}));
        assert!(js.contains(r#"_dispatch("open-url-in-modal", {"url":"https://a.test/\"x"});"#));
    }

    #[test]
    fn scripts_reference_bridge_names() {
        assert!(UI_BRIDGE_SCRIPT.contains("window.dever.ipc"));
        assert!(NAV_REPORT_SCRIPT.contains(NAV_REPORT_KIND));
    }

    #[test]
    fn nav_report_derives_both_flags_from_history_position() {
        assert!(NAV_REPORT_SCRIPT.contains(&format!("var KEY = '{HISTORY_INDEX_KEY}'")));
        assert!(NAV_REPORT_SCRIPT.contains("canGoBack: index > 0"));
        assert!(NAV_REPORT_SCRIPT.contains("canGoForward: index < history.length - 1"));
        assert!(!NAV_REPORT_SCRIPT.contains("canGoForward: false"));
        // Pushed entries sit one past the current one; popstate re-reads the stamp.
        assert!(NAV_REPORT_SCRIPT.contains("withIndex(state, index + 1)"));
        assert!(NAV_REPORT_SCRIPT.contains("'popstate', function() { sync();"));
    }
}
