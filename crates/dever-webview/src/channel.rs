//! Control messages posted by the UI layer.

use dever_common::{Rect, SlotName, ViewBounds};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::ipc::IpcMessage;

// =============================================================================
// ALLOWLIST
// =============================================================================

/// Message kinds the UI layer may send. Anything else is rejected.
pub const CONTROL_KINDS: &[&str] = &[
    "create-view",
    "destroy-view",
    "hide-view",
    "show-view",
    "toggle-view",
    "refresh-view",
    "go-home",
    "go-back",
    "go-forward",
    "query-navigation",
    "get-data-path",
    "main-win-ready",
    "quit-app",
];

pub fn is_control_kind(kind: &str) -> bool {
    CONTROL_KINDS.contains(&kind)
}

// =============================================================================
// MESSAGES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("unknown message kind: {0}")]
    UnknownKind(String),

    #[error("invalid payload for {kind}: {reason}")]
    InvalidPayload { kind: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlMessage {
    CreateView {
        slot: SlotName,
        url: String,
        bounds: Option<ViewBounds>,
        toolbar_height: Option<f64>,
    },
    DestroyView(SlotName),
    HideView(SlotName),
    ShowView(SlotName),
    ToggleView(SlotName),
    RefreshView(SlotName),
    GoHome(SlotName),
    GoBack(SlotName),
    GoForward(SlotName),
    /// Synchronous: replies with the slot's navigation snapshot.
    QueryNavigation { id: Option<u64>, slot: SlotName },
    /// Synchronous: replies with a resource path.
    GetDataPath { id: Option<u64>, key: String },
    MainWinReady,
    QuitApp,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateViewPayload {
    slot: SlotName,
    url: String,
    #[serde(default)]
    bounds: Option<Rect>,
    #[serde(default)]
    toolbar_height: Option<f64>,
}

#[derive(Deserialize)]
struct SlotPayload {
    slot: SlotName,
}

#[derive(Deserialize)]
struct DataPathPayload {
    #[serde(default)]
    key: String,
}

impl ControlMessage {
    pub fn parse(msg: &IpcMessage) -> Result<Self, ChannelError> {
        let kind = msg.kind.as_str();
        if !is_control_kind(kind) {
            return Err(ChannelError::UnknownKind(msg.kind.clone()));
        }

        let slot = || payload::<SlotPayload>(kind, &msg.payload).map(|p| p.slot);

        Ok(match kind {
            "create-view" => {
                let p: CreateViewPayload = payload(kind, &msg.payload)?;
                ControlMessage::CreateView {
                    slot: p.slot,
                    url: p.url,
                    bounds: p.bounds.as_ref().map(ViewBounds::from_rect),
                    toolbar_height: p.toolbar_height,
                }
            }
            "destroy-view" => ControlMessage::DestroyView(slot()?),
            "hide-view" => ControlMessage::HideView(slot()?),
            "show-view" => ControlMessage::ShowView(slot()?),
            "toggle-view" => ControlMessage::ToggleView(slot()?),
            "refresh-view" => ControlMessage::RefreshView(slot()?),
            "go-home" => ControlMessage::GoHome(slot()?),
            "go-back" => ControlMessage::GoBack(slot()?),
            "go-forward" => ControlMessage::GoForward(slot()?),
            "query-navigation" => ControlMessage::QueryNavigation {
                id: msg.id,
                slot: slot()?,
            },
            "get-data-path" => {
                let key = if msg.payload.is_null() {
                    String::new()
                } else {
                    payload::<DataPathPayload>(kind, &msg.payload)?.key
                };
                ControlMessage::GetDataPath { id: msg.id, key }
            }
            "main-win-ready" => ControlMessage::MainWinReady,
            "quit-app" => ControlMessage::QuitApp,
            other => return Err(ChannelError::UnknownKind(other.to_string())),
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ControlMessage::CreateView { .. } => "create-view",
            ControlMessage::DestroyView(_) => "destroy-view",
            ControlMessage::HideView(_) => "hide-view",
            ControlMessage::ShowView(_) => "show-view",
            ControlMessage::ToggleView(_) => "toggle-view",
            ControlMessage::RefreshView(_) => "refresh-view",
            ControlMessage::GoHome(_) => "go-home",
            ControlMessage::GoBack(_) => "go-back",
            ControlMessage::GoForward(_) => "go-forward",
            ControlMessage::QueryNavigation { .. } => "query-navigation",
            ControlMessage::GetDataPath { .. } => "get-data-path",
            ControlMessage::MainWinReady => "main-win-ready",
            ControlMessage::QuitApp => "quit-app",
        }
    }
}

fn payload<T: DeserializeOwned>(kind: &str, value: &Value) -> Result<T, ChannelError> {
    T::deserialize(value).map_err(|e| ChannelError::InvalidPayload {
        kind: kind.to_string(),
        reason: e.to_string(),
    })
}
