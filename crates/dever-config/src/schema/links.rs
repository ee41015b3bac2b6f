//! Link interception policy.

use serde::{Deserialize, Serialize};

pub use dever_common::types::{InPlacePolicy, LinkRoute};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LinksConfig {
    pub route: LinkRoute,
    pub in_place: InPlacePolicy,
}
