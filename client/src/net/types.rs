//! Wire types shared between server endpoints and the client.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/session`: the server's view of the session credential.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}
