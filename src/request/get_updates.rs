use crate::api::TelegramApi;
use crate::client::Response;
use crate::error::Result;
use crate::request::Request;
use crate::types::Update;

/// Request for incoming updates using long polling.
///
/// This issues a single call. Callers that poll in a loop must pass an offset one
/// greater than the highest `update_id` already received, otherwise updates repeat.
/// The call fails while an outgoing webhook is set.
#[derive(Debug)]
pub struct GetUpdates {
    api: TelegramApi,
    offset: Option<i64>,
    limit: Option<u32>,
    timeout: Option<u32>,
}

impl GetUpdates {
    pub(crate) fn new(api: TelegramApi) -> Self {
        GetUpdates {
            api,
            offset: None,
            limit: None,
            timeout: None,
        }
    }

    /// Optional. Identifier of the first update to be returned.
    /// Updates with a lower identifier are confirmed by the server.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Optional. Maximum number of updates, 1-100. The server defaults to 100.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Optional. Long polling timeout in seconds. The server defaults to 0 (short polling).
    pub fn timeout(mut self, timeout: u32) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Request for GetUpdates {
    type Output = Vec<Update>;

    fn send(&self) -> Result<Option<Response<Vec<Update>>>> {
        self.api.get_updates(self.offset, self.limit, self.timeout)
    }
}
