use crate::api::TelegramApi;
use crate::client::Response;
use crate::error::Result;
use crate::request::Request;
use crate::types::User;

/// Request for basic information about the bot. Useful to test the auth token.
#[derive(Debug)]
pub struct GetMe {
    api: TelegramApi,
}

impl GetMe {
    pub(crate) fn new(api: TelegramApi) -> Self {
        GetMe { api }
    }
}

impl Request for GetMe {
    type Output = User;

    fn send(&self) -> Result<Option<Response<User>>> {
        self.api.get_me()
    }
}
