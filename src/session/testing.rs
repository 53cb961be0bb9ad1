//! Scripted transport for exercising the session without a network

use std::cell::RefCell;
use std::collections::VecDeque;

use url::Url;

use super::client::Client;
use super::request::{Page, Request};
use super::transport::Transport;
use crate::error::{SaveyError, SaveyResult};

pub const BASE: &str = "http://www.savey.co/";

enum Reply {
    Page { url: String, body: String },
    Fail(String),
}

/// Replays canned responses in order and records every request it sees
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response whose redirects ended on `url`
    pub fn respond(self, url: &str, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Reply::Page {
            url: url.to_string(),
            body: body.to_string(),
        });
        self
    }

    /// Queue a transport failure
    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Reply::Fail(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn request_paths(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: Request) -> SaveyResult<Page> {
        self.requests.borrow_mut().push(request);

        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Page { url, body }) => Ok(Page {
                url: Url::parse(&url)?,
                status: 200,
                body,
            }),
            Some(Reply::Fail(message)) => Err(SaveyError::Transport(message)),
            None => Err(SaveyError::Transport("no scripted response left".into())),
        }
    }
}

pub fn client_with(transport: ScriptedTransport) -> Client<ScriptedTransport> {
    Client::with_transport(transport, BASE, "savey-test").unwrap()
}

pub fn dashboard() -> String {
    format!("{}dashboard/", BASE)
}

pub fn manage() -> String {
    format!("{}manage", BASE)
}
