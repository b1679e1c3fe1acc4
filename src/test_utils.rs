//! Test utilities shared across modules.
//!
//! Provides a canned [`Transport`] that records every request and a
//! [`Session`] wired to it and to a [`Recorder`], so commands can be run
//! end to end without network access or a terminal.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::{json, Value};

use crate::api::{Params, Transport};
use crate::commands::Session;
use crate::config::Config;
use crate::display::recorder::Recorder;
use crate::error::{GhiError, Result};
use crate::git::Repository;
use crate::render::tests::plain_context;

/// One request seen by [`FakeTransport`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Request {
    Get(String, Vec<(&'static str, String)>),
    Patch(String, Value),
    Post(String, Value),
}

/// Answers GETs from a path table; unknown paths get a 404.
///
/// List endpoints only have a first page: any `page` above 1 is empty.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    responses: HashMap<String, Value>,
    post_reply: Option<Value>,
    pub(crate) requests: RefCell<Vec<Request>>,
}

impl FakeTransport {
    pub(crate) fn with(mut self, path: &str, response: Value) -> Self {
        self.responses.insert(path.to_string(), response);
        self
    }

    pub(crate) fn replying_to_post(mut self, reply: Value) -> Self {
        self.post_reply = Some(reply);
        self
    }

    pub(crate) fn writes(&self) -> Vec<Request> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| !matches!(r, Request::Get(..)))
            .cloned()
            .collect()
    }

    /// Params of the first GET to `path`.
    pub(crate) fn params_for(&self, path: &str) -> Vec<(&'static str, String)> {
        self.requests
            .borrow()
            .iter()
            .find_map(|r| match r {
                Request::Get(p, params) if p == path => Some(params.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl Transport for FakeTransport {
    fn get(&self, path: &str, params: &Params) -> Result<Value> {
        self.requests
            .borrow_mut()
            .push(Request::Get(path.to_string(), params.to_vec()));

        let later_page = params.iter().any(|(k, v)| *k == "page" && v != "1");
        if later_page {
            return Ok(json!([]));
        }
        self.responses
            .get(path)
            .cloned()
            .ok_or(GhiError::Status(404))
    }

    fn patch(&self, path: &str, payload: &Value) -> Result<Value> {
        self.requests
            .borrow_mut()
            .push(Request::Patch(path.to_string(), payload.clone()));
        Ok(self.responses.get(path).cloned().unwrap_or_else(|| json!({})))
    }

    fn post(&self, path: &str, payload: &Value) -> Result<Value> {
        self.requests
            .borrow_mut()
            .push(Request::Post(path.to_string(), payload.clone()));
        Ok(self.post_reply.clone().unwrap_or_else(|| json!({})))
    }
}

/// A colorless session for `octocat/hello` with the spinner off.
pub(crate) fn fake_session(transport: FakeTransport) -> Session<FakeTransport, Recorder> {
    Session {
        transport,
        presenter: Recorder::default(),
        repo: Repository::new("octocat", "hello"),
        ctx: plain_context(),
        config: Config::default(),
        show_spinner: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_path_is_not_found() {
        let transport = FakeTransport::default();
        let err = transport.get("repos/a/b/labels", &[]).unwrap_err();
        assert!(matches!(err, GhiError::Status(404)));
    }

    #[test]
    fn test_later_pages_are_empty() {
        let transport = FakeTransport::default().with("x", json!([1]));
        assert_eq!(transport.get_pages("x", &[]).unwrap(), vec![json!(1)]);
        assert_eq!(transport.requests.borrow().len(), 2);
    }

    #[test]
    fn test_writes_are_recorded() {
        let transport = FakeTransport::default();
        transport.patch("p", &json!({"a": 1})).unwrap();
        transport.get("x", &[]).ok();
        transport.post("q", &json!({"b": 2})).unwrap();
        assert_eq!(
            transport.writes(),
            vec![
                Request::Patch("p".to_string(), json!({"a": 1})),
                Request::Post("q".to_string(), json!({"b": 2})),
            ]
        );
    }
}
