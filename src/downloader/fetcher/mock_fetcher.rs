use std::cell::RefCell;
use std::collections::HashMap;

use super::{FileDownloader, Response};

/// Answers by URL and remembers every URL it was asked for. Unknown URLs
/// behave like an unreachable host.
pub struct MockFetcher {
    responses: HashMap<String, Response>,
    requests: RefCell<Vec<String>>,
}

impl FileDownloader for MockFetcher {
    fn fetch(&self, url: &str) -> Response {
        self.requests.borrow_mut().push(url.to_string());

        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Response::network_error("connection refused"))
    }
}

impl MockFetcher {
    pub fn new<U: Into<String>>(responses: impl IntoIterator<Item = (U, Response)>) -> Self {
        Self {
            responses: responses
                .into_iter()
                .map(|(url, response)| (url.into(), response))
                .collect(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new(Vec::<(String, Response)>::new())
    }
}
