use std::io::Read;

use ureq::Error::{Status, Transport};

use super::{FileDownloader, Response};

/// Blocking fetcher with ureq's default agent and timeouts.
pub struct UReqFetcher {
    agent: ureq::Agent,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) if response.status() == 200 => {
                let mut body = Vec::new();

                if let Err(err) = response.into_reader().read_to_end(&mut body) {
                    return Response::invalid_body(err.to_string());
                }

                Response::ok(body)
            }

            Ok(response) => Response::status(response.status()),

            Err(Status(code, _)) => Response::status(code),

            Err(Transport(transport)) => Response::network_error(transport.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        UReqFetcher {
            agent: ureq::Agent::new(),
        }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
