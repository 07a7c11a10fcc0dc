//! Existence probe over `fetch` via `gloo-net`.

use futures::future::LocalBoxFuture;

use crate::dom::Prober;
use crate::error::PageError;

/// GETs the resource and reports only the status; the body is discarded.
pub struct HttpProber;

impl Prober for HttpProber {
    fn probe(&self, path: &str) -> LocalBoxFuture<'static, Result<u16, PageError>> {
        let path = path.to_owned();
        Box::pin(async move {
            let resp = gloo_net::http::Request::get(&path)
                .send()
                .await
                .map_err(|err| PageError::Probe(err.to_string()))?;
            Ok(resp.status())
        })
    }
}
