use std::cell::RefCell;

use jeopardito_core as game;
use jeopardito_protocol as protocol;
use game::{CategoryId, CategoryRecord, CategorySample, DataProvider, TriviaError};
use rand::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Data provider backed by a jService compatible HTTP API.
#[derive(Debug)]
pub(crate) struct JServiceProvider {
    api_base: String,
    rng: RefCell<SmallRng>,
}

impl JServiceProvider {
    pub(crate) fn new(api_base: impl Into<String>, seed: u64) -> Self {
        Self {
            api_base: api_base.into(),
            rng: RefCell::new(SmallRng::seed_from_u64(seed)),
        }
    }

    fn random_offset(&self) -> u32 {
        self.rng
            .borrow_mut()
            .random_range(0..protocol::SAMPLE_OFFSET_RANGE)
    }
}

impl DataProvider for JServiceProvider {
    async fn sample_category(&self) -> game::Result<CategorySample> {
        let offset = self.random_offset();
        let text = fetch_text(&protocol::categories_url(&self.api_base, offset)).await?;
        protocol::decode_sample(&text)
            .map_err(decode_error)?
            .ok_or_else(|| {
                TriviaError::ProviderFailure(format!("no category at offset {}", offset))
            })
    }

    async fn fetch_category(&self, id: CategoryId) -> game::Result<CategoryRecord> {
        let text = fetch_text(&protocol::category_url(&self.api_base, id)).await?;
        protocol::decode_category(&text).map_err(decode_error)
    }
}

async fn fetch_text(url: &str) -> game::Result<String> {
    log::debug!("GET {}", url);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let response = JsFuture::from(gloo::utils::window().fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(TriviaError::ProviderFailure(format!(
            "GET {} answered {}",
            url,
            response.status()
        )));
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| TriviaError::ProviderFailure(format!("GET {} returned no text", url)))
}

fn js_error(err: JsValue) -> TriviaError {
    TriviaError::ProviderFailure(format!("{:?}", err))
}

fn decode_error(err: serde_json::Error) -> TriviaError {
    TriviaError::ProviderFailure(format!("bad response: {}", err))
}
