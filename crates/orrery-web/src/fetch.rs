//! Browser `fetch` transport for the question-answer service.

use orrery_core::{AskError, HttpTransport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub struct FetchTransport;

fn js_err(e: JsValue) -> AskError {
    AskError::Transport(format!("{e:?}"))
}

impl HttpTransport for FetchTransport {
    async fn post_json(&self, url: &str, headers: &[(&str, &str)], body: String) -> Result<String, AskError> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
        for (name, value) in headers {
            request.headers().set(name, value).map_err(js_err)?;
        }

        let win = web_sys::window().ok_or_else(|| AskError::Transport("no window".into()))?;
        let resp_val = JsFuture::from(win.fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        let resp: Response = resp_val.dyn_into().map_err(js_err)?;

        let text_val = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        let text = text_val
            .as_string()
            .ok_or_else(|| AskError::Transport("response.text() was not a string".into()))?;

        if !resp.ok() {
            return Err(AskError::Status {
                status: resp.status(),
                body: text,
            });
        }
        Ok(text)
    }
}
