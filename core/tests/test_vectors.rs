//! Verify the requests `ApiClient` hands to its transport against the JSON
//! vectors in `test-vectors/requests.json`.
//!
//! Bodies are compared as parsed JSON, not raw strings, so field ordering in
//! the vector file does not matter.

use std::cell::RefCell;

use ensek_core::{
    ApiClient, ApiError, ClientConfig, Headers, HttpMethod, HttpRequest, HttpResponse, Transport,
};

/// Keeps the last request and answers 200 with an empty body.
#[derive(Default)]
struct Recorder {
    last: RefCell<Option<HttpRequest>>,
}

impl Transport for &Recorder {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        *self.last.borrow_mut() = Some(request.clone());
        Ok(HttpResponse {
            status: 200,
            headers: Headers::new(),
            body: String::new(),
        })
    }
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn preset<T: Transport>(client: &ApiClient<T>, name: Option<&str>) -> Option<Headers> {
    match name? {
        "default" => Some(client.default_headers()),
        "authorized" => Some(client.authorized_headers()),
        "json" => Some(client.json_headers(false)),
        "json_with_token" => Some(client.json_headers(true)),
        other => panic!("unknown header preset: {other}"),
    }
}

#[test]
fn request_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    let base_url = vectors["base_url"].as_str().unwrap();
    let token = vectors["token"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let call = &case["call"];
        let expected = &case["expected_request"];

        let recorder = Recorder::default();
        let client = ApiClient::with_transport(ClientConfig::new(base_url, token), &recorder);
        let headers = preset(&client, call["headers"].as_str());
        let path = call["path"].as_str().unwrap();
        let payload = &call["payload"];

        let response = match (parse_method(call["method"].as_str().unwrap()), payload.is_null()) {
            (HttpMethod::Get, _) => client.get(path, headers.as_ref()),
            (HttpMethod::Delete, _) => client.delete(path, headers.as_ref()),
            (HttpMethod::Post, false) => client.post(path, payload, headers.as_ref()),
            (HttpMethod::Post, true) => client.post_empty(path, headers.as_ref()),
            (HttpMethod::Put, false) => client.put(path, payload, headers.as_ref()),
            (HttpMethod::Put, true) => client.put_empty(path, headers.as_ref()),
        };
        assert!(response.unwrap().is_ok(), "{name}: response");

        let req = recorder.last.borrow().clone().expect("request recorded");
        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{base_url}{}", expected["url"].as_str().unwrap()), "{name}: url");

        let expected_headers: Headers = expected["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let pair = h.as_array().unwrap();
                (pair[0].as_str().unwrap(), pair[1].as_str().unwrap())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match req.body.as_deref() {
            Some(body) => {
                let body: serde_json::Value = serde_json::from_str(body).unwrap();
                assert_eq!(body, expected["body"], "{name}: body");
            }
            None => assert!(expected["body"].is_null(), "{name}: body should be None"),
        }
    }
}
