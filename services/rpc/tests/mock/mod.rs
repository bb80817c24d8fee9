// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! In-memory collaborators shared by the integration tests.

use alicloud_core::{Context, FileRead, HttpSend, Result};
use alicloud_rpc::Parameters;
use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::StatusCode;
use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex};

type Handler = dyn Fn(&Parameters) -> http::Response<Bytes> + Send + Sync;

/// HttpSend answering every request through `handler` and recording its URL.
#[derive(Clone)]
pub struct MockHttpSend {
    handler: Arc<Handler>,
    urls: Arc<Mutex<Vec<String>>>,
}

impl Debug for MockHttpSend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpSend")
            .field("urls", &self.urls)
            .finish_non_exhaustive()
    }
}

impl MockHttpSend {
    pub fn new(
        handler: impl Fn(&Parameters) -> http::Response<Bytes> + Send + Sync + 'static,
    ) -> Self {
        Self {
            handler: Arc::new(handler),
            urls: Arc::default(),
        }
    }

    /// Answer every request with `body` and status 200.
    pub fn json(body: Value) -> Self {
        Self::new(move |_| json_response(StatusCode::OK, &body.to_string()))
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    /// Decoded query parameters of every request sent so far.
    pub fn requests(&self) -> Vec<Parameters> {
        self.urls().iter().map(|url| query_params(url)).collect()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let url = req.uri().to_string();
        self.urls.lock().unwrap().push(url.clone());
        Ok((self.handler)(&query_params(&url)))
    }
}

/// FileRead failing the test if anything touches the filesystem.
#[derive(Debug)]
pub struct PanicFileRead;

#[async_trait]
impl FileRead for PanicFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        panic!("file {path} must not be read");
    }
}

/// Logger keeping every record it receives.
#[derive(Clone, Default)]
pub struct CapturingLog {
    records: Arc<Mutex<Vec<(log::Level, String)>>>,
}

impl CapturingLog {
    pub fn records(&self) -> Vec<(log::Level, String)> {
        self.records.lock().unwrap().clone()
    }
}

impl log::Log for CapturingLog {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

pub fn json_response(status: StatusCode, body: &str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json; charset=UTF-8")
        .body(Bytes::from(body.to_string()))
        .unwrap()
}

pub fn query_params(url: &str) -> Parameters {
    let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k), decode(v))
        })
        .collect()
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8().unwrap().into_owned()
}

pub fn context(http: MockHttpSend) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();
    Context::new().with_http_send(http)
}
