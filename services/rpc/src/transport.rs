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

use crate::SignedRequest;
use alicloud_core::{Context, Error, Result};
use encoding_rs::{Encoding, UTF_8};
use http::header::CONTENT_TYPE;
use http::HeaderMap;
use log::Level;
use serde_json::Value;

/// Send a signed request and parse the JSON response.
///
/// Non-success statuses fail with [`ErrorKind::HttpStatus`](alicloud_core::ErrorKind::HttpStatus)
/// carrying the response body verbatim. The returned JSON is not validated
/// against any schema.
pub async fn execute(ctx: &Context, req: &SignedRequest) -> Result<Value> {
    ctx.log(Level::Debug, format_args!("URL requested: {}", req.url));

    let resp = ctx.http_send(req.to_http()?).await?;
    let (parts, body) = resp.into_parts();
    let text = decode_body(&parts.headers, &body);

    if !parts.status.is_success() {
        ctx.log(Level::Error, format_args!("Error GETing URL: {}", req.url));
        return Err(Error::http_status(parts.status, text));
    }

    ctx.log(Level::Debug, format_args!("URL response: {text}"));
    Ok(serde_json::from_str(&text)?)
}

/// Decode `body` with the charset declared by `Content-Type`, UTF-8 otherwise.
fn decode_body(headers: &HeaderMap, body: &[u8]) -> String {
    let encoding = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .and_then(|m| {
            m.get_param(mime::CHARSET)
                .and_then(|charset| Encoding::for_label(charset.as_str().as_bytes()))
        })
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}
