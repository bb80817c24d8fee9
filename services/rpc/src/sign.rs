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

//! Canonical query signing (signature version 1.0, HMAC-SHA1).

use crate::constants::QUERY_ENCODE_SET;
use crate::Parameters;
use alicloud_core::hash::base64_hmac_sha1;
use percent_encoding::utf8_percent_encode;
use std::fmt::Display;

/// Percent-encode a single key or value.
///
/// Everything except `A-Za-z0-9-_.~` is escaped from its UTF-8 bytes, so
/// space becomes `%20` and `*` becomes `%2A`. Non-string values are encoded
/// from their `Display` form.
pub fn percent_encode(value: impl Display) -> String {
    utf8_percent_encode(&value.to_string(), &QUERY_ENCODE_SET).to_string()
}

/// Encode every pair and join them with `&` in byte-wise key order.
///
/// The same serialization is used for signing and for the final URL.
pub fn canonicalized_query_string(params: &Parameters) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the string to sign: `GET&%2F&` followed by the encoded canonical query.
pub fn string_to_sign(params: &Parameters) -> String {
    format!(
        "GET&%2F&{}",
        percent_encode(canonicalized_query_string(params))
    )
}

/// Compute the request signature for `params` with `secret_access_key`.
pub fn sign(secret_access_key: &str, params: &Parameters) -> String {
    let key = format!("{secret_access_key}&");
    base64_hmac_sha1(key.as_bytes(), string_to_sign(params).as_bytes())
}
