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

//! Helpers shared by the typed resource models.
//!
//! The API often sends `""` where a value is absent and mixes numbers with
//! numeric strings. Model fields that may be absent are `Option<T>` and use
//! the deserializers below, so an empty string never leaks into a record.

use alicloud_core::time::{parse_api_time, DateTime};
use alicloud_core::{Error, Result};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

/// Extract the list at `resp[outer][inner]`.
///
/// A missing `inner` list is treated as empty, a missing `outer` object
/// is an unexpected response.
pub(crate) fn items<T: DeserializeOwned>(
    resp: &Value,
    outer: &str,
    inner: &str,
) -> Result<Vec<T>> {
    let container = resp
        .get(outer)
        .ok_or_else(|| Error::unexpected(format!("response has no {outer} field")))?;

    match container.get(inner) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(list) => Ok(Vec::<T>::deserialize(list)?),
    }
}

/// Deserialize a whole response into `T`.
pub(crate) fn parse<T: DeserializeOwned>(resp: Value) -> Result<T> {
    Ok(serde_json::from_value(resp)?)
}

/// Read a string field, failing when it is absent.
pub(crate) fn string_field(resp: &Value, field: &str) -> Result<String> {
    resp.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::unexpected(format!("response has no {field} field")))
}

/// Deserialize `null`, `""` or a missing field as `None`, and anything
/// else through `FromStr` on its string form.
pub(crate) fn empty_as_none<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => {
            return Err(de::Error::custom(format!(
                "expected a scalar value, got {other}"
            )))
        }
    };

    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(de::Error::custom)
}

/// Like [`empty_as_none`] for API timestamps such as `2014-05-26T09:00Z`.
pub(crate) fn empty_time_as_none<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_as_none::<D, String>(deserializer)? {
        None => Ok(None),
        Some(s) => parse_api_time(&s).map(Some).map_err(de::Error::custom),
    }
}

/// Accept a number or a numeric string.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    empty_as_none(deserializer)?.ok_or_else(|| de::Error::custom("missing required value"))
}

/// Deserialize the list wrapped as `{"<inner>": [...]}`; absent is empty.
pub(crate) fn nested_list<'de, D, T>(
    deserializer: D,
    inner: &str,
) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(mut map)) => match map.remove(inner) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(list) => serde_json::from_value(list).map_err(de::Error::custom),
        },
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(other) => Err(de::Error::custom(format!(
            "expected an object holding {inner}, got {other}"
        ))),
    }
}

/// Parse progress values such as `"100%"`.
pub(crate) fn percentage<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim_end_matches('%')
        .parse()
        .map_err(|_| de::Error::custom(format!("invalid progress: {raw}")))
}
