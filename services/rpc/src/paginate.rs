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

use crate::constants::{DEFAULT_PAGE_SIZE, TOTAL_COUNT};
use alicloud_core::{Error, Result};
use serde_json::Value;

/// Pages still to fetch once the first page is in hand.
///
/// `ceil((total - page_size) / page_size)` when `total > page_size`, else `0`.
pub fn remaining_pages(total_count: u64, page_size: u64) -> u64 {
    if total_count <= page_size {
        return 0;
    }
    (total_count - page_size).div_ceil(page_size)
}

/// Read `TotalCount` from the first page of a paginated response.
pub(crate) fn total_count(page: &Value) -> Result<u64> {
    let value = page.get(TOTAL_COUNT).ok_or_else(|| {
        Error::unexpected(format!("paginated response has no {TOTAL_COUNT} field"))
    })?;

    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
    .ok_or_else(|| Error::unexpected(format!("invalid {TOTAL_COUNT}: {value}")))
}

/// Total number of pages fetched for `total_count` items.
pub fn page_count(total_count: u64) -> u64 {
    1 + remaining_pages(total_count, DEFAULT_PAGE_SIZE)
}
