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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// AsciiSet for the query signing scheme: everything except `A-Za-z0-9-_.~` is escaped.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

// Env values used to find credentials.
pub const ALI_ACCESS_KEY_ID: &str = "ALI_ACCESS_KEY_ID";
pub const ALI_SECRET_ACCESS_KEY: &str = "ALI_SECRET_ACCESS_KEY";

// Credential files, tried in this order.
pub const USER_CONFIG_FILE: &str = "~/.aliyun.cfg";
pub const SYSTEM_CONFIG_FILE: &str = "/etc/aliyun.cfg";
pub const CONFIG_SECTION: &str = "default";
pub const CONFIG_ACCESS_KEY_ID: &str = "access_key_id";
pub const CONFIG_SECRET_ACCESS_KEY: &str = "secret_access_key";

// Protocol parameters added to every request.
pub const FORMAT: &str = "Format";
pub const VERSION: &str = "Version";
pub const ACCESS_KEY_ID: &str = "AccessKeyId";
pub const SIGNATURE_VERSION: &str = "SignatureVersion";
pub const SIGNATURE_METHOD: &str = "SignatureMethod";
pub const SIGNATURE_NONCE: &str = "SignatureNonce";
pub const TIMESTAMP: &str = "TimeStamp";
pub const REGION_ID: &str = "RegionId";
pub const SIGNATURE: &str = "Signature";

pub const FORMAT_JSON: &str = "JSON";
pub const SIGNATURE_VERSION_1_0: &str = "1.0";
pub const SIGNATURE_METHOD_HMAC_SHA1: &str = "HMAC-SHA1";

// Pagination.
pub const PAGE_SIZE: &str = "PageSize";
pub const PAGE_NUMBER: &str = "PageNumber";
pub const TOTAL_COUNT: &str = "TotalCount";

// Common request parameters.
pub const ACTION: &str = "Action";
pub const DOMAIN_NAME: &str = "DomainName";

/// Number of items requested per page by paginated calls.
pub const DEFAULT_PAGE_SIZE: u64 = 50;
