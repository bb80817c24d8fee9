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

//! Alibaba Cloud DNS.
//!
//! DNS is region-agnostic: every call here carries `DomainName`, so the
//! region id is dropped from the signed request.

use crate::constants::{ACTION, DOMAIN_NAME};
use crate::model::{empty_as_none, items};
use crate::{Connection, Parameters, Service};
use alicloud_core::{Context, Error, Result};
use log::Level;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainRecord {
    pub record_id: String,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    pub value: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub domain_name: Option<String>,
    #[serde(rename = "TTL", default, deserialize_with = "empty_as_none")]
    pub ttl: Option<u64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<String>,
}

/// Client for the DNS API.
#[derive(Debug, Clone)]
pub struct DnsConnection {
    conn: Connection,
}

impl DnsConnection {
    /// `region_id` is only used to sign calls that carry no domain.
    pub async fn new(ctx: Context, region_id: &str) -> Result<Self> {
        let conn = Connection::new(ctx, region_id, Service::Dns.as_str()).await?;
        Ok(Self { conn })
    }

    pub fn with_credential(
        ctx: Context,
        region_id: &str,
        access_key_id: &str,
        secret_access_key: &str,
    ) -> Result<Self> {
        let conn = Connection::with_credential(
            ctx,
            region_id,
            Service::Dns.as_str(),
            access_key_id,
            secret_access_key,
        )?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        Ok(Self {
            conn: conn.expect_service(Service::Dns)?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Add a record such as `www A 1.2.3.4` to `domain_name`.
    ///
    /// Returns the raw response, which holds the new `RecordId`.
    pub async fn add_record(
        &self,
        domain_name: &str,
        rr: &str,
        record_type: &str,
        value: &str,
    ) -> Result<Value> {
        if rr.is_empty() || value.is_empty() {
            return Err(Error::request_invalid(
                "both the resource record and its value must be supplied",
            ));
        }

        self.conn
            .get(Parameters::from([
                (ACTION, "AddDomainRecord"),
                (DOMAIN_NAME, domain_name),
                ("RR", rr),
                ("Type", record_type),
                ("Value", value),
            ]))
            .await
    }

    pub async fn get_all_records(&self, domain_name: &str) -> Result<Vec<DomainRecord>> {
        let resp = self
            .conn
            .get(Parameters::from([
                (ACTION, "DescribeDomainRecords"),
                (DOMAIN_NAME, domain_name),
            ]))
            .await?;
        items(&resp, "DomainRecords", "Record")
    }

    /// Id of the record matching both `rr` and `value`, if any.
    pub async fn get_record_id(
        &self,
        domain_name: &str,
        rr: &str,
        value: &str,
    ) -> Result<Option<String>> {
        Ok(self
            .get_all_records(domain_name)
            .await?
            .into_iter()
            .find(|r| r.rr == rr && r.value == value)
            .map(|r| r.record_id))
    }

    /// Delete the record matching `rr` and `value`.
    ///
    /// Returns `None` when no such record exists.
    pub async fn delete_record(
        &self,
        domain_name: &str,
        rr: &str,
        value: &str,
    ) -> Result<Option<Value>> {
        let Some(record_id) = self.get_record_id(domain_name, rr, value).await? else {
            self.conn
                .context()
                .log(Level::Debug, format_args!("No such record: {rr} {value}"));
            return Ok(None);
        };

        let resp = self
            .conn
            .get(Parameters::from([
                (ACTION, "DeleteDomainRecord"),
                ("RecordId", record_id.as_str()),
            ]))
            .await?;
        Ok(Some(resp))
    }
}
