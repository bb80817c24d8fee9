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

//! Server Load Balancer.

use crate::constants::ACTION;
use crate::model::{empty_as_none, items};
use crate::{Connection, Parameters, Service};
use alicloud_core::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancerStatus {
    pub load_balancer_id: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub load_balancer_name: Option<String>,
    pub load_balancer_status: String,
}

/// Client for the SLB API.
#[derive(Debug, Clone)]
pub struct SlbConnection {
    conn: Connection,
}

impl SlbConnection {
    pub async fn new(ctx: Context, region_id: &str) -> Result<Self> {
        let conn = Connection::new(ctx, region_id, Service::Slb.as_str()).await?;
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
            Service::Slb.as_str(),
            access_key_id,
            secret_access_key,
        )?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        Ok(Self {
            conn: conn.expect_service(Service::Slb)?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Status of every load balancer, or only those serving `server_id`.
    pub async fn get_all_load_balancer_status(
        &self,
        server_id: Option<&str>,
    ) -> Result<Vec<LoadBalancerStatus>> {
        let mut params = Parameters::new().with(ACTION, "DescribeLoadBalancers");
        params.insert_opt("ServerId", server_id.filter(|v| !v.is_empty()));

        let resp = self.conn.get(params).await?;
        items(&resp, "LoadBalancers", "LoadBalancer")
    }

    pub async fn get_all_load_balancer_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .get_all_load_balancer_status(None)
            .await?
            .into_iter()
            .map(|lb| lb.load_balancer_id)
            .collect())
    }

    pub async fn delete_load_balancer(&self, load_balancer_id: &str) -> Result<()> {
        self.conn
            .get(Parameters::from([
                (ACTION, "DeleteLoadBalancer"),
                ("LoadBalancerId", load_balancer_id),
            ]))
            .await?;
        Ok(())
    }
}
