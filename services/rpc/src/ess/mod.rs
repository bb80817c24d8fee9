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

//! Auto Scaling.

mod model;
pub use model::ScalingGroup;

use crate::constants::ACTION;
use crate::model::items;
use crate::{Connection, Parameters, Service};
use alicloud_core::{Context, Result};

/// Client for the ESS API.
#[derive(Debug, Clone)]
pub struct EssConnection {
    conn: Connection,
}

impl EssConnection {
    pub async fn new(ctx: Context, region_id: &str) -> Result<Self> {
        let conn = Connection::new(ctx, region_id, Service::Ess.as_str()).await?;
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
            Service::Ess.as_str(),
            access_key_id,
            secret_access_key,
        )?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        Ok(Self {
            conn: conn.expect_service(Service::Ess)?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Describe scaling groups, optionally restricted to some ids or names.
    pub async fn describe_scaling_groups(
        &self,
        scaling_group_ids: &[&str],
        scaling_group_names: &[&str],
    ) -> Result<Vec<ScalingGroup>> {
        let mut params = Parameters::new().with(ACTION, "DescribeScalingGroups");
        params.push_list("ScalingGroupId", scaling_group_ids);
        params.push_list("ScalingGroupName", scaling_group_names);

        let mut groups = Vec::new();
        for page in self.conn.get_all_pages(params).await? {
            groups.extend(items::<ScalingGroup>(&page, "ScalingGroups", "ScalingGroup")?);
        }
        Ok(groups)
    }

    pub async fn get_all_scaling_group_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .describe_scaling_groups(&[], &[])
            .await?
            .into_iter()
            .map(|g| g.scaling_group_id)
            .collect())
    }
}
