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

//! Relational Database Service.

mod model;
pub use model::{DbInstance, DbInstanceStatus};

use crate::constants::ACTION;
use crate::model::items;
use crate::{Connection, Parameters, Service};
use alicloud_core::time::now;
use alicloud_core::{Context, Error, Result};
use serde_json::Value;

/// Optional filters for [`RdsConnection::describe_all_db_instances`].
#[derive(Debug, Clone, Default)]
pub struct DbInstanceFilter {
    /// `MySQL`, `SQLServer`, `PostgreSQL` or `PPAS`.
    pub engine: Option<String>,
    /// `Primary`, `Readonly`, `Guard` or `Temp`.
    pub db_instance_type: Option<String>,
    /// `VPC` or `Classic`.
    pub instance_network_type: Option<String>,
    /// `Performance` or `Safty`.
    pub connection_mode: Option<String>,
}

/// Client for the RDS API.
#[derive(Debug, Clone)]
pub struct RdsConnection {
    conn: Connection,
}

impl RdsConnection {
    pub async fn new(ctx: Context, region_id: &str) -> Result<Self> {
        let conn = Connection::new(ctx, region_id, Service::Rds.as_str()).await?;
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
            Service::Rds.as_str(),
            access_key_id,
            secret_access_key,
        )?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        Ok(Self {
            conn: conn.expect_service(Service::Rds)?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub async fn describe_all_db_instances(
        &self,
        filter: &DbInstanceFilter,
    ) -> Result<Vec<DbInstanceStatus>> {
        let mut params = Parameters::new().with(ACTION, "DescribeDBInstances");
        params.insert_opt("Engine", filter.engine.as_deref());
        params.insert_opt("DBInstanceType", filter.db_instance_type.as_deref());
        params.insert_opt(
            "InstanceNetworkType",
            filter.instance_network_type.as_deref(),
        );
        params.insert_opt("ConnectionMode", filter.connection_mode.as_deref());

        let resp = self.conn.get(params).await?;
        items(&resp, "Items", "DBInstance")
    }

    pub async fn get_all_db_instance_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .describe_all_db_instances(&DbInstanceFilter::default())
            .await?
            .into_iter()
            .map(|s| s.db_instance_id)
            .collect())
    }

    pub async fn get_db_instance(&self, db_instance_id: &str) -> Result<DbInstance> {
        let resp = self
            .conn
            .get(Parameters::from([
                (ACTION, "DescribeDBInstanceAttribute"),
                ("DBInstanceId", db_instance_id),
            ]))
            .await?;

        let attribute = resp
            .get("Items")
            .and_then(|v| v.get("DBInstanceAttribute"))
            .and_then(Value::as_array)
            .and_then(|v| v.first())
            .cloned()
            .ok_or_else(|| {
                Error::unexpected(format!("Could not find the db instance: {db_instance_id}"))
            })?;
        Ok(serde_json::from_value(attribute)?)
    }

    /// Ids of prepaid instances expiring within `days` days.
    pub async fn report_expiring_db_instances(&self, days: i64) -> Result<Vec<String>> {
        let mut expiring = Vec::new();
        for id in self.get_all_db_instance_ids().await? {
            let instance = self.get_db_instance(&id).await?;
            if instance.pay_type.as_deref() != Some("Prepaid") {
                continue;
            }
            if let Some(expire_time) = instance.expire_time {
                if (expire_time - now()).num_days() <= days {
                    expiring.push(id);
                }
            }
        }
        Ok(expiring)
    }
}
