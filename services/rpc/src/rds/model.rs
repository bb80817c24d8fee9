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

use crate::model::{empty_as_none, empty_time_as_none};
use alicloud_core::time::DateTime;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DbInstanceStatus {
    #[serde(rename = "DBInstanceId")]
    pub db_instance_id: String,
    #[serde(rename = "DBInstanceStatus")]
    pub db_instance_status: String,
}

/// Attributes of an RDS instance as returned by `DescribeDBInstanceAttribute`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbInstance {
    #[serde(rename = "DBInstanceId")]
    pub db_instance_id: String,
    pub region_id: String,
    #[serde(rename = "DBInstanceClass", default, deserialize_with = "empty_as_none")]
    pub db_instance_class: Option<String>,
    #[serde(rename = "DBInstanceDescription", default, deserialize_with = "empty_as_none")]
    pub db_instance_description: Option<String>,
    #[serde(rename = "DBInstanceStatus")]
    pub db_instance_status: String,
    #[serde(rename = "DBInstanceType", default, deserialize_with = "empty_as_none")]
    pub db_instance_type: Option<String>,
    #[serde(rename = "DBInstanceNetType", default, deserialize_with = "empty_as_none")]
    pub db_instance_net_type: Option<String>,
    /// Memory in MB.
    #[serde(rename = "DBInstanceMemory", default, deserialize_with = "empty_as_none")]
    pub db_instance_memory: Option<u64>,
    /// Storage in GB.
    #[serde(rename = "DBInstanceStorage", default, deserialize_with = "empty_as_none")]
    pub db_instance_storage: Option<u64>,
    #[serde(rename = "SecurityIPList", default, deserialize_with = "empty_as_none")]
    pub security_ip_list: Option<String>,
    #[serde(default, deserialize_with = "empty_time_as_none")]
    pub creation_time: Option<DateTime>,
    #[serde(default, deserialize_with = "empty_time_as_none")]
    pub expire_time: Option<DateTime>,
    /// `Prepaid` or `Postpaid`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pay_type: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub connection_string: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub port: Option<u16>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub engine: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub engine_version: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_connections: Option<u64>,
    #[serde(rename = "MaxIOPS", default, deserialize_with = "empty_as_none")]
    pub max_iops: Option<u64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub availability_value: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub account_max_quantity: Option<u64>,
    #[serde(rename = "DBMaxQuantity", default, deserialize_with = "empty_as_none")]
    pub db_max_quantity: Option<u64>,
}
