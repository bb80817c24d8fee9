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

use crate::model::{empty_as_none, empty_time_as_none, lenient, nested_list};
use alicloud_core::time::DateTime;
use serde::{Deserialize, Deserializer};

/// A collection of ECS instances kept between a minimum and maximum size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScalingGroup {
    pub scaling_group_id: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub scaling_group_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub active_scaling_configuration_id: Option<String>,
    pub region_id: String,
    #[serde(deserialize_with = "lenient")]
    pub min_size: u32,
    #[serde(deserialize_with = "lenient")]
    pub max_size: u32,
    /// Seconds between scaling activities.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub default_cooldown: Option<u32>,
    #[serde(default, deserialize_with = "removal_policies")]
    pub removal_policies: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub load_balancer_id: Option<String>,
    #[serde(rename = "DBInstanceIds", default, deserialize_with = "db_instance_ids")]
    pub db_instance_ids: Vec<String>,
    /// `Inactive`, `Active` or `Deleting`.
    pub lifecycle_state: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub total_capacity: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub active_capacity: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pending_capacity: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub removing_capacity: Option<u32>,
    #[serde(default, deserialize_with = "empty_time_as_none")]
    pub creation_time: Option<DateTime>,
}

fn removal_policies<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    nested_list(d, "RemovalPolicy")
}

fn db_instance_ids<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    nested_list(d, "DBInstanceId")
}
