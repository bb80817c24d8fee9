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

use crate::constants::ACTION;
use crate::model::{empty_as_none, empty_time_as_none, nested_list, percentage};
use crate::Parameters;
use alicloud_core::time::DateTime;
use alicloud_core::utils::Redact;
use alicloud_core::Error;
use serde::{Deserialize, Deserializer};
use std::fmt::{Debug, Formatter};

/// Subscription lengths in months accepted for prepaid instances.
const PREPAID_PERIODS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 12, 24, 36];

/// An instance carries at most this many data disks at creation.
pub const MAX_DATA_DISKS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    pub region_id: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub local_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Zone {
    pub zone_id: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub local_name: Option<String>,
    /// Resource types that can be created in this zone.
    #[serde(
        rename = "AvailableResourceCreation",
        default,
        deserialize_with = "resource_types"
    )]
    pub available_resource_creation: Vec<String>,
    #[serde(
        rename = "AvailableDiskCategories",
        default,
        deserialize_with = "disk_categories"
    )]
    pub available_disk_categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceStatus {
    pub instance_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperationLock {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub lock_reason: Option<String>,
}

/// Attributes of an ECS instance as returned by `DescribeInstanceAttribute`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    pub instance_id: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub instance_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_id: Option<String>,
    pub region_id: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub zone_id: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub instance_type: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub host_name: Option<String>,
    pub status: String,
    #[serde(default, deserialize_with = "security_group_ids")]
    pub security_group_ids: Vec<String>,
    #[serde(rename = "PublicIpAddress", default, deserialize_with = "ip_addresses")]
    pub public_ip_addresses: Vec<String>,
    #[serde(rename = "InnerIpAddress", default, deserialize_with = "ip_addresses")]
    pub inner_ip_addresses: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub internet_charge_type: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub internet_max_bandwidth_in: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub internet_max_bandwidth_out: Option<i64>,
    #[serde(default, deserialize_with = "empty_time_as_none")]
    pub creation_time: Option<DateTime>,
    #[serde(default, deserialize_with = "empty_time_as_none")]
    pub expired_time: Option<DateTime>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub instance_charge_type: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub cluster_id: Option<String>,
    #[serde(default, deserialize_with = "lock_reasons")]
    pub operation_locks: Vec<OperationLock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Snapshot {
    pub snapshot_id: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub snapshot_name: Option<String>,
    /// Completion in percent, `100` once the snapshot is usable.
    #[serde(deserialize_with = "percentage")]
    pub progress: u8,
    #[serde(default, deserialize_with = "empty_time_as_none")]
    pub creation_time: Option<DateTime>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub source_disk_id: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub source_disk_type: Option<String>,
    /// Size of the source disk in GiB.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub source_disk_size: Option<u64>,
}

/// A disk attached to an instance, as returned by `DescribeDisks`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Disk {
    pub disk_id: String,
    /// `system` or `data`.
    #[serde(rename = "Type")]
    pub disk_type: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,
    /// Size in GiB.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub size: Option<u64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub device: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub instance_id: Option<String>,
    #[serde(default, deserialize_with = "empty_time_as_none")]
    pub attached_time: Option<DateTime>,
    #[serde(default, deserialize_with = "empty_time_as_none")]
    pub creation_time: Option<DateTime>,
}

/// Billing mode of a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceChargeType {
    /// Paid up front for `period` months.
    PrePaid { period: u32 },
    PostPaid,
}

impl Default for InstanceChargeType {
    fn default() -> Self {
        InstanceChargeType::PrePaid { period: 1 }
    }
}

/// An additional data disk created together with an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataDisk {
    /// `cloud`, `ephemeral` or `ephemeral_hio`.
    pub category: String,
    /// Size in GiB. Required unless the disk is created from a snapshot.
    pub size: Option<u32>,
    pub snapshot_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub device: Option<String>,
}

impl DataDisk {
    pub fn new(category: impl Into<String>, size: u32) -> Self {
        Self {
            category: category.into(),
            size: Some(size),
            ..Default::default()
        }
    }

    /// A disk restored from `snapshot_id`, sized after the snapshot.
    pub fn from_snapshot(category: impl Into<String>, snapshot_id: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            snapshot_id: Some(snapshot_id.into()),
            ..Default::default()
        }
    }

    fn append_to(&self, params: &mut Parameters, index: usize) -> alicloud_core::Result<()> {
        if self.category.is_empty() {
            return Err(Error::request_invalid(format!(
                "data disk {index} has no category"
            )));
        }
        if self.size.is_none() && self.snapshot_id.is_none() {
            return Err(Error::request_invalid(format!(
                "data disk {index} needs a size or a snapshot id"
            )));
        }

        let prefix = format!("DataDisk.{index}");
        params.insert(format!("{prefix}.Category"), &self.category);
        params.insert_opt(format!("{prefix}.Size"), self.size);
        params.insert_opt(format!("{prefix}.SnapshotId"), self.snapshot_id.as_deref());
        params.insert_opt(format!("{prefix}.DiskName"), self.name.as_deref());
        params.insert_opt(format!("{prefix}.Description"), self.description.as_deref());
        params.insert_opt(format!("{prefix}.Device"), self.device.as_deref());
        Ok(())
    }
}

/// Arguments of `CreateInstance`.
///
/// Only `image_id`, `instance_type` and `security_group_id` are required,
/// unset options are left to the API defaults.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CreateInstanceRequest {
    pub image_id: String,
    pub instance_type: String,
    pub security_group_id: String,
    pub instance_name: Option<String>,
    pub internet_max_bandwidth_in: Option<u32>,
    pub internet_max_bandwidth_out: Option<u32>,
    pub host_name: Option<String>,
    pub password: Option<String>,
    /// `cloud`, `ephemeral` or `ephemeral_hio`.
    pub system_disk_category: Option<String>,
    /// `PayByBandwidth` or `PayByTraffic`.
    pub internet_charge_type: Option<String>,
    pub instance_charge_type: InstanceChargeType,
    pub data_disks: Vec<DataDisk>,
    pub description: Option<String>,
    pub zone_id: Option<String>,
}

impl Debug for CreateInstanceRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateInstanceRequest")
            .field("image_id", &self.image_id)
            .field("instance_type", &self.instance_type)
            .field("security_group_id", &self.security_group_id)
            .field("instance_name", &self.instance_name)
            .field("host_name", &self.host_name)
            .field("password", &self.password.as_ref().map(Redact::from))
            .field("instance_charge_type", &self.instance_charge_type)
            .field("data_disks", &self.data_disks)
            .field("zone_id", &self.zone_id)
            .finish_non_exhaustive()
    }
}

impl CreateInstanceRequest {
    pub fn new(
        image_id: impl Into<String>,
        instance_type: impl Into<String>,
        security_group_id: impl Into<String>,
    ) -> Self {
        Self {
            image_id: image_id.into(),
            instance_type: instance_type.into(),
            security_group_id: security_group_id.into(),
            ..Default::default()
        }
    }

    pub(crate) fn to_parameters(&self) -> alicloud_core::Result<Parameters> {
        if self.data_disks.len() > MAX_DATA_DISKS {
            return Err(Error::request_invalid(format!(
                "an instance can have at most {MAX_DATA_DISKS} data disks, got {}",
                self.data_disks.len()
            )));
        }

        let mut params = Parameters::new()
            .with(ACTION, "CreateInstance")
            .with("ImageId", &self.image_id)
            .with("InstanceType", &self.instance_type)
            .with("SecurityGroupId", &self.security_group_id);
        params.insert_opt("InstanceName", non_empty(&self.instance_name));
        params.insert_opt("InternetMaxBandwidthIn", self.internet_max_bandwidth_in);
        params.insert_opt("InternetMaxBandwidthOut", self.internet_max_bandwidth_out);
        params.insert_opt("HostName", non_empty(&self.host_name));
        params.insert_opt("Password", non_empty(&self.password));
        params.insert_opt("SystemDisk.Category", non_empty(&self.system_disk_category));
        params.insert_opt("InternetChargeType", non_empty(&self.internet_charge_type));
        params.insert_opt("Description", non_empty(&self.description));
        params.insert_opt("ZoneId", non_empty(&self.zone_id));

        match self.instance_charge_type {
            InstanceChargeType::PostPaid => {
                params.insert("InstanceChargeType", "PostPaid");
            }
            InstanceChargeType::PrePaid { period } => {
                if !PREPAID_PERIODS.contains(&period) {
                    return Err(Error::request_invalid(format!(
                        "prepaid period must be 1-9, 12, 24 or 36 months, got {period}"
                    )));
                }
                params.insert("InstanceChargeType", "PrePaid");
                params.insert("Period", period);
            }
        }

        for (i, disk) in self.data_disks.iter().enumerate() {
            disk.append_to(&mut params, i + 1)?;
        }
        Ok(params)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn resource_types<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    nested_list(d, "ResourceTypes")
}

fn disk_categories<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    nested_list(d, "DiskCategories")
}

fn security_group_ids<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    nested_list(d, "SecurityGroupId")
}

fn ip_addresses<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    nested_list(d, "IpAddress")
}

fn lock_reasons<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<OperationLock>, D::Error> {
    nested_list(d, "LockReason")
}
