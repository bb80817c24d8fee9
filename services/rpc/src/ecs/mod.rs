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

//! Elastic Compute Service.

mod model;
pub use model::{
    CreateInstanceRequest, DataDisk, Disk, Instance, InstanceChargeType, InstanceStatus,
    OperationLock, Region, Snapshot, Zone, MAX_DATA_DISKS,
};

use crate::constants::ACTION;
use crate::model::{items, parse, string_field};
use crate::{Connection, Parameters, Service, Waiter};
use alicloud_core::{Context, Error, Result};
use log::Level;
use std::time::Duration;

/// An instance belongs to at most five security groups, the initial one
/// included.
pub const MAX_ADDITIONAL_SECURITY_GROUPS: usize = 4;

/// Pause between creating an instance and changing it, the API rejects
/// follow-up calls on an instance that is still being registered.
const SETTLE_DELAY: Duration = Duration::from_secs(10);

/// Client for the ECS API.
#[derive(Debug, Clone)]
pub struct EcsConnection {
    conn: Connection,
}

impl EcsConnection {
    /// Connect to ECS in `region_id` with credentials from the default chain.
    pub async fn new(ctx: Context, region_id: &str) -> Result<Self> {
        let conn = Connection::new(ctx, region_id, Service::Ecs.as_str()).await?;
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
            Service::Ecs.as_str(),
            access_key_id,
            secret_access_key,
        )?;
        Ok(Self { conn })
    }

    /// Wrap an existing ECS connection.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        Ok(Self {
            conn: conn.expect_service(Service::Ecs)?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub async fn get_all_regions(&self) -> Result<Vec<Region>> {
        let resp = self
            .conn
            .get(Parameters::from([(ACTION, "DescribeRegions")]))
            .await?;
        items(&resp, "Regions", "Region")
    }

    pub async fn get_all_region_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .get_all_regions()
            .await?
            .into_iter()
            .map(|r| r.region_id)
            .collect())
    }

    pub async fn get_all_zones(&self) -> Result<Vec<Zone>> {
        let resp = self
            .conn
            .get(Parameters::from([(ACTION, "DescribeZones")]))
            .await?;
        items(&resp, "Zones", "Zone")
    }

    pub async fn get_all_zone_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .get_all_zones()
            .await?
            .into_iter()
            .map(|z| z.zone_id)
            .collect())
    }

    /// Status of every instance in the region, or in `zone_id` only.
    pub async fn get_all_instance_status(
        &self,
        zone_id: Option<&str>,
    ) -> Result<Vec<InstanceStatus>> {
        let mut params = Parameters::new().with(ACTION, "DescribeInstanceStatus");
        params.insert_opt("ZoneId", zone_id);

        let mut statuses = Vec::new();
        for page in self.conn.get_all_pages(params).await? {
            statuses.extend(items::<InstanceStatus>(
                &page,
                "InstanceStatuses",
                "InstanceStatus",
            )?);
        }
        Ok(statuses)
    }

    pub async fn get_all_instance_ids(&self, zone_id: Option<&str>) -> Result<Vec<String>> {
        Ok(self
            .get_all_instance_status(zone_id)
            .await?
            .into_iter()
            .map(|s| s.instance_id)
            .collect())
    }

    pub async fn get_instance(&self, instance_id: &str) -> Result<Instance> {
        let resp = self
            .conn
            .get(Parameters::from([
                (ACTION, "DescribeInstanceAttribute"),
                ("InstanceId", instance_id),
            ]))
            .await?;
        parse(resp)
    }

    pub async fn start_instance(&self, instance_id: &str) -> Result<()> {
        self.conn
            .get(Parameters::from([
                (ACTION, "StartInstance"),
                ("InstanceId", instance_id),
            ]))
            .await?;
        Ok(())
    }

    pub async fn stop_instance(&self, instance_id: &str, force: bool) -> Result<()> {
        self.conn
            .get(
                Parameters::new()
                    .with(ACTION, "StopInstance")
                    .with("InstanceId", instance_id)
                    .with("ForceStop", force),
            )
            .await?;
        Ok(())
    }

    pub async fn reboot_instance(&self, instance_id: &str, force: bool) -> Result<()> {
        self.conn
            .get(
                Parameters::new()
                    .with(ACTION, "RebootInstance")
                    .with("InstanceId", instance_id)
                    .with("ForceStop", force),
            )
            .await?;
        Ok(())
    }

    pub async fn delete_instance(&self, instance_id: &str) -> Result<()> {
        self.conn
            .get(Parameters::from([
                (ACTION, "DeleteInstance"),
                ("InstanceId", instance_id),
            ]))
            .await?;
        Ok(())
    }

    /// Poll until the instance reports `status`, e.g. `Running`.
    pub async fn wait_for_instance_status(
        &self,
        instance_id: &str,
        status: &str,
        waiter: &Waiter,
    ) -> Result<()> {
        let this = self;
        waiter
            .wait_until(self.conn.context(), instance_id, move || async move {
                let instance = this.get_instance(instance_id).await?;
                Ok::<_, Error>(instance.status == status)
            })
            .await
    }

    /// Describe snapshots, filtered by instance, source disk or ids.
    pub async fn describe_snapshots(
        &self,
        instance_id: Option<&str>,
        disk_id: Option<&str>,
        snapshot_ids: &[&str],
    ) -> Result<Vec<Snapshot>> {
        let mut params = Parameters::new().with(ACTION, "DescribeSnapshots");
        params.insert_opt("InstanceId", instance_id);
        params.insert_opt("DiskId", disk_id);
        if !snapshot_ids.is_empty() {
            params.insert("SnapshotIds", serde_json::to_string(snapshot_ids)?);
        }

        let mut snapshots = Vec::new();
        for page in self.conn.get_all_pages(params).await? {
            snapshots.extend(items::<Snapshot>(&page, "Snapshots", "Snapshot")?);
        }
        Ok(snapshots)
    }

    pub async fn describe_snapshot(&self, snapshot_id: &str) -> Result<Snapshot> {
        self.describe_snapshots(None, None, &[snapshot_id])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                Error::unexpected(format!("Could not find the snapshot: {snapshot_id}"))
            })
    }

    /// Create a snapshot of `disk_id` and return its id.
    ///
    /// With a `waiter`, block until the snapshot progress reaches 100%.
    pub async fn create_snapshot(
        &self,
        instance_id: &str,
        disk_id: &str,
        snapshot_name: Option<&str>,
        description: Option<&str>,
        waiter: Option<&Waiter>,
    ) -> Result<String> {
        let mut params = Parameters::new()
            .with(ACTION, "CreateSnapshot")
            .with("InstanceId", instance_id)
            .with("DiskId", disk_id);
        params.insert_opt("SnapshotName", snapshot_name.filter(|v| !v.is_empty()));
        params.insert_opt("Description", description.filter(|v| !v.is_empty()));

        let snapshot_id = string_field(&self.conn.get(params).await?, "SnapshotId")?;

        if let Some(waiter) = waiter {
            self.conn.context().log(
                Level::Debug,
                format_args!("waiting for snapshot {snapshot_id}"),
            );
            let this = self;
            let id = snapshot_id.as_str();
            waiter
                .wait_until(self.conn.context(), id, move || async move {
                    let snapshot = this.describe_snapshot(id).await?;
                    Ok::<_, Error>(snapshot.progress == 100)
                })
                .await?;
        }

        Ok(snapshot_id)
    }

    /// Create an instance and return its id. The instance is left stopped.
    pub async fn create_instance(&self, req: &CreateInstanceRequest) -> Result<String> {
        let resp = self.conn.get(req.to_parameters()?).await?;
        string_field(&resp, "InstanceId")
    }

    /// Allocate a public IP address to the instance and return it.
    pub async fn allocate_public_ip(&self, instance_id: &str) -> Result<String> {
        let resp = self
            .conn
            .get(Parameters::from([
                (ACTION, "AllocatePublicIpAddress"),
                ("InstanceId", instance_id),
            ]))
            .await?;
        string_field(&resp, "IpAddress")
    }

    pub async fn join_security_group(
        &self,
        instance_id: &str,
        security_group_id: &str,
    ) -> Result<()> {
        self.conn
            .get(Parameters::from([
                (ACTION, "JoinSecurityGroup"),
                ("InstanceId", instance_id),
                ("SecurityGroupId", security_group_id),
            ]))
            .await?;
        Ok(())
    }

    /// Create an instance, then join `additional_security_group_ids`,
    /// optionally allocate a public IP, and start it.
    ///
    /// With a `waiter`, block until the instance is `Running`. Returns the
    /// instance id. Fails with
    /// [`ErrorKind::RequestInvalid`](alicloud_core::ErrorKind::RequestInvalid)
    /// before any call when more than [`MAX_ADDITIONAL_SECURITY_GROUPS`]
    /// extra groups are given.
    pub async fn create_and_start_instance(
        &self,
        req: &CreateInstanceRequest,
        additional_security_group_ids: &[&str],
        assign_public_ip: bool,
        waiter: Option<&Waiter>,
    ) -> Result<String> {
        if additional_security_group_ids.len() > MAX_ADDITIONAL_SECURITY_GROUPS {
            return Err(Error::request_invalid(format!(
                "at most {MAX_ADDITIONAL_SECURITY_GROUPS} additional security groups allowed, got {}",
                additional_security_group_ids.len()
            )));
        }
        let ctx = self.conn.context();

        ctx.log(Level::Debug, format_args!("creating instance"));
        let instance_id = self.create_instance(req).await?;

        if !additional_security_group_ids.is_empty() {
            ctx.log(
                Level::Debug,
                format_args!("adding {instance_id} to additional security groups"),
            );
            tokio::time::sleep(SETTLE_DELAY).await;
            for group_id in additional_security_group_ids {
                self.join_security_group(&instance_id, group_id).await?;
            }
        }

        if assign_public_ip {
            self.allocate_public_ip(&instance_id).await?;
        }

        ctx.log(Level::Debug, format_args!("starting instance {instance_id}"));
        tokio::time::sleep(SETTLE_DELAY).await;
        self.start_instance(&instance_id).await?;

        if let Some(waiter) = waiter {
            self.wait_for_instance_status(&instance_id, "Running", waiter)
                .await?;
        }

        Ok(instance_id)
    }

    /// Disks attached to `instance_id`.
    pub async fn describe_instance_disks(&self, instance_id: &str) -> Result<Vec<Disk>> {
        let params = Parameters::from([(ACTION, "DescribeDisks"), ("InstanceId", instance_id)]);

        let mut disks = Vec::new();
        for page in self.conn.get_all_pages(params).await? {
            disks.extend(items::<Disk>(&page, "Disks", "Disk")?);
        }
        Ok(disks)
    }

    /// Create an image from a snapshot and return the image id.
    pub async fn create_image(
        &self,
        snapshot_id: &str,
        image_version: Option<&str>,
        description: Option<&str>,
        os_name: Option<&str>,
    ) -> Result<String> {
        let mut params = Parameters::new()
            .with(ACTION, "CreateImage")
            .with("SnapshotId", snapshot_id);
        params.insert_opt("ImageVersion", image_version.filter(|v| !v.is_empty()));
        params.insert_opt("Description", description.filter(|v| !v.is_empty()));
        params.insert_opt("OSName", os_name.filter(|v| !v.is_empty()));

        let resp = self.conn.get(params).await?;
        string_field(&resp, "ImageId")
    }

    /// Snapshot the system disk of `instance_id` and build an image from it.
    ///
    /// Waits with `waiter` for the snapshot to complete and returns the
    /// `(snapshot_id, image_id)` pair.
    pub async fn create_image_from_instance(
        &self,
        instance_id: &str,
        image_version: Option<&str>,
        description: Option<&str>,
        os_name: Option<&str>,
        waiter: &Waiter,
    ) -> Result<(String, String)> {
        let ctx = self.conn.context();

        ctx.log(
            Level::Debug,
            format_args!("looking up system disk of {instance_id}"),
        );
        let system_disk = self
            .describe_instance_disks(instance_id)
            .await?
            .into_iter()
            .find(|d| d.disk_type == "system")
            .ok_or_else(|| {
                Error::unexpected(format!("System disk for {instance_id} not found"))
            })?;

        ctx.log(
            Level::Debug,
            format_args!("creating snapshot of system disk {}", system_disk.disk_id),
        );
        let snapshot_id = self
            .create_snapshot(instance_id, &system_disk.disk_id, None, None, Some(waiter))
            .await?;

        ctx.log(
            Level::Debug,
            format_args!("creating image from snapshot {snapshot_id}"),
        );
        let image_id = self
            .create_image(&snapshot_id, image_version, description, os_name)
            .await?;

        Ok((snapshot_id, image_id))
    }
}
