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

use crate::mock::{context, json_response, MockHttpSend};
use alicloud_core::time::{format_iso8601, now};
use alicloud_core::ErrorKind;
use alicloud_rpc::dns::DnsConnection;
use alicloud_rpc::ecs::{CreateInstanceRequest, EcsConnection};
use alicloud_rpc::ess::EssConnection;
use alicloud_rpc::rds::RdsConnection;
use alicloud_rpc::slb::SlbConnection;
use alicloud_rpc::Waiter;
use chrono::Duration as TimeDelta;
use http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn ok(body: serde_json::Value) -> http::Response<bytes::Bytes> {
    json_response(StatusCode::OK, &body.to_string())
}

#[tokio::test(start_paused = true)]
async fn test_wait_for_instance_status() {
    let polls = Arc::new(AtomicUsize::new(0));
    let counter = polls.clone();
    let http = MockHttpSend::new(move |params| {
        assert_eq!(params.get("Action"), Some("DescribeInstanceAttribute"));
        let status = if counter.fetch_add(1, Ordering::SeqCst) < 2 {
            "Starting"
        } else {
            "Running"
        };
        ok(json!({"InstanceId": "i-1", "RegionId": "cn-hangzhou", "Status": status}))
    });
    let ecs = EcsConnection::with_credential(context(http), "cn-hangzhou", "ak", "sk").unwrap();

    ecs.wait_for_instance_status("i-1", "Running", &Waiter::default())
        .await
        .unwrap();
    assert_eq!(polls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_wait_for_instance_status_times_out() {
    let http = MockHttpSend::json(json!({
        "InstanceId": "i-1",
        "RegionId": "cn-hangzhou",
        "Status": "Stopped"
    }));
    let ecs =
        EcsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();
    let waiter = Waiter::new(Duration::from_secs(10), Duration::from_secs(60));

    let err = ecs
        .wait_for_instance_status("i-1", "Running", &waiter)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert_eq!(err.resource_id(), Some("i-1"));
    assert_eq!(err.elapsed(), Some(Duration::from_secs(70)));
    assert_eq!(http.urls().len(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_create_snapshot_waits_for_progress() {
    let polls = Arc::new(AtomicUsize::new(0));
    let counter = polls.clone();
    let http = MockHttpSend::new(move |params| match params.get("Action") {
        Some("CreateSnapshot") => ok(json!({"SnapshotId": "s-1"})),
        Some("DescribeSnapshots") => {
            assert_eq!(params.get("SnapshotIds"), Some("[\"s-1\"]"));
            let progress = match counter.fetch_add(1, Ordering::SeqCst) {
                0 => "30%",
                1 => "80%",
                _ => "100%",
            };
            ok(json!({
                "TotalCount": 1,
                "Snapshots": {"Snapshot": [{
                    "SnapshotId": "s-1",
                    "Progress": progress,
                    "CreationTime": "2014-06-03T12:00:00Z"
                }]}
            }))
        }
        other => panic!("unexpected action {other:?}"),
    });
    let ecs =
        EcsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();

    let id = ecs
        .create_snapshot("i-1", "d-1", Some("nightly"), None, Some(&Waiter::default()))
        .await
        .unwrap();

    assert_eq!(id, "s-1");
    assert_eq!(polls.load(Ordering::SeqCst), 3);
    let create = &http.requests()[0];
    assert_eq!(create.get("SnapshotName"), Some("nightly"));
    assert!(!create.contains_key("Description"));
}

#[tokio::test]
async fn test_create_snapshot_without_waiter() {
    let http = MockHttpSend::json(json!({"SnapshotId": "s-2"}));
    let ecs =
        EcsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();

    let id = ecs
        .create_snapshot("i-1", "d-1", None, None, None)
        .await
        .unwrap();
    assert_eq!(id, "s-2");
    assert_eq!(http.urls().len(), 1);
}

#[tokio::test]
async fn test_describe_missing_snapshot() {
    let http = MockHttpSend::json(json!({"TotalCount": 0, "Snapshots": {"Snapshot": []}}));
    let ecs = EcsConnection::with_credential(context(http), "cn-hangzhou", "ak", "sk").unwrap();

    let err = ecs.describe_snapshot("s-404").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}

#[tokio::test]
async fn test_stop_instance_force_flag() {
    let http = MockHttpSend::json(json!({"RequestId": "r"}));
    let ecs =
        EcsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();

    ecs.stop_instance("i-1", true).await.unwrap();
    ecs.reboot_instance("i-1", false).await.unwrap();

    let requests = http.requests();
    assert_eq!(requests[0].get("Action"), Some("StopInstance"));
    assert_eq!(requests[0].get("ForceStop"), Some("true"));
    assert_eq!(requests[1].get("Action"), Some("RebootInstance"));
    assert_eq!(requests[1].get("ForceStop"), Some("false"));
}

fn actions(http: &MockHttpSend) -> Vec<String> {
    http.requests()
        .iter()
        .map(|p| p.get("Action").unwrap_or_default().to_string())
        .collect()
}

fn instance_lifecycle(running_after: usize) -> MockHttpSend {
    let polls = Arc::new(AtomicUsize::new(0));
    MockHttpSend::new(move |params| match params.get("Action") {
        Some("CreateInstance") => ok(json!({"InstanceId": "i-new"})),
        Some("JoinSecurityGroup") | Some("StartInstance") => ok(json!({"RequestId": "r"})),
        Some("AllocatePublicIpAddress") => ok(json!({"IpAddress": "42.1.1.1"})),
        Some("DescribeInstanceAttribute") => {
            let status = if polls.fetch_add(1, Ordering::SeqCst) + 1 >= running_after {
                "Running"
            } else {
                "Starting"
            };
            ok(json!({"InstanceId": "i-new", "RegionId": "cn-hangzhou", "Status": status}))
        }
        other => panic!("unexpected action {other:?}"),
    })
}

#[tokio::test(start_paused = true)]
async fn test_create_and_start_instance() {
    let http = instance_lifecycle(2);
    let ecs =
        EcsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();
    let req = CreateInstanceRequest::new("img-1", "ecs.t1.small", "sg-1");

    let id = ecs
        .create_and_start_instance(&req, &["sg-2", "sg-3"], true, Some(&Waiter::default()))
        .await
        .unwrap();

    assert_eq!(id, "i-new");
    assert_eq!(
        actions(&http),
        vec![
            "CreateInstance",
            "JoinSecurityGroup",
            "JoinSecurityGroup",
            "AllocatePublicIpAddress",
            "StartInstance",
            "DescribeInstanceAttribute",
            "DescribeInstanceAttribute",
        ]
    );
    let requests = http.requests();
    assert_eq!(requests[0].get("SecurityGroupId"), Some("sg-1"));
    assert_eq!(requests[1].get("SecurityGroupId"), Some("sg-2"));
    assert_eq!(requests[2].get("SecurityGroupId"), Some("sg-3"));
    assert_eq!(requests[4].get("InstanceId"), Some("i-new"));
}

#[tokio::test(start_paused = true)]
async fn test_create_and_start_instance_without_extras() {
    let http = instance_lifecycle(1);
    let ecs =
        EcsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();
    let req = CreateInstanceRequest::new("img-1", "ecs.t1.small", "sg-1");

    ecs.create_and_start_instance(&req, &[], false, None)
        .await
        .unwrap();

    assert_eq!(actions(&http), vec!["CreateInstance", "StartInstance"]);
}

#[tokio::test(start_paused = true)]
async fn test_create_and_start_instance_times_out() {
    let http = instance_lifecycle(usize::MAX);
    let ecs =
        EcsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();
    let req = CreateInstanceRequest::new("img-1", "ecs.t1.small", "sg-1");
    let waiter = Waiter::new(Duration::from_secs(30), Duration::from_secs(60));

    let err = ecs
        .create_and_start_instance(&req, &[], true, Some(&waiter))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert_eq!(err.resource_id(), Some("i-new"));
    assert_eq!(
        actions(&http)
            .iter()
            .filter(|a| *a == "DescribeInstanceAttribute")
            .count(),
        3
    );
}

#[tokio::test]
async fn test_create_and_start_instance_rejects_too_many_groups() {
    let http = MockHttpSend::json(json!({}));
    let ecs =
        EcsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();
    let req = CreateInstanceRequest::new("img-1", "ecs.t1.small", "sg-1");

    let err = ecs
        .create_and_start_instance(&req, &["sg-2", "sg-3", "sg-4", "sg-5", "sg-6"], true, None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.urls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_create_image_from_instance() {
    let http = MockHttpSend::new(|params| match params.get("Action") {
        Some("DescribeDisks") => {
            assert_eq!(params.get("InstanceId"), Some("i-1"));
            ok(json!({
                "TotalCount": 2,
                "Disks": {"Disk": [
                    {"DiskId": "d-data", "Type": "data", "Category": "cloud", "Size": 100},
                    {"DiskId": "d-sys", "Type": "system", "Category": "cloud", "Size": 40}
                ]}
            }))
        }
        Some("CreateSnapshot") => {
            assert_eq!(params.get("DiskId"), Some("d-sys"));
            ok(json!({"SnapshotId": "s-1"}))
        }
        Some("DescribeSnapshots") => ok(json!({
            "TotalCount": 1,
            "Snapshots": {"Snapshot": [{"SnapshotId": "s-1", "Progress": "100%"}]}
        })),
        Some("CreateImage") => {
            assert_eq!(params.get("SnapshotId"), Some("s-1"));
            assert_eq!(params.get("ImageVersion"), Some("1.0"));
            assert!(!params.contains_key("OSName"));
            ok(json!({"ImageId": "m-1"}))
        }
        other => panic!("unexpected action {other:?}"),
    });
    let ecs =
        EcsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();

    let ids = ecs
        .create_image_from_instance("i-1", Some("1.0"), None, None, &Waiter::default())
        .await
        .unwrap();

    assert_eq!(ids, ("s-1".to_string(), "m-1".to_string()));
    assert_eq!(
        actions(&http),
        vec!["DescribeDisks", "CreateSnapshot", "DescribeSnapshots", "CreateImage"]
    );
}

#[tokio::test]
async fn test_create_image_without_system_disk() {
    let http = MockHttpSend::json(json!({
        "TotalCount": 1,
        "Disks": {"Disk": [{"DiskId": "d-data", "Type": "data"}]}
    }));
    let ecs =
        EcsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();

    let err = ecs
        .create_image_from_instance("i-1", None, None, None, &Waiter::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(err.to_string(), "System disk for i-1 not found");
    assert_eq!(http.urls().len(), 1);
}

#[tokio::test]
async fn test_load_balancers() {
    let http = MockHttpSend::json(json!({
        "LoadBalancers": {"LoadBalancer": [
            {"LoadBalancerId": "lb-1", "LoadBalancerName": "web", "LoadBalancerStatus": "active"},
            {"LoadBalancerId": "lb-2", "LoadBalancerName": "", "LoadBalancerStatus": "inactive"}
        ]}
    }));
    let slb =
        SlbConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();

    let status = slb.get_all_load_balancer_status(Some("i-1")).await.unwrap();
    assert_eq!(status[1].load_balancer_name, None);
    assert_eq!(http.requests()[0].get("ServerId"), Some("i-1"));

    assert_eq!(
        slb.get_all_load_balancer_ids().await.unwrap(),
        vec!["lb-1", "lb-2"]
    );
    assert!(!http.requests()[1].contains_key("ServerId"));
}

#[tokio::test]
async fn test_delete_record() {
    let http = MockHttpSend::new(|params| match params.get("Action") {
        Some("DescribeDomainRecords") => ok(json!({
            "DomainRecords": {"Record": [
                {"RecordId": "r-1", "RR": "www", "Type": "A", "Value": "1.1.1.1"},
                {"RecordId": "r-2", "RR": "www", "Type": "A", "Value": "2.2.2.2"}
            ]}
        })),
        Some("DeleteDomainRecord") => ok(json!({"RecordId": params.get("RecordId")})),
        other => panic!("unexpected action {other:?}"),
    });
    let dns =
        DnsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();

    let resp = dns
        .delete_record("example.com", "www", "2.2.2.2")
        .await
        .unwrap();
    assert_eq!(resp, Some(json!({"RecordId": "r-2"})));

    let missing = dns
        .delete_record("example.com", "mail", "2.2.2.2")
        .await
        .unwrap();
    assert_eq!(missing, None);
    assert_eq!(http.urls().len(), 3);
}

#[tokio::test]
async fn test_add_record_requires_values() {
    let http = MockHttpSend::json(json!({}));
    let dns =
        DnsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();

    let err = dns
        .add_record("example.com", "", "A", "1.1.1.1")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.urls().is_empty());

    dns.add_record("example.com", "www", "A", "1.1.1.1")
        .await
        .unwrap();
    let params = &http.requests()[0];
    assert_eq!(params.get("RR"), Some("www"));
    assert_eq!(params.get("Value"), Some("1.1.1.1"));
    assert!(!params.contains_key("RegionId"));
}

#[tokio::test]
async fn test_report_expiring_db_instances() {
    let soon = format_iso8601(now() + TimeDelta::days(3));
    let later = format_iso8601(now() + TimeDelta::days(30));
    let http = MockHttpSend::new(move |params| match params.get("Action") {
        Some("DescribeDBInstances") => ok(json!({
            "Items": {"DBInstance": [
                {"DBInstanceId": "rm-soon", "DBInstanceStatus": "Running"},
                {"DBInstanceId": "rm-later", "DBInstanceStatus": "Running"},
                {"DBInstanceId": "rm-postpaid", "DBInstanceStatus": "Running"}
            ]}
        })),
        Some("DescribeDBInstanceAttribute") => {
            let id = params.get("DBInstanceId").unwrap();
            let (pay_type, expire) = match id {
                "rm-soon" => ("Prepaid", soon.as_str()),
                "rm-later" => ("Prepaid", later.as_str()),
                _ => ("Postpaid", ""),
            };
            ok(json!({"Items": {"DBInstanceAttribute": [{
                "DBInstanceId": id,
                "RegionId": "cn-hangzhou",
                "DBInstanceStatus": "Running",
                "PayType": pay_type,
                "ExpireTime": expire
            }]}}))
        }
        other => panic!("unexpected action {other:?}"),
    });
    let rds = RdsConnection::with_credential(context(http), "cn-hangzhou", "ak", "sk").unwrap();

    let expiring = rds.report_expiring_db_instances(7).await.unwrap();
    assert_eq!(expiring, vec!["rm-soon"]);
}

#[tokio::test]
async fn test_describe_scaling_groups() {
    let http = MockHttpSend::json(json!({
        "TotalCount": 1,
        "ScalingGroups": {"ScalingGroup": [{
            "ScalingGroupId": "asg-1",
            "ScalingGroupName": "web",
            "ActiveScalingConfigurationId": "",
            "RegionId": "cn-hangzhou",
            "MinSize": 1,
            "MaxSize": "5",
            "DefaultCooldown": 300,
            "RemovalPolicies": {"RemovalPolicy": ["OldestInstance"]},
            "LoadBalancerId": "",
            "LifecycleState": "Active",
            "TotalCapacity": 2,
            "CreationTime": "2014-08-14T10:58Z"
        }]}
    }));
    let ess =
        EssConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk").unwrap();

    let groups = ess
        .describe_scaling_groups(&["asg-1", "asg-2"], &[])
        .await
        .unwrap();
    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.max_size, 5);
    assert_eq!(group.active_scaling_configuration_id, None);
    assert_eq!(group.removal_policies, vec!["OldestInstance"]);
    assert!(group.db_instance_ids.is_empty());
    assert!(group.creation_time.is_some());

    let params = &http.requests()[0];
    assert_eq!(params.get("ScalingGroupId.1"), Some("asg-1"));
    assert_eq!(params.get("ScalingGroupId.2"), Some("asg-2"));
    assert_eq!(params.get("PageSize"), Some("50"));
    assert_eq!(params.get("Version"), Some("2014-08-28"));
}
