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
use alicloud_core::ErrorKind;
use alicloud_rpc::ecs::EcsConnection;
use alicloud_rpc::{Connection, Parameters};
use http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

/// Serve `total` instances, 50 per page, honouring `PageNumber`.
fn instances(total: u64) -> MockHttpSend {
    MockHttpSend::new(move |params| {
        let page: u64 = params
            .get("PageNumber")
            .map(|v| v.parse().unwrap())
            .unwrap_or(1);
        let size: u64 = params.get("PageSize").unwrap().parse().unwrap();
        let first = (page - 1) * size;
        let statuses: Vec<_> = (first..total.min(first + size))
            .map(|i| json!({"InstanceId": format!("i-{i}"), "Status": "Running"}))
            .collect();

        let body = json!({
            "TotalCount": total,
            "PageNumber": page,
            "PageSize": size,
            "InstanceStatuses": {"InstanceStatus": statuses}
        });
        json_response(StatusCode::OK, &body.to_string())
    })
}

fn connection(http: MockHttpSend) -> Connection {
    Connection::with_credential(context(http), "cn-hangzhou", "ecs", "ak", "sk").unwrap()
}

#[test_case(0, 1; "empty")]
#[test_case(1, 1; "single item")]
#[test_case(50, 1; "exactly one page")]
#[test_case(51, 2; "one over a page")]
#[test_case(100, 2; "exactly two pages")]
#[test_case(101, 3; "one over two pages")]
#[tokio::test]
async fn test_page_count(total: u64, pages: usize) {
    let http = instances(total);
    let conn = connection(http.clone());

    let responses = conn
        .get_all_pages(Parameters::new().with("Action", "DescribeInstanceStatus"))
        .await
        .unwrap();
    assert_eq!(responses.len(), pages);

    let requests = http.requests();
    assert_eq!(requests.len(), pages);
    for (idx, req) in requests.iter().enumerate() {
        assert_eq!(req.get("PageSize"), Some("50"));
        let expected = (idx > 0).then(|| (idx + 1).to_string());
        assert_eq!(req.get("PageNumber"), expected.as_deref());
    }
    for (idx, resp) in responses.iter().enumerate() {
        assert_eq!(resp["PageNumber"], json!(idx + 1));
    }
}

#[tokio::test]
async fn test_pages_are_flattened_in_order() {
    let ecs = EcsConnection::from_connection(connection(instances(120))).unwrap();

    let ids = ecs.get_all_instance_ids(Some("cn-hangzhou-b")).await.unwrap();
    let expected: Vec<_> = (0..120).map(|i| format!("i-{i}")).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_zone_filter_is_sent() {
    let http = instances(3);
    let ecs = EcsConnection::from_connection(connection(http.clone())).unwrap();

    ecs.get_all_instance_status(Some("cn-hangzhou-b"))
        .await
        .unwrap();
    assert_eq!(http.requests()[0].get("ZoneId"), Some("cn-hangzhou-b"));

    ecs.get_all_instance_status(None).await.unwrap();
    assert!(!http.requests()[1].contains_key("ZoneId"));
}

#[tokio::test]
async fn test_missing_total_count() {
    let conn = connection(MockHttpSend::json(json!({"Regions": {}})));

    let err = conn
        .get_all_pages(Parameters::new().with("Action", "DescribeRegions"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}

#[tokio::test]
async fn test_page_error_stops_pagination() {
    let http = MockHttpSend::new(|params| match params.get("PageNumber") {
        None => json_response(StatusCode::OK, "{\"TotalCount\": 200}"),
        Some("2") => json_response(StatusCode::OK, "{\"TotalCount\": 200}"),
        Some(_) => json_response(StatusCode::SERVICE_UNAVAILABLE, "{\"Code\":\"Throttling\"}"),
    });
    let conn = connection(http.clone());

    let err = conn
        .get_all_pages(Parameters::new().with("Action", "DescribeInstanceStatus"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HttpStatus);
    assert_eq!(err.body(), Some("{\"Code\":\"Throttling\"}"));
    assert_eq!(http.requests().len(), 3);
}
