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

use crate::mock::{context, json_response, CapturingLog, MockHttpSend, PanicFileRead};
use alicloud_core::{Context, ErrorKind, StaticEnv};
use alicloud_rpc::dns::DnsConnection;
use alicloud_rpc::ecs::{EcsConnection, Region};
use alicloud_rpc::sign::sign;
use alicloud_rpc::{Connection, Parameters};
use http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashMap;

fn regions() -> serde_json::Value {
    json!({
        "RequestId": "C9E2B4A5-6C1D-4E6A-9F2B-1A2B3C4D5E6F",
        "Regions": {"Region": [
            {"RegionId": "cn-hangzhou", "LocalName": "华东 1"},
            {"RegionId": "cn-qingdao", "LocalName": ""}
        ]}
    })
}

/// Assert `Signature` matches one computed independently over the other parameters.
fn assert_signed(params: &Parameters, secret: &str) {
    let mut unsigned = params.clone();
    let signature = unsigned.remove("Signature").expect("request must be signed");
    assert_eq!(signature, sign(secret, &unsigned));
}

#[tokio::test]
async fn test_describe_regions_end_to_end() {
    let http = MockHttpSend::json(regions());
    let conn = Connection::with_credential(
        context(http.clone()),
        "cn-hangzhou",
        "ecs",
        "access_key_id",
        "secret_access_key",
    )
    .unwrap();

    let resp = conn
        .get(Parameters::new().with("Action", "DescribeRegions"))
        .await
        .unwrap();
    assert_eq!(resp, regions());

    let urls = http.urls();
    assert_eq!(urls.len(), 1);
    let url = &urls[0];
    assert!(url.starts_with("https://ecs.aliyuncs.com/?"), "{url}");
    for pair in [
        "Action=DescribeRegions",
        "Format=JSON",
        "Version=2014-05-26",
        "AccessKeyId=access_key_id",
        "RegionId=cn-hangzhou",
        "SignatureMethod=HMAC-SHA1",
        "SignatureVersion=1.0",
        "Signature=",
    ] {
        assert!(url.contains(pair), "{url} has no {pair}");
    }

    let params = &http.requests()[0];
    assert!(params.contains_key("SignatureNonce"));
    assert!(params.contains_key("TimeStamp"));
    assert_signed(params, "secret_access_key");
}

#[tokio::test]
async fn test_http_error_keeps_body() {
    let body = "{\"Code\":\"InvalidParameter\"}";
    let http = MockHttpSend::new(move |_| json_response(StatusCode::BAD_REQUEST, body));
    let conn =
        Connection::with_credential(context(http), "cn-hangzhou", "ecs", "ak", "sk").unwrap();

    let err = conn
        .get(Parameters::new().with("Action", "DescribeRegions"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::HttpStatus);
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(err.body(), Some(body));
}

#[tokio::test]
async fn test_invalid_json_is_an_error() {
    let http = MockHttpSend::new(|_| json_response(StatusCode::OK, "<html>"));
    let conn =
        Connection::with_credential(context(http), "cn-hangzhou", "ecs", "ak", "sk").unwrap();

    let err = conn.get(Parameters::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}

#[tokio::test]
async fn test_logs_go_to_injected_logger() {
    let logger = CapturingLog::default();
    let http = MockHttpSend::new(|params| match params.get("Action") {
        Some("DescribeRegions") => json_response(StatusCode::OK, "{}"),
        _ => json_response(StatusCode::FORBIDDEN, "{\"Code\":\"Forbidden\"}"),
    });
    let ctx = Context::new()
        .with_http_send(http.clone())
        .with_logger(logger.clone());
    let conn = Connection::with_credential(ctx, "cn-hangzhou", "ecs", "ak", "sk").unwrap();

    conn.get(Parameters::new().with("Action", "DescribeRegions"))
        .await
        .unwrap();
    conn.get(Parameters::new().with("Action", "DeleteInstance"))
        .await
        .unwrap_err();

    let urls = http.urls();
    let records = logger.records();
    assert!(records.contains(&(log::Level::Debug, format!("URL requested: {}", urls[0]))));
    assert!(records.contains(&(log::Level::Debug, "URL response: {}".to_string())));
    assert!(records.contains(&(log::Level::Error, format!("Error GETing URL: {}", urls[1]))));
}

#[tokio::test]
async fn test_env_credentials_skip_files() {
    let http = MockHttpSend::json(json!({}));
    let ctx = Context::new()
        .with_http_send(http.clone())
        .with_file_read(PanicFileRead)
        .with_env(StaticEnv {
            home_dir: Some("/home/alice".into()),
            envs: HashMap::from([
                ("ALI_ACCESS_KEY_ID".to_string(), "env_key".to_string()),
                ("ALI_SECRET_ACCESS_KEY".to_string(), "env_secret".to_string()),
            ]),
        });

    let conn = Connection::new(ctx, "cn-hangzhou", "slb").await.unwrap();
    conn.get(Parameters::new()).await.unwrap();

    let params = &http.requests()[0];
    assert_eq!(params.get("AccessKeyId"), Some("env_key"));
    assert_eq!(params.get("Version"), Some("2014-05-15"));
    assert_signed(params, "env_secret");
}

#[tokio::test]
async fn test_typed_regions() {
    let http = MockHttpSend::json(regions());
    let ecs = EcsConnection::with_credential(context(http), "cn-hangzhou", "ak", "sk").unwrap();

    let regions = ecs.get_all_regions().await.unwrap();
    assert_eq!(
        regions,
        vec![
            Region {
                region_id: "cn-hangzhou".to_string(),
                local_name: Some("华东 1".to_string()),
            },
            Region {
                region_id: "cn-qingdao".to_string(),
                local_name: None,
            },
        ]
    );
    assert_eq!(
        ecs.get_all_region_ids().await.unwrap(),
        vec!["cn-hangzhou", "cn-qingdao"]
    );
}

#[tokio::test]
async fn test_dns_requests_drop_region() {
    let http = MockHttpSend::json(json!({
        "TotalCount": 1,
        "DomainRecords": {"Record": [
            {"RecordId": "r-1", "RR": "www", "Type": "A", "Value": "1.2.3.4", "TTL": 600}
        ]}
    }));
    let dns = DnsConnection::with_credential(context(http.clone()), "cn-hangzhou", "ak", "sk")
        .unwrap();

    let records = dns.get_all_records("example.com").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].ttl, Some(600));

    let params = &http.requests()[0];
    assert_eq!(params.get("DomainName"), Some("example.com"));
    assert!(!params.contains_key("RegionId"));
    assert_eq!(params.get("Version"), Some("2015-01-09"));
    assert_signed(params, "sk");
}

#[tokio::test]
async fn test_from_connection_checks_service() {
    let conn = Connection::with_credential(
        context(MockHttpSend::json(json!({}))),
        "cn-hangzhou",
        "slb",
        "ak",
        "sk",
    )
    .unwrap();

    let err = EcsConnection::from_connection(conn).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}
