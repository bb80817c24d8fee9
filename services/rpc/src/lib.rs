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

//! Client for Alibaba Cloud's signed query (RPC style) APIs.
//!
//! This crate builds signed `GET` requests for ECS, SLB, DNS, RDS and ESS,
//! sends them through the [`Context`](alicloud_core::Context) HTTP client and
//! returns the parsed JSON, or typed records for the resource clients.
//!
//! ## Quick Start
//!
//! ```no_run
//! use alicloud_core::{Context, OsEnv, Result};
//! use alicloud_file_read_tokio::TokioFileRead;
//! use alicloud_http_send_reqwest::ReqwestHttpSend;
//! use alicloud_rpc::{Connection, Parameters};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     // Credentials come from ALI_ACCESS_KEY_ID / ALI_SECRET_ACCESS_KEY,
//!     // then ~/.aliyun.cfg, then /etc/aliyun.cfg.
//!     let conn = Connection::new(ctx, "cn-hangzhou", "ecs").await?;
//!
//!     let regions = conn
//!         .get(Parameters::new().with("Action", "DescribeRegions"))
//!         .await?;
//!     println!("{regions}");
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export ALI_ACCESS_KEY_ID=your-access-key-id
//! export ALI_SECRET_ACCESS_KEY=your-secret-access-key
//! ```
//!
//! Both must be set, otherwise the credential files are tried.
//!
//! ### Credential File
//!
//! `~/.aliyun.cfg`, or `/etc/aliyun.cfg` when the former does not exist:
//!
//! ```ini
//! [default]
//! access_key_id=your-access-key-id
//! secret_access_key=your-secret-access-key
//! ```
//!
//! ## Pagination
//!
//! [`Connection::get_all_pages`] requests 50 items per page and follows
//! `TotalCount` until every page is fetched. Pages are returned as-is.
//!
//! ## Resource Clients
//!
//! [`ecs::EcsConnection`], [`slb::SlbConnection`], [`dns::DnsConnection`],
//! [`rds::RdsConnection`] and [`ess::EssConnection`] wrap a [`Connection`]
//! and map responses into typed records.

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod params;
pub use params::Parameters;

mod service;
pub use service::{Service, ServiceDescriptor};

pub mod sign;

mod build;
pub use build::{RequestBuilder, SignedRequest};

mod transport;
pub use transport::execute;

mod paginate;
pub use paginate::{page_count, remaining_pages};

mod wait;
pub use wait::Waiter;

mod connection;
pub use connection::Connection;

mod model;

pub mod dns;
pub mod ecs;
pub mod ess;
pub mod rds;
pub mod slb;
