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

//! List ECS regions and the instances of one region.
//!
//! ```bash
//! export ALI_ACCESS_KEY_ID=...
//! export ALI_SECRET_ACCESS_KEY=...
//! cargo run --example describe_regions -- cn-hangzhou
//! ```

use alicloud_core::{Context, OsEnv};
use alicloud_file_read_tokio::TokioFileRead;
use alicloud_http_send_reqwest::ReqwestHttpSend;
use alicloud_rpc::ecs::EcsConnection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().try_init();

    let region = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "cn-hangzhou".to_string());

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let ecs = EcsConnection::new(ctx, &region).await?;

    for r in ecs.get_all_regions().await? {
        println!(
            "{}\t{}",
            r.region_id,
            r.local_name.as_deref().unwrap_or("-")
        );
    }

    for status in ecs.get_all_instance_status(None).await? {
        println!("{}\t{}", status.instance_id, status.status);
    }

    Ok(())
}
