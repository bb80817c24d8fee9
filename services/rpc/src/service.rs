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

use crate::constants::{DOMAIN_NAME, REGION_ID};
use crate::Parameters;
use alicloud_core::Error;
use std::fmt;
use std::str::FromStr;

/// Services reachable through a [`Connection`](crate::Connection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Elastic Compute Service.
    Ecs,
    /// Server Load Balancer.
    Slb,
    /// Alibaba Cloud DNS.
    Dns,
    /// Relational Database Service.
    Rds,
    /// Auto Scaling.
    Ess,
}

/// Endpoint and API version of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub service: Service,
    pub base_url: &'static str,
    pub api_version: &'static str,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Ecs => "ecs",
            Service::Slb => "slb",
            Service::Dns => "dns",
            Service::Rds => "rds",
            Service::Ess => "ess",
        }
    }

    pub fn descriptor(&self) -> ServiceDescriptor {
        let (base_url, api_version) = match self {
            Service::Ecs => ("https://ecs.aliyuncs.com", "2014-05-26"),
            Service::Slb => ("https://slb.aliyuncs.com", "2014-05-15"),
            Service::Dns => ("https://dns.aliyuncs.com", "2015-01-09"),
            Service::Rds => ("https://rds.aliyuncs.com", "2014-08-15"),
            Service::Ess => ("https://ess.aliyuncs.com", "2014-08-28"),
        };

        ServiceDescriptor {
            service: *self,
            base_url,
            api_version,
        }
    }

    /// Apply per-service protocol quirks to the merged parameters before signing.
    pub(crate) fn finalize_parameters(&self, params: &mut Parameters) {
        match self {
            // DNS is region-agnostic and rejects RegionId on domain calls.
            Service::Dns => {
                if params.contains_key(DOMAIN_NAME) {
                    params.remove(REGION_ID);
                }
            }
            Service::Ecs | Service::Slb | Service::Rds | Service::Ess => {}
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ecs" => Ok(Service::Ecs),
            "slb" => Ok(Service::Slb),
            "dns" => Ok(Service::Dns),
            "rds" => Ok(Service::Rds),
            "ess" => Ok(Service::Ess),
            _ => Err(Error::service_unsupported(format!(
                "service {s:?} is not supported, expected one of ecs, slb, dns, rds, ess"
            ))),
        }
    }
}
