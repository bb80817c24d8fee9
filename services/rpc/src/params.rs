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

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Parameters of a single API call.
///
/// Keys are case-sensitive and unique; inserting an existing key replaces
/// its value. Iteration is always in byte-wise key order, which is the
/// order the signature is computed over.
///
/// ```
/// use alicloud_rpc::Parameters;
///
/// let params = Parameters::new()
///     .with("Action", "DescribeInstanceStatus")
///     .with("PageSize", 50);
/// assert_eq!(params.get("PageSize"), Some("50"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(BTreeMap<String, String>);

impl Parameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Parameters::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a parameter, coercing the value to its string form.
    ///
    /// Returns the previous value of `key` if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) -> Option<String> {
        self.0.insert(key.into(), value.to_string())
    }

    /// Insert `value` only when it is `Some`.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Display>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Add list entries as `key.1`, `key.2`, ... `key.n`.
    pub fn push_list<I>(&mut self, key: &str, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (idx, value) in values.into_iter().enumerate() {
            self.insert(format!("{key}.{}", idx + 1), value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Overlay `other` on top of `self`; values from `other` win.
    pub fn extend(&mut self, other: Parameters) {
        self.0.extend(other.0);
    }

    /// Iterate over `(key, value)` pairs in byte-wise key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Parameters::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Parameters
where
    K: Into<String>,
    V: Display,
{
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl IntoIterator for Parameters {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
