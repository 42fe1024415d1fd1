// 集成测试公共模块
//
// 提供测试辅助工具和共享功能

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use classmint::naming::TokenMapping;
use classmint::network::session::{AssetFetcher, FetchError};
use classmint::utils::url::Url;

pub const HEX_CLASS: &str = "a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4";
pub const GUID_ID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";
pub const NODE_ID: &str = "w-node-abcdefab-cdef-abcd-efab-cdefabcdef01-a1b2c3";

/// Builds a mapping from literal pairs
pub fn mapping(pairs: &[(&str, &str)]) -> TokenMapping {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// 不访问网络的资源获取器，记录每一次请求
#[derive(Default)]
pub struct StubFetcher {
    responses: BTreeMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.as_bytes().to_vec());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl AssetFetcher for StubFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        self.requests.borrow_mut().push(url.to_string());

        self.responses
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}
