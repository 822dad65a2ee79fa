// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 规范化主机名：小写并去掉一个前导 `www.`
pub fn normalized_host(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) if !rest.is_empty() => Some(rest.to_string()),
        _ => Some(host),
    }
}

/// 判断两个URL是否属于同一域名
///
/// 两个URL都能解析且规范化后的主机名相同时返回true，
/// 任一URL无法解析或没有主机名时返回false
pub fn same_domain(url_a: &str, url_b: &str) -> bool {
    let (Ok(a), Ok(b)) = (Url::parse(url_a), Url::parse(url_b)) else {
        return false;
    };
    match (normalized_host(&a), normalized_host(&b)) {
        (Some(host_a), Some(host_b)) => host_a == host_b,
        _ => false,
    }
}
