// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::url_utils::resolve_url;
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;
use thiserror::Error;
use url::Url;

/// 文本提取时跳过的元素
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// 前后视为词边界的块级元素，其余元素内的文本直接拼接
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "td", "th", "title", "tr", "ul",
];

/// 链接中不跟随的协议前缀
const IGNORED_HREF_PREFIXES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// 解析错误
#[derive(Error, Debug)]
pub enum ParseError {
    /// 基础URL无效，无法解析相对链接
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// 从页面中提取的内容
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedPage {
    /// 可见文本，空白已规范化
    pub text: String,
    /// 图片的绝对URL，按出现顺序去重
    pub image_urls: Vec<String>,
    /// 超链接的绝对URL（去掉片段），按出现顺序去重
    pub link_urls: Vec<String>,
}

/// 提取服务
///
/// 从 HTML 中提取可见文本、图片和链接。HTML 解析器容错，
/// 残缺的标记会尽力提取而不是报错。
pub struct ExtractionService;

impl ExtractionService {
    /// 提取页面内容
    ///
    /// # 参数
    ///
    /// * `html` - HTML内容
    /// * `base_url` - 用于解析相对URL的基础URL，页面中的 `<base href>` 优先
    ///
    /// # 返回值
    ///
    /// * `Ok(ExtractedPage)` - 提取结果
    /// * `Err(ParseError)` - 基础URL无效
    pub fn extract(html: &str, base_url: &str) -> Result<ExtractedPage, ParseError> {
        let base = Url::parse(base_url).map_err(|e| ParseError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let document = Html::parse_document(html);
        let base = Self::document_base(&document, base);

        Ok(ExtractedPage {
            text: Self::extract_text(&document),
            image_urls: Self::extract_images(&document, &base),
            link_urls: Self::extract_links(&document, &base),
        })
    }

    /// 连续空白折叠为单个空格并去掉首尾空白
    pub fn normalize_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn document_base(document: &Html, fallback: Url) -> Url {
        let Ok(selector) = Selector::parse("base[href]") else {
            return fallback;
        };
        document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr("href"))
            .and_then(|href| resolve_url(&fallback, href.trim()).ok())
            .unwrap_or(fallback)
    }

    fn extract_text(document: &Html) -> String {
        let mut text = String::new();
        Self::collect_text(document.root_element(), &mut text);
        Self::normalize_whitespace(&text)
    }

    fn collect_text(element: ElementRef<'_>, out: &mut String) {
        let name = element.value().name();
        if HIDDEN_ELEMENTS.contains(&name) {
            return;
        }

        let block = BLOCK_ELEMENTS.contains(&name);
        if block {
            out.push(' ');
        }
        for child in element.children() {
            if let Some(child) = ElementRef::wrap(child) {
                Self::collect_text(child, out);
            } else if let Node::Text(text) = child.value() {
                out.push_str(text);
            }
        }
        if block {
            out.push(' ');
        }
    }

    fn extract_images(document: &Html, base: &Url) -> Vec<String> {
        let Ok(selector) = Selector::parse("img") else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        document
            .select(&selector)
            .filter_map(|element| {
                let attrs = element.value();
                attrs
                    .attr("src")
                    .filter(|src| !src.trim().is_empty())
                    .or_else(|| attrs.attr("data-src"))
            })
            .filter_map(|src| Self::resolve_http(base, src))
            .filter(|url| seen.insert(url.clone()))
            .collect()
    }

    fn extract_links(document: &Html, base: &Url) -> Vec<String> {
        let Ok(selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .filter(|href| {
                let href = href.trim();
                !href.is_empty()
                    && !href.starts_with('#')
                    && !IGNORED_HREF_PREFIXES
                        .iter()
                        .any(|prefix| href.to_ascii_lowercase().starts_with(prefix))
            })
            .filter_map(|href| Self::resolve_http(base, href))
            .filter(|url| seen.insert(url.clone()))
            .collect()
    }

    /// 解析为绝对 http(s) URL 并去掉片段
    fn resolve_http(base: &Url, raw: &str) -> Option<String> {
        let mut url = resolve_url(base, raw.trim()).ok()?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return None;
        }
        url.set_fragment(None);
        Some(url.to_string())
    }
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
