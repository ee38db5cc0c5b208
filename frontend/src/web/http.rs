//! HTTP 请求封装模块
//!
//! 基于 `web_sys::fetch` 的最小 JSON 客户端，面向 Supabase 的
//! REST 访问模式（apikey / Bearer 头 + JSON 体）。

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// HTTP 错误类型
#[derive(Debug)]
pub enum HttpError {
    /// 请求构建失败
    Build(String),
    /// 网络请求失败
    Network(String),
    /// 响应解析失败
    Parse(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::Build(msg) => write!(f, "falha ao montar requisição: {}", msg),
            HttpError::Network(msg) => write!(f, "erro de rede: {}", msg),
            HttpError::Parse(msg) => write!(f, "falha ao ler resposta: {}", msg),
        }
    }
}

fn js_detail(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// HTTP 响应封装
pub struct HttpResponse {
    inner: Response,
}

impl HttpResponse {
    pub fn status(&self) -> u16 {
        self.inner.status()
    }

    /// 响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        self.inner.ok()
    }

    /// 读取响应体文本
    pub async fn text(self) -> Result<String, HttpError> {
        let promise = self.inner.text().map_err(|e| HttpError::Parse(js_detail(e)))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| HttpError::Parse(js_detail(e)))?;
        text.as_string()
            .ok_or_else(|| HttpError::Parse("corpo não é texto".to_string()))
    }

    /// 读取响应体并反序列化为 JSON
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        let body = self.text().await?;
        serde_json::from_str(&body).map_err(|e| HttpError::Parse(e.to_string()))
    }
}

/// HTTP 请求构建器
pub struct RequestBuilder {
    method: &'static str,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl RequestBuilder {
    fn new(method: &'static str, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// 添加请求头
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// Bearer 认证头
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// JSON 请求体（自动附带 Content-Type）
    pub fn json(mut self, body: &serde_json::Value) -> Self {
        self.body = Some(body.to_string());
        self.header("Content-Type", "application/json")
    }

    /// 发送请求
    pub async fn send(self) -> Result<HttpResponse, HttpError> {
        let init = RequestInit::new();
        init.set_method(self.method);
        if let Some(body) = &self.body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&self.url, &init)
            .map_err(|e| HttpError::Build(js_detail(e)))?;

        // 头部直接写在已构建的 Request 上
        for (key, value) in &self.headers {
            request
                .headers()
                .set(key, value)
                .map_err(|e| HttpError::Build(js_detail(e)))?;
        }

        let window = web_sys::window()
            .ok_or_else(|| HttpError::Network("window indisponível".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::Network(js_detail(e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::Parse(js_detail(e)))?;

        Ok(HttpResponse { inner: response })
    }
}

/// 轻量级 HTTP 客户端
pub struct HttpClient;

impl HttpClient {
    pub fn get(url: &str) -> RequestBuilder {
        RequestBuilder::new("GET", url)
    }

    pub fn post(url: &str) -> RequestBuilder {
        RequestBuilder::new("POST", url)
    }

    pub fn patch(url: &str) -> RequestBuilder {
        RequestBuilder::new("PATCH", url)
    }
}
