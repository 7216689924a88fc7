// ABOUTME: In-process HTTP client for router integration tests
// ABOUTME: Sends one request through a Router via tower oneshot and buffers the reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::body::{to_bytes, Body};
use axum::http::{request::Builder, HeaderMap, Request, Response};
use axum::Router;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

/// GET request under construction
pub struct TestRequest {
    builder: Builder,
}

impl TestRequest {
    pub fn get(uri: &str) -> Self {
        Self {
            builder: Request::get(uri),
        }
    }

    pub fn header(self, name: &str, value: &str) -> Self {
        Self {
            builder: self.builder.header(name, value),
        }
    }

    /// Route the request through `app` without binding a socket
    pub async fn send(self, app: Router) -> TestResponse {
        let request = self.builder.body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        TestResponse::read(response).await
    }
}

/// Buffered response
pub struct TestResponse {
    status: u16,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    async fn read(response: Response<Body>) -> Self {
        let (parts, body) = response.into_parts();
        Self {
            status: parts.status.as_u16(),
            headers: parts.headers,
            body: to_bytes(body, usize::MAX).await.unwrap().to_vec(),
        }
    }

    pub const fn status(&self) -> u16 {
        self.status
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "response body is not the expected JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }
}
