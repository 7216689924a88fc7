// ABOUTME: HTTP middleware for cross-origin access and request correlation
// ABOUTME: CORS layer construction and request ID propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request ID generation and span creation
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{
    make_request_span, record_response, MakeRequestIdentifier, REQUEST_ID_HEADER,
};
