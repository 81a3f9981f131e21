// ABOUTME: About and contact page handlers
// ABOUTME: Contact submissions are logged and acknowledged, nothing is stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

use crate::utils::input::FormFields;
use axum::{body::Bytes, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

/// About page view-model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutView {
    /// Application name
    pub name: String,
    /// Application version
    pub version: String,
}

/// Contact page view-model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactView {
    /// Whether a submission was just received
    pub success: bool,
}

/// Static and contact page routes
pub struct PageRoutes;

impl PageRoutes {
    /// Create the page routes
    pub fn routes() -> Router {
        Router::new()
            .route("/about", get(Self::handle_about))
            .route(
                "/contact",
                get(Self::handle_contact_page).post(Self::handle_contact_submit),
            )
    }

    async fn handle_about() -> Json<AboutView> {
        Json(AboutView {
            name: "Kitchen Helper".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        })
    }

    async fn handle_contact_page() -> Json<ContactView> {
        Json(ContactView { success: false })
    }

    /// Missing fields are logged as empty
    async fn handle_contact_submit(body: Bytes) -> Json<ContactView> {
        let form = FormFields::parse(&body);

        info!(
            contact.name = %form.get_or_empty("name"),
            contact.email = %form.get_or_empty("email"),
            contact.subject = %form.get_or_empty("subject"),
            contact.message = %form.get_or_empty("message"),
            "Contact form submission received"
        );

        Json(ContactView { success: true })
    }
}
