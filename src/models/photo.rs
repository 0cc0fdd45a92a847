// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Pexels photo search response.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PexelsResponse {
    pub photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PexelsPhoto {
    pub src: PexelsPhotoSource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PexelsPhotoSource {
    pub large: String,
}
