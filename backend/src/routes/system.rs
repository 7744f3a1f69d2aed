// backend/src/routes/system.rs

use axum::Json;

use crate::models::{ResultDto, SystemInfo};

pub const SYSTEM_NAME: &str = "nordnotes";
pub const SYSTEM_VERSION: &str = "1.0.0";
pub const SYSTEM_LEGAL_NOTE: &str = "Copyright © 2022 Dariusz Depta Engos Software";

pub async fn info() -> Json<ResultDto<SystemInfo>> {
    Json(SystemInfo::from(SYSTEM_NAME, SYSTEM_VERSION, SYSTEM_LEGAL_NOTE))
}
