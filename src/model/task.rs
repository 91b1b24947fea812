// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::catalogue::GenerationStatus;
use super::ids::TaskId;

/// Repository task metadata shown above the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    pub task_id: TaskId,
    #[serde(default)]
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GenerationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::TaskDetail;
    use crate::model::GenerationStatus;

    #[test]
    fn deserializes_task_view() {
        let json = r#"{
            "id": 12,
            "taskId": "task-42",
            "projectName": "wikiview",
            "projectUrl": "https://example.com/wikiview.git",
            "userName": "dev",
            "status": 1,
            "failReason": null,
            "createTime": "2025-07-23T21:48:00",
            "updateTime": null
        }"#;

        let task: TaskDetail = serde_json::from_str(json).expect("task");
        assert_eq!(task.task_id.as_str(), "task-42");
        assert_eq!(task.project_name, "wikiview");
        assert_eq!(task.status, Some(GenerationStatus::InProgress));
        assert_eq!(task.fail_reason, None);
    }
}
