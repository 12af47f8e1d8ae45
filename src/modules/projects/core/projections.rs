use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::projects::use_cases::list_projects::projection::ProjectRow;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Insert(ProjectRow),
    UpdateDetails {
        project_id: String,
        name: String,
        description: String,
        budget_hours: Option<f64>,
        is_active: bool,
        updated_at: i64,
    },
    ReplaceMembers {
        project_id: String,
        member_ids: Vec<String>,
        updated_at: i64,
    },
    Remove {
        project_id: String,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &ProjectEvent) -> Vec<Mutation> {
    match event {
        ProjectEvent::ProjectCreatedV1(e) => vec![Mutation::Insert(ProjectRow {
            project_id: e.project_id.clone(),
            name: e.name.clone(),
            description: e.description.clone(),
            created_by: e.created_by.clone(),
            members: Vec::new(),
            budget_hours: e.budget_hours,
            is_active: true,
            created_at: e.created_at,
            updated_at: e.created_at,
            last_event_id: Some(format!("{stream_id}:{version}")),
        })],
        ProjectEvent::ProjectUpdatedV1(e) => vec![Mutation::UpdateDetails {
            project_id: e.project_id.clone(),
            name: e.name.clone(),
            description: e.description.clone(),
            budget_hours: e.budget_hours,
            is_active: e.is_active,
            updated_at: e.updated_at,
        }],
        ProjectEvent::ProjectMembersAssignedV1(e) => vec![Mutation::ReplaceMembers {
            project_id: e.project_id.clone(),
            member_ids: e.member_ids.clone(),
            updated_at: e.assigned_at,
        }],
        ProjectEvent::ProjectDeletedV1(e) => vec![Mutation::Remove {
            project_id: e.project_id.clone(),
        }],
    }
}
