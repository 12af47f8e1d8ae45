use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::projects::core::state::{Project, ProjectState};

pub fn evolve(state: ProjectState, event: ProjectEvent) -> ProjectState {
    match (state, event) {
        (ProjectState::None, ProjectEvent::ProjectCreatedV1(e)) => ProjectState::Existing(Project {
            project_id: e.project_id,
            name: e.name,
            description: e.description,
            created_by: e.created_by,
            members: Vec::new(),
            budget_hours: e.budget_hours,
            is_active: true,
            created_at: e.created_at,
            updated_at: e.created_at,
        }),
        (ProjectState::Existing(project), ProjectEvent::ProjectUpdatedV1(e)) => {
            ProjectState::Existing(Project {
                name: e.name,
                description: e.description,
                budget_hours: e.budget_hours,
                is_active: e.is_active,
                updated_at: e.updated_at,
                ..project
            })
        }
        (ProjectState::Existing(project), ProjectEvent::ProjectMembersAssignedV1(e)) => {
            ProjectState::Existing(Project {
                members: e.member_ids,
                updated_at: e.assigned_at,
                ..project
            })
        }
        (ProjectState::Existing(_), ProjectEvent::ProjectDeletedV1(_)) => ProjectState::Deleted,
        (state, _) => state,
    }
}
