use crate::modules::projects::core::events::v1::project_created::ProjectCreatedV1;
use crate::tests::fixtures::actors::admin;

pub fn make_project_created_v1_event(project_id: &str, name: &str) -> ProjectCreatedV1 {
    ProjectCreatedV1 {
        project_id: project_id.to_string(),
        name: name.to_string(),
        description: "Moon landing".to_string(),
        budget_hours: Some(120.0),
        created_at: 1_736_150_400_000,
        created_by: admin().user_id,
    }
}
