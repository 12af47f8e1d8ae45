use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, MergedObject, Result as GqlResult, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension,
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
};

use crate::modules::time_entries::adapters::inbound::graphql::{TimeEntriesMutation, TimeEntriesQuery};
use crate::modules::weekly_timesheets::adapters::inbound::graphql::{
    WeeklyTimesheetsMutation, WeeklyTimesheetsQuery,
};
use crate::shared::core::actor::Actor;
use crate::shell::auth::resolve_actor;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TimeEntriesQuery, WeeklyTimesheetsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(TimeEntriesMutation, WeeklyTimesheetsMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// The caller resolved from the request headers, if any.
pub fn request_actor<'a>(context: &Context<'a>) -> GqlResult<&'a Actor> {
    context
        .data_opt::<Actor>()
        .ok_or_else(|| "not authenticated".into())
}

pub async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Ok(actor) = resolve_actor(&state, &headers).await {
        request = request.data(actor);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
