use mockito::{Matcher, Mock, Server};
use serde_json::json;
use sprint_analytics::devops::client::MAX_WORK_ITEMS_PER_REQUEST;
use sprint_analytics::{
    AnalyticsError, AzureDevOpsClient, DevOpsApi, DevOpsConfig, WorkItemType,
};

// base64 of ":pat"
const BASIC_AUTH: &str = "Basic OnBhdA==";

fn client(server: &Server) -> AzureDevOpsClient {
    AzureDevOpsClient::new(DevOpsConfig::new("org", "pat").with_base_url(server.url())).unwrap()
}

#[tokio::test]
async fn iterations_are_read_as_dated_sprints() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/org/Proj/_apis/work/teamsettings/iterations")
        .match_query(Matcher::UrlEncoded("api-version".into(), "7.0".into()))
        .match_header("authorization", BASIC_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "count": 3,
                "value": [
                    { "name": "Sprint 1", "attributes": {
                        "startDate": "2024-01-01T00:00:00Z",
                        "finishDate": "2024-01-14T00:00:00Z" } },
                    { "name": "Backlog", "attributes": {} },
                    { "name": "Sprint 2", "attributes": {
                        "startDate": "2024-01-15T00:00:00Z",
                        "finishDate": "2024-01-28T00:00:00Z" } }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let sprints = client(&server).list_iterations("Proj").await.unwrap();

    mock.assert_async().await;
    let names = sprints.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Sprint 1", "Sprint 2"]);
}

#[tokio::test]
async fn classification_tree_takes_area_root() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/org/Proj/_apis/wit/classificationnodes")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("$depth".into(), "12".into()),
            Matcher::UrlEncoded("$expand".into(), "all".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "count": 2,
                "value": [
                    { "structureType": "iteration", "path": "\\Proj\\Iteration" },
                    { "structureType": "area", "path": "\\Proj\\Area", "hasChildren": true,
                      "children": [ { "structureType": "area", "path": "\\Proj\\Area\\Core" } ] }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let root = client(&server)
        .list_classification_tree("Proj", 12)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(root.path, r"\Proj\Area");
    assert_eq!(root.children[0].path, r"\Proj\Area\Core");
}

#[tokio::test]
async fn team_field_values_are_read_for_encoded_team() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            Matcher::Regex(r"^/org/Proj/Core(%20| )Team/_apis/work/teamsettings/teamfieldvalues".into()),
        )
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "field": { "referenceName": "System.AreaPath" },
                "defaultValue": "Proj\\Core",
                "values": [
                    { "value": "Proj\\Core", "includeChildren": true },
                    { "value": "Proj\\Shared", "includeChildren": false }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let values = client(&server)
        .get_team_field_values("Proj", "Core Team")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(values, vec![r"Proj\Core", r"Proj\Shared"]);
}

#[tokio::test]
async fn wiql_query_is_posted() {
    let mut server = Server::new_async().await;
    let query = "SELECT [System.Id] FROM WorkItems";
    let mock = server
        .mock("POST", "/org/Proj/_apis/wit/wiql")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({ "query": query })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "queryType": "flat",
                "workItems": [ { "id": 11, "url": "x" }, { "id": 12, "url": "y" } ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let ids = client(&server)
        .query_work_item_ids("Proj", query)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(ids, vec![11, 12]);
}

/// Work items endpoint expecting exactly `batch` in one request; answers with
/// the first id of the batch.
async fn work_items_mock(server: &mut Server, batch: &[u64]) -> Mock {
    let ids = batch.iter().map(|id| id.to_string()).collect::<Vec<_>>();
    server
        .mock("GET", "/org/Proj/_apis/wit/workitems")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api-version".into(), "7.0".into()),
            Matcher::UrlEncoded("ids".into(), ids.join(",")),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "count": 1,
                "value": [ { "id": batch[0], "fields": {
                    "System.WorkItemType": "User Story",
                    "System.AreaPath": "Proj\\Core",
                    "System.State": "Closed",
                    "System.AssignedTo": { "displayName": "Ann" },
                    "Microsoft.VSTS.Scheduling.StoryPoints": 3.0
                } } ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await
}

#[tokio::test]
async fn work_item_details_are_fetched_in_batches() {
    let mut server = Server::new_async().await;
    let ids = (1..=MAX_WORK_ITEMS_PER_REQUEST as u64 + 1).collect::<Vec<_>>();
    let (full, rest) = ids.split_at(MAX_WORK_ITEMS_PER_REQUEST);
    let full_batch = work_items_mock(&mut server, full).await;
    let last_batch = work_items_mock(&mut server, rest).await;

    let items = client(&server)
        .get_work_items_by_ids("Proj", &ids)
        .await
        .unwrap();

    full_batch.assert_async().await;
    last_batch.assert_async().await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[1].id, 201);
    assert_eq!(items[0].work_item_type, WorkItemType::UserStory);
    assert_eq!(items[0].assignee.as_deref(), Some("Ann"));
}

#[tokio::test]
async fn rejected_credentials_are_upstream_failures() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/org/_apis/projects/Proj/teams")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let result = client(&server).list_teams("Proj").await;

    match result {
        Err(AnalyticsError::UpstreamUnavailable { operation, reason }) => {
            assert_eq!(operation, "list teams");
            assert!(reason.contains("401"));
        }
        other => panic!("Expected upstream failure, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_payload_is_an_upstream_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/org/_apis/projects/Proj/teams")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>sign in</html>")
        .create_async()
        .await;

    let result = client(&server).list_teams("Proj").await;

    assert!(matches!(
        result,
        Err(AnalyticsError::UpstreamUnavailable { .. })
    ));
}

#[test]
fn client_requires_organization_and_token() {
    let no_org = AzureDevOpsClient::new(DevOpsConfig::new("", "pat"));
    assert!(matches!(no_org, Err(AnalyticsError::InvalidConfig(_))));

    let no_token = AzureDevOpsClient::new(DevOpsConfig::new("org", ""));
    assert!(matches!(no_token, Err(AnalyticsError::InvalidConfig(_))));

    let bad_url = AzureDevOpsClient::new(DevOpsConfig::new("org", "pat").with_base_url("nope"));
    assert!(matches!(bad_url, Err(AnalyticsError::InvalidConfig(_))));
}
