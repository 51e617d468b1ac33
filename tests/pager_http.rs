//
//  ibm-continuous-delivery
//  tests/pager_http.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use ibm_continuous_delivery::api::common::PagerState;
use ibm_continuous_delivery::api::tekton::{CdTektonPipelineV2, ListTektonPipelineRunsParams};
use ibm_continuous_delivery::api::toolchain::{CdToolchainV2, ListToolchainsParams, ListToolsParams};
use ibm_continuous_delivery::api::ApiError;
use ibm_continuous_delivery::auth::Authenticator;
use mockito::Matcher;
use serde_json::json;

fn run(id: &str) -> serde_json::Value {
    json!({"id": id, "status": "succeeded"})
}

#[tokio::test]
async fn pipeline_runs_follow_next_href() {
    let mut server = mockito::Server::new_async().await;
    let next_href = format!(
        "{}/tekton_pipelines/p1/pipeline_runs?limit=2&start=p2",
        server.url()
    );

    let first = server
        .mock("GET", "/tekton_pipelines/p1/pipeline_runs")
        .match_query(Matcher::Exact("limit=2".to_string()))
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body(
            json!({
                "pipeline_runs": [run("A"), run("B")],
                "limit": 2,
                "first": {"href": "ignored"},
                "next": {"href": next_href}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", "/tekton_pipelines/p1/pipeline_runs")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "p2".into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(json!({"pipeline_runs": [run("C")], "limit": 2}).to_string())
        .create_async()
        .await;

    let service = CdTektonPipelineV2::new(&server.url(), Authenticator::bearer("tok")).unwrap();
    let mut pager = service
        .tekton_pipeline_runs_pager(ListTektonPipelineRunsParams::new("p1").limit(2))
        .unwrap();

    assert!(pager.has_next());
    let ids: Vec<String> = pager.get_next().await.unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["A", "B"]);
    assert!(pager.has_next());
    let ids: Vec<String> = pager.get_next().await.unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["C"]);
    assert!(!pager.has_next());
    assert!(matches!(
        pager.get_next().await,
        Err(ApiError::IteratorExhausted)
    ));

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn toolchains_follow_direct_start() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/toolchains")
        .match_query(Matcher::Exact("resource_group_id=rg1".to_string()))
        .with_status(200)
        .with_body(
            json!({
                "total_count": 3,
                "limit": 2,
                "first": {"href": "https://example.com/toolchains?resource_group_id=rg1"},
                "next": {"start": "XYZ987", "href": "https://example.com/elsewhere"},
                "toolchains": [{"id": "tc1", "name": "one"}, {"id": "tc2", "name": "two"}]
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/toolchains")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("resource_group_id".into(), "rg1".into()),
            Matcher::UrlEncoded("start".into(), "XYZ987".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "total_count": 3,
                "limit": 2,
                "toolchains": [{"id": "tc3", "name": "three"}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = CdToolchainV2::new(&server.url(), Authenticator::NoAuth).unwrap();
    let toolchains = service
        .toolchains_pager(ListToolchainsParams::new("rg1"))
        .unwrap()
        .get_all()
        .await
        .unwrap();

    let names: Vec<&str> = toolchains.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["one", "two", "three"]);
}

#[tokio::test]
async fn toolchains_follow_start_without_href() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/toolchains")
        .match_query(Matcher::Exact("resource_group_id=rg1".to_string()))
        .with_status(200)
        .with_body(
            json!({
                "limit": 1,
                "next": {"start": "XYZ987"},
                "toolchains": [{"id": "tc1", "name": "one"}]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", "/toolchains")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("resource_group_id".into(), "rg1".into()),
            Matcher::UrlEncoded("start".into(), "XYZ987".into()),
        ]))
        .with_status(200)
        .with_body(json!({"limit": 1, "toolchains": [{"id": "tc2", "name": "two"}]}).to_string())
        .create_async()
        .await;

    let service = CdToolchainV2::new(&server.url(), Authenticator::NoAuth).unwrap();
    let mut pager = service.toolchains_pager(ListToolchainsParams::new("rg1")).unwrap();

    assert_eq!(pager.get_next().await.unwrap()[0].id, "tc1");
    assert_eq!(pager.next_cursor(), Some("XYZ987"));
    assert_eq!(pager.get_next().await.unwrap()[0].id, "tc2");
    assert!(!pager.has_next());
    second.assert_async().await;
}

#[tokio::test]
async fn empty_start_in_next_href_ends_listing() {
    let mut server = mockito::Server::new_async().await;
    let next_href = format!("{}/tekton_pipelines/p1/pipeline_runs?start=", server.url());

    let listing = server
        .mock("GET", "/tekton_pipelines/p1/pipeline_runs")
        .with_status(200)
        .with_body(json!({"pipeline_runs": [run("A")], "next": {"href": next_href}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let service = CdTektonPipelineV2::new(&server.url(), Authenticator::NoAuth).unwrap();
    let runs = service
        .tekton_pipeline_runs_pager(ListTektonPipelineRunsParams::new("p1"))
        .unwrap()
        .get_all()
        .await
        .unwrap();

    assert_eq!(runs.len(), 1);
    listing.assert_async().await;
}

#[tokio::test]
async fn failed_page_can_be_retried_with_same_cursor() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/toolchains/tc1/tools")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body(
            json!({
                "limit": 1,
                "total_count": 2,
                "next": {"start": "t2", "href": "https://example.com/toolchains/tc1/tools?start=t2"},
                "tools": [{"id": "t1", "tool_type_id": "pipeline"}]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let unavailable = server
        .mock("GET", "/toolchains/tc1/tools")
        .match_query(Matcher::UrlEncoded("start".into(), "t2".into()))
        .with_status(503)
        .with_body(r#"{"errors":[{"code":"unavailable","message":"try again"}]}"#)
        .create_async()
        .await;

    let service = CdToolchainV2::new(&server.url(), Authenticator::NoAuth).unwrap();
    let mut pager = service.tools_pager(ListToolsParams::new("tc1")).unwrap();

    assert_eq!(pager.get_next().await.unwrap()[0].id, "t1");
    let err = pager.get_next().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::ServerError { status: 503, ref message } if message == "try again"
    ));
    assert_eq!(pager.state(), PagerState::HasMore);
    assert_eq!(pager.next_cursor(), Some("t2"));

    unavailable.remove_async().await;
    let recovered = server
        .mock("GET", "/toolchains/tc1/tools")
        .match_query(Matcher::UrlEncoded("start".into(), "t2".into()))
        .with_status(200)
        .with_body(
            json!({"limit": 1, "total_count": 2, "tools": [{"id": "t2", "tool_type_id": "github"}]})
                .to_string(),
        )
        .create_async()
        .await;

    assert_eq!(pager.get_next().await.unwrap()[0].id, "t2");
    assert!(!pager.has_next());
    recovered.assert_async().await;
}

#[tokio::test]
async fn get_all_is_all_or_nothing() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/tekton_pipelines/p1/pipeline_runs")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body(
            json!({
                "pipeline_runs": [run("A")],
                "next": {"href": "/tekton_pipelines/p1/pipeline_runs?start=p2"}
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/tekton_pipelines/p1/pipeline_runs")
        .match_query(Matcher::UrlEncoded("start".into(), "p2".into()))
        .with_status(401)
        .with_body(r#"{"errors":[{"code":"not_authorized","message":"token expired"}]}"#)
        .create_async()
        .await;

    let service = CdTektonPipelineV2::new(&server.url(), Authenticator::bearer("old")).unwrap();
    let result = service
        .tekton_pipeline_runs_pager(ListTektonPipelineRunsParams::new("p1"))
        .unwrap()
        .get_all()
        .await;

    assert!(matches!(result, Err(ApiError::AuthFailed(ref m)) if m == "token expired"));
}
