use crate::runner::test_context::TestContext;
use color_eyre::Result;

pub async fn test_health_endpoint(context: &TestContext) -> Result<()> {
    let response = context
        .http_client
        .get(context.url("/api/health"))
        .send()
        .await?;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await?, "OK");

    Ok(())
}
