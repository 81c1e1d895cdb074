use coros_client::{
    CorosClient, activities_from_response, config::Config, http_client::ReqwestCorosClient,
    sport_types::sport_label,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env()?;
    let mut client = ReqwestCorosClient::from_config(cfg);
    client.login().await?;

    let limit = std::env::var("COROS_LIMIT")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(5);

    let payload = client.get_activities(limit, 1).await?;
    let activities = activities_from_response(&payload);

    if activities.is_empty() {
        println!("No recent activities returned (check credentials or region)");
        return Ok(());
    }

    println!("Recent activities (limit {}):", limit);
    for a in activities {
        let name = a.name.unwrap_or_else(|| "(no name)".to_string());
        println!("- {} [{}] {}", a.label_id, sport_label(a.sport_type), name);
    }

    Ok(())
}
