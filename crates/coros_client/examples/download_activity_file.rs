use coros_client::{
    CorosClient, activities_from_response, config::Config, file_type_for_format,
    http_client::ReqwestCorosClient,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env()?;

    let label_id = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("COROS_LABEL_ID").ok());
    let format = std::env::var("COROS_FORMAT").unwrap_or_else(|_| "gpx".to_string());
    let file_type = file_type_for_format(&format).ok_or("unknown format")?;

    let mut client = ReqwestCorosClient::from_config(cfg);
    client.login().await?;

    // The download endpoint keys the file by id and sport type together,
    // so resolve both from the listing.
    let payload = client.get_activities(20, 1).await?;
    let activities = activities_from_response(&payload);
    let picked = match label_id {
        Some(id) => activities.iter().find(|a| a.label_id == id),
        None => activities.first(),
    };
    let Some(activity) = picked else {
        eprintln!("no matching activity found in the most recent page");
        return Ok(());
    };

    let (bytes, ext) = client
        .download_activity(&activity.label_id, activity.sport_type, file_type)
        .await?;
    let out = format!("{}.{}", activity.label_id, ext);
    std::fs::write(&out, &bytes)?;
    println!("Saved activity {} to {out} ({} bytes)", activity.label_id, bytes.len());
    Ok(())
}
