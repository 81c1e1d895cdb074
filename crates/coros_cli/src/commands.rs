//! The two command flows: list and interactive download.

use std::io::Write;
use std::path::Path;

use coros_client::{
    ActivityDescriptor, CorosClient, activities_from_response, file_type_for_format,
};

use crate::error::{CliError, CliResult};
use crate::render;

/// Log in, fetch one page of activities, and print them as a table.
pub async fn list<C, W>(client: &mut C, limit: u32, out: &mut W) -> CliResult<()>
where
    C: CorosClient,
    W: Write,
{
    client.login().await?;
    tracing::info!(limit, "fetching recent activities");
    let payload = client.get_activities(limit, 1).await?;
    let activities = activities_from_response(&payload);

    if activities.is_empty() {
        writeln!(out, "No activities found")?;
        return Ok(());
    }

    write!(out, "{}", render::activity_table(&activities))?;
    writeln!(out, "\nTotal: {} activities", activities.len())?;
    Ok(())
}

/// Log in, fetch a page of activities, let `choose` pick one (1-based),
/// and write the downloaded export file into `output_dir`.
///
/// `choose` is a seam for the interactive prompt; tests inject a fixed
/// selection.
pub async fn download<C, W, F>(
    client: &mut C,
    format: &str,
    limit: u32,
    output_dir: &Path,
    choose: F,
    out: &mut W,
) -> CliResult<()>
where
    C: CorosClient,
    W: Write,
    F: FnOnce(&[ActivityDescriptor]) -> CliResult<usize>,
{
    let file_type =
        file_type_for_format(format).ok_or_else(|| CliError::InvalidFormat(format.to_string()))?;

    client.login().await?;
    let payload = client.get_activities(limit, 1).await?;
    let activities = activities_from_response(&payload);

    if activities.is_empty() {
        writeln!(out, "No activities found")?;
        return Ok(());
    }

    writeln!(out, "Select an activity to download:\n")?;
    for (i, a) in activities.iter().enumerate() {
        writeln!(
            out,
            "  {:2}. {} - {}",
            i + 1,
            render::format_date_time(a.date, a.start_time),
            render::display_name(a),
        )?;
    }

    let selection = choose(&activities)?;
    if selection < 1 || selection > activities.len() {
        return Err(CliError::InvalidSelection {
            chosen: selection,
            count: activities.len(),
        });
    }
    let activity = &activities[selection - 1];

    writeln!(
        out,
        "\nDownloading {} as {}...",
        render::display_name(activity),
        format.to_uppercase()
    )?;
    // The download endpoint keys the file by label id and sport type
    // together, so pass the sport type exactly as listed.
    let (bytes, ext) = client
        .download_activity(&activity.label_id, activity.sport_type, file_type)
        .await?;

    std::fs::create_dir_all(output_dir)?;
    let file_name = render::output_file_name(activity.name.as_deref(), &activity.label_id, ext);
    let path = output_dir.join(file_name);
    std::fs::write(&path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved activity file");
    writeln!(out, "Saved to {}", path.display())?;
    Ok(())
}
