//! Profile command handler

use crate::config::Config;
use crate::profile::Profile;

pub fn cmd_profile(config: &Config, json: bool) -> anyhow::Result<()> {
    let profile = Profile::resolve(config.profile.path.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let info = &profile.personal;
    println!("{} - {}", info.full_name, info.role);
    println!("{}", info.headline);
    println!("📍 {}", info.location);
    println!();

    println!("Experience");
    println!("{:-<60}", "");
    for job in &profile.experience {
        println!("{} @ {} ({})", job.title, job.company, job.period);
        if let Some(note) = &job.highlight {
            println!("  * {note}");
        }
        for line in &job.description {
            println!("  - {line}");
        }
        for project in &job.projects {
            println!("  {}", project.title);
            for line in &project.description {
                println!("    - {line}");
            }
        }
    }
    println!();

    println!("Education");
    println!("{:-<60}", "");
    for edu in &profile.education {
        println!("{}, {} ({})", edu.degree, edu.school, edu.period);
        for honor in &edu.honors {
            println!("  ★ {honor}");
        }
        for detail in &edu.details {
            println!("  - {detail}");
        }
    }
    println!();

    println!("Skills");
    println!("{:-<60}", "");
    for category in &profile.skills {
        println!("{}: {}", category.category, category.skills.join(", "));
    }
    println!();

    println!("✉ {}  in {}  ⌥ {}", info.email, info.linkedin, info.github);

    Ok(())
}
