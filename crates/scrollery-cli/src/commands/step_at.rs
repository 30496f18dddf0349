use anyhow::Result;

use scrollery_core::animation::interpolate::progress;
use scrollery_core::AppConfig;

pub fn run(config: &AppConfig, y: f64, current: usize) -> Result<()> {
    for line in describe(config, y, current)? {
        println!("{}", line);
    }
    Ok(())
}

/// Report which step `y` maps to when the page was in step `current`
pub fn describe(config: &AppConfig, y: f64, current: usize) -> Result<Vec<String>> {
    let structure = config.step_structure()?;
    structure.step_at(current)?;

    let clamped = y.max(0.0);
    let index = structure.step_for(clamped, current);
    let step = structure.step_at(index)?;

    let mut lines = vec![
        format!("Offset {} -> step {} ({})", y, index, step.name),
        format!(
            "  progress through step: {:.1}%",
            progress(clamped, step) * 100.0
        ),
    ];

    let inside_range = clamped > 0.0 && clamped < structure.total_length();
    if inside_range && !structure.steps().iter().any(|s| s.contains(clamped)) {
        lines.push(format!("  offset sits on a step boundary, step {} kept", current));
    }

    Ok(lines)
}
