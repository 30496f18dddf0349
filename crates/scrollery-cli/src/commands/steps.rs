use anyhow::Result;

use scrollery_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    let structure = config.step_structure()?;

    println!("Steps ({}):\n", structure.step_count());

    for (index, step) in structure.steps().iter().enumerate() {
        println!(
            "  {:>2}  {:<16} {:>8} .. {:<8} ({} long)",
            index,
            step.name,
            step.start,
            step.end(),
            step.duration
        );
    }

    println!("\nTotal length: {}", structure.total_length());
    if config.tracker.animate_only_once {
        println!("Plays once, ending at offset {}", config.animation_end());
    }

    Ok(())
}
